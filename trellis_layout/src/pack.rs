// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row packing.

use alloc::vec::Vec;

use log::debug;

use crate::types::{ColumnCount, LayoutError, LayoutItem};

/// A placed item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    /// The item placed in this cell.
    pub item: &'a LayoutItem,
    /// Clamped span in columns.
    pub span: u8,
    /// Width in units of the 24-unit grid.
    pub grid_span: u8,
}

impl<'a> Cell<'a> {
    fn place(item: &'a LayoutItem, columns: ColumnCount) -> Self {
        let span = item.clamped_span(columns);
        if span != item.span {
            debug!(
                "item `{}` span {} clamped to {span} for {} columns",
                item.key,
                item.span,
                columns.get()
            );
        }
        Self {
            item,
            span,
            grid_span: columns.unit() * span,
        }
    }

    /// Sub-items of a grouped cell, empty for plain items.
    ///
    /// Groups occupy one cell of the parent row; their sub-items never count against
    /// the parent's row budget. Use [`pack_group`] to lay them out.
    pub fn group(&self) -> &'a [LayoutItem] {
        &self.item.sub_items
    }
}

/// One row of packing output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row<'a> {
    /// Visible items packed left to right. Leftover width stays empty.
    Items(Vec<Cell<'a>>),
    /// Section separator, captioned when the section carries a title.
    Separator {
        /// Caption text.
        title: Option<&'a str>,
    },
    /// Hidden items in input order, kept mounted but not grid-packed.
    Hidden(Vec<&'a LayoutItem>),
}

impl<'a> Row<'a> {
    /// Sum of clamped spans for an items row, zero otherwise.
    pub fn total_span(&self) -> u8 {
        match self {
            Self::Items(cells) => cells.iter().map(|c| c.span).sum(),
            Self::Separator { .. } | Self::Hidden(_) => 0,
        }
    }

    /// Keys of the items in this row, in order. Separators have none.
    pub fn keys(&self) -> Vec<&'a str> {
        match self {
            Self::Items(cells) => cells.iter().map(|c| c.item.key.as_str()).collect(),
            Self::Hidden(items) => items.iter().map(|i| i.key.as_str()).collect(),
            Self::Separator { .. } => Vec::new(),
        }
    }

    /// Whether this is a grid-packed row of visible items.
    pub fn is_packed(&self) -> bool {
        matches!(self, Self::Items(_))
    }
}

/// Pack `items` into rows of at most `columns` columns.
///
/// Visible items are placed in input order. A row closes when the next item would
/// push the running span strictly past `columns`, or when the next item starts a
/// section; a section start also emits a [`Row::Separator`]. Empty rows are never
/// emitted. Hidden items follow in a single trailing [`Row::Hidden`].
///
/// ```rust
/// use trellis_layout::{ColumnCount, LayoutItem, pack};
///
/// let items = [
///     LayoutItem::new("name", 1),
///     LayoutItem::new("email", 1),
///     LayoutItem::new("address", 2),
///     LayoutItem::new("phone", 1),
/// ];
/// let rows = pack(&items, ColumnCount::THREE);
/// let keys: Vec<_> = rows.iter().map(|r| r.keys()).collect();
/// assert_eq!(keys, [vec!["name", "email"], vec!["address", "phone"]]);
/// ```
pub fn pack(items: &[LayoutItem], columns: ColumnCount) -> Vec<Row<'_>> {
    let (visible, hidden): (Vec<&LayoutItem>, Vec<&LayoutItem>) =
        items.iter().partition(|i| i.is_visible());

    let cols = columns.get();
    let mut rows = Vec::new();
    let mut row: Vec<Cell<'_>> = Vec::new();
    let mut running: u8 = 0;

    for item in visible {
        let cell = Cell::place(item, columns);
        if let Some(section) = &item.section {
            if !row.is_empty() {
                rows.push(Row::Items(core::mem::take(&mut row)));
            }
            rows.push(Row::Separator {
                title: section.title.as_deref(),
            });
            running = 0;
        } else if running + cell.span > cols {
            rows.push(Row::Items(core::mem::take(&mut row)));
            running = 0;
        }
        running += cell.span;
        row.push(cell);
    }
    if !row.is_empty() {
        rows.push(Row::Items(row));
    }
    if !hidden.is_empty() {
        rows.push(Row::Hidden(hidden));
    }
    rows
}

/// Validate `columns` and pack; see [`pack`].
pub fn pack_layout(items: &[LayoutItem], columns: u8) -> Result<Vec<Row<'_>>, LayoutError> {
    Ok(pack(items, ColumnCount::new(columns)?))
}

/// Lay out a grouped cell's sub-items on their own, independent of the parent row.
pub fn pack_group<'a>(cell: &Cell<'a>, columns: ColumnCount) -> Vec<Row<'a>> {
    pack(cell.group(), columns)
}
