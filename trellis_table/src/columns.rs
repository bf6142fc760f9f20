// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-table column configuration: visibility, width, and order.
//!
//! A column settings dialog edits a [`ColumnSettings`] value: toggling columns,
//! dragging a width slider, and reordering columns by drag and drop. Edits to an
//! unknown column id are ignored and reported as `false`.

use log::debug;
use serde::{Deserialize, Serialize};

/// Narrowest width a column can be set to, in pixels.
pub const MIN_COLUMN_WIDTH: u16 = 20;
/// Widest width a column can be set to, in pixels.
pub const MAX_COLUMN_WIDTH: u16 = 300;

/// Display settings for one table column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column id, usually the bound field name.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Whether the column is shown.
    pub visible: bool,
    /// Width in pixels.
    pub width: u16,
    /// Display position, renumbered from zero after reordering.
    pub order: u32,
}

impl ColumnConfig {
    /// A visible column of the given width, clamped into the allowed range.
    pub fn new(id: impl Into<String>, label: impl Into<String>, width: u16) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visible: true,
            width: width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH),
            order: 0,
        }
    }
}

/// Ordered column settings for one table.
///
/// Column ids are unique, widths lie within
/// [`MIN_COLUMN_WIDTH`]`..=`[`MAX_COLUMN_WIDTH`], and `order` matches each
/// column's position. Deserialized settings are normalized the same way as
/// [`ColumnSettings::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ColumnConfig>", into = "Vec<ColumnConfig>")]
pub struct ColumnSettings {
    columns: Vec<ColumnConfig>,
}

impl ColumnSettings {
    /// Settings in the given order.
    ///
    /// Later columns repeating an earlier id are dropped, widths are clamped, and
    /// `order` is renumbered to match.
    pub fn new(columns: Vec<ColumnConfig>) -> Self {
        let mut unique: Vec<ColumnConfig> = Vec::with_capacity(columns.len());
        for mut column in columns {
            if unique.iter().any(|c| c.id == column.id) {
                debug!("dropping repeated column `{}`", column.id);
                continue;
            }
            column.width = column.width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
            unique.push(column);
        }
        let mut settings = Self { columns: unique };
        settings.renumber();
        settings
    }

    /// All columns in display order.
    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    /// Visible columns in display order.
    pub fn visible(&self) -> impl Iterator<Item = &ColumnConfig> + '_ {
        self.columns.iter().filter(|c| c.visible)
    }

    /// The column with `id`.
    pub fn get(&self, id: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ColumnConfig> {
        let found = self.columns.iter_mut().find(|c| c.id == id);
        if found.is_none() {
            debug!("no column `{id}` in table settings");
        }
        found
    }

    /// Show or hide a column. Returns `false` for an unknown id.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        let Some(column) = self.get_mut(id) else {
            return false;
        };
        column.visible = visible;
        true
    }

    /// Set a column's width, clamped to
    /// [`MIN_COLUMN_WIDTH`]`..=`[`MAX_COLUMN_WIDTH`]. Returns `false` for an unknown id.
    pub fn set_width(&mut self, id: &str, width: u16) -> bool {
        let Some(column) = self.get_mut(id) else {
            return false;
        };
        column.width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        true
    }

    /// Move the column `active` to the position held by `over`, shifting the
    /// columns in between, as at the end of a drag.
    ///
    /// Returns `false` and changes nothing when either id is unknown. Moving a
    /// column onto itself succeeds without change.
    pub fn move_column(&mut self, active: &str, over: &str) -> bool {
        let from = self.columns.iter().position(|c| c.id == active);
        let to = self.columns.iter().position(|c| c.id == over);
        let (Some(from), Some(to)) = (from, to) else {
            debug!("cannot move column `{active}` over `{over}`: unknown id");
            return false;
        };
        if from != to {
            let column = self.columns.remove(from);
            self.columns.insert(to, column);
            self.renumber();
        }
        true
    }

    /// Rewrite every column's `order` to its position.
    pub fn renumber(&mut self) {
        for (order, column) in (0_u32..).zip(self.columns.iter_mut()) {
            column.order = order;
        }
    }

    /// Align stored settings with the table's current column definitions.
    ///
    /// Stored columns that no longer exist are dropped, stored order and user edits
    /// are kept, and columns added since the settings were saved are appended with
    /// their default settings. Labels always come from `defaults`.
    #[must_use]
    pub fn merged_with(&self, defaults: &Self) -> Self {
        let mut columns: Vec<ColumnConfig> = Vec::with_capacity(defaults.columns.len());
        for stored in &self.columns {
            let Some(current) = defaults.get(&stored.id) else {
                continue;
            };
            if columns.iter().any(|c| c.id == stored.id) {
                continue;
            }
            columns.push(ColumnConfig {
                label: current.label.clone(),
                ..stored.clone()
            });
        }
        for column in &defaults.columns {
            if !columns.iter().any(|c| c.id == column.id) {
                columns.push(column.clone());
            }
        }
        Self::new(columns)
    }
}

impl From<Vec<ColumnConfig>> for ColumnSettings {
    fn from(columns: Vec<ColumnConfig>) -> Self {
        Self::new(columns)
    }
}

impl From<ColumnSettings> for Vec<ColumnConfig> {
    fn from(settings: ColumnSettings) -> Self {
        settings.columns
    }
}

impl FromIterator<ColumnConfig> for ColumnSettings {
    fn from_iter<I: IntoIterator<Item = ColumnConfig>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
