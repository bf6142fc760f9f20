// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for layout packing: column counts, item flags, and field descriptors.

use alloc::string::String;
use alloc::vec::Vec;

/// Width of the underlying grid in units. Every supported column count divides it.
pub const GRID_UNITS: u8 = 24;

/// Errors reported at the layout API boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The requested column count is outside `1..=4`.
    #[error("column count must be between 1 and 4, got {0}")]
    InvalidColumnCount(u8),
}

/// Number of grid columns a layout packs into: 1 to 4.
///
/// Construct with [`ColumnCount::new`] or `TryFrom<u8>`; both reject anything else
/// with [`LayoutError::InvalidColumnCount`]. Per-item spans are clamped, the column
/// count itself never is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ColumnCount(u8);

impl ColumnCount {
    /// One column.
    pub const ONE: Self = Self(1);
    /// Two columns.
    pub const TWO: Self = Self(2);
    /// Three columns.
    pub const THREE: Self = Self(3);
    /// Four columns.
    pub const FOUR: Self = Self(4);

    /// Validate a column count.
    pub const fn new(n: u8) -> Result<Self, LayoutError> {
        match n {
            1..=4 => Ok(Self(n)),
            _ => Err(LayoutError::InvalidColumnCount(n)),
        }
    }

    /// The column count as a number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Grid units covered by one column.
    pub const fn unit(self) -> u8 {
        GRID_UNITS / self.0
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = LayoutError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<ColumnCount> for u8 {
    fn from(c: ColumnCount) -> Self {
        c.0
    }
}

bitflags::bitflags! {
    /// Item flags controlling participation in packing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ItemFlags: u8 {
        /// Item is visible and packed into rows. Invisible items go to the trailing hidden row.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Marks an item as the first of a new section.
///
/// Packing closes the current row before the item and emits a separator row,
/// captioned with `title` when present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionStart {
    /// Optional separator caption.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
}

/// A form or table field descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutItem {
    /// Unique key (the bound field name for form items).
    pub key: String,
    /// Optional display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// Declared width in columns, nominally 1 to 4.
    pub span: u8,
    /// Visibility flags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ItemFlags,
    /// Section marker; see [`SectionStart`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub section: Option<SectionStart>,
    /// Grouped sub-items, rendered together inside this item's single cell.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_items: Vec<LayoutItem>,
}

impl LayoutItem {
    /// A visible item spanning `span` columns.
    pub fn new(key: impl Into<String>, span: u8) -> Self {
        Self {
            key: key.into(),
            label: None,
            span,
            flags: ItemFlags::default(),
            section: None,
            sub_items: Vec::new(),
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the item hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.flags.remove(ItemFlags::VISIBLE);
        self
    }

    /// Start a new section at this item.
    #[must_use]
    pub fn section_start(mut self, title: Option<&str>) -> Self {
        self.section = Some(SectionStart {
            title: title.map(String::from),
        });
        self
    }

    /// Group `items` inside this item's cell.
    #[must_use]
    pub fn with_sub_items(mut self, items: Vec<Self>) -> Self {
        self.sub_items = items;
        self
    }

    /// Whether the item is packed into rows.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ItemFlags::VISIBLE)
    }

    /// Whether the item is a group of sub-items.
    pub fn is_group(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// Declared span limited to `1..=columns`. A zero span counts as one column.
    pub fn clamped_span(&self, columns: ColumnCount) -> u8 {
        self.span.clamp(1, columns.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_rejects_out_of_range() {
        assert_eq!(ColumnCount::new(0), Err(LayoutError::InvalidColumnCount(0)));
        assert_eq!(ColumnCount::try_from(5), Err(LayoutError::InvalidColumnCount(5)));
        assert_eq!(ColumnCount::new(3).map(ColumnCount::get), Ok(3));
        assert_eq!(ColumnCount::FOUR.unit(), 6);
        assert_eq!(ColumnCount::ONE.unit(), 24);
    }

    #[test]
    fn spans_are_clamped_into_range() {
        let wide = LayoutItem::new("notes", 4);
        assert_eq!(wide.clamped_span(ColumnCount::TWO), 2);
        assert_eq!(wide.clamped_span(ColumnCount::FOUR), 4);
        assert_eq!(LayoutItem::new("zero", 0).clamped_span(ColumnCount::THREE), 1);
        assert_eq!(LayoutItem::new("huge", 200).clamped_span(ColumnCount::THREE), 3);
    }

    #[test]
    fn builder_sets_flags_and_sections() {
        let item = LayoutItem::new("secret", 1).hidden().section_start(Some("Audit"));
        assert!(!item.is_visible());
        assert_eq!(
            item.section.as_ref().and_then(|s| s.title.as_deref()),
            Some("Audit")
        );
        assert!(LayoutItem::new("x", 1).is_visible());
        assert!(!LayoutItem::new("x", 1).is_group());
    }
}
