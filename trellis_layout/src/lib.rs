// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Layout: pack form and table fields into grid rows.
//!
//! A form declares its fields as a flat list of [`LayoutItem`]s, each with a span
//! of 1 to 4 columns. This crate turns that list into rows for a 1 to 4 column
//! grid, ready for a renderer to place.
//!
//! - Items fill rows left to right in input order. A row closes when the next
//!   item would overflow it; leftover width is left empty, not redistributed.
//! - An item carrying a [`SectionStart`] closes the current row early and emits a
//!   separator row, optionally captioned.
//! - Hidden items are never packed. They are collected into one trailing row so
//!   hosts can keep them mounted for form state.
//! - Spans are clamped per item into `1..=columns`. The column count itself is
//!   validated by [`ColumnCount`] and rejected with [`LayoutError`] when out of range.
//!
//! Grouped items (with sub-items) occupy one cell. Their sub-items are packed
//! separately with [`pack_group`] and never count against the parent row.
//!
//! Each [`Cell`] reports both its clamped span and its width on a 24-unit grid.
//!
//! # Example
//!
//! ```rust
//! use trellis_layout::{LayoutItem, Row, pack_layout};
//!
//! let fields = vec![
//!     LayoutItem::new("first_name", 1).labeled("First name"),
//!     LayoutItem::new("last_name", 1).labeled("Last name"),
//!     LayoutItem::new("street", 2).section_start(Some("Address")),
//!     LayoutItem::new("internal_id", 1).hidden(),
//! ];
//!
//! let rows = pack_layout(&fields, 2).unwrap();
//! assert_eq!(rows.len(), 4);
//! assert_eq!(rows[0].keys(), ["first_name", "last_name"]);
//! assert_eq!(rows[1], Row::Separator { title: Some("Address") });
//! assert_eq!(rows[2].keys(), ["street"]);
//! assert!(matches!(rows[3], Row::Hidden(_)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod pack;
pub mod types;

pub use pack::{Cell, Row, pack, pack_group, pack_layout};
pub use types::{ColumnCount, GRID_UNITS, ItemFlags, LayoutError, LayoutItem, SectionStart};
