// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Table: the data logic behind admin tables.
//!
//! Rendering belongs to the host toolkit. What remains is state that is easy to get
//! subtly wrong and worth testing on its own:
//!
//! - [`selection`]: single and multi row selection as a controlled value, with
//!   reconciliation when the table's data is replaced.
//! - [`columns`]: per-table column visibility, width, and order, as edited by a
//!   column settings dialog.
//! - [`store`]: persisting column settings as JSON through a host-provided
//!   [`ConfigStore`].
//! - [`page`]: paging and sort state shared with data loaders.
//! - [`edit`]: inline editing of one row at a time, saved as a merged record.
//!
//! Rows are anything implementing [`trellis_record::Entity`]; row keys are read
//! from a named field and coerced to strings with [`row_key`].
//!
//! # Example
//!
//! ```rust
//! use trellis_table::{ColumnConfig, ColumnSettings, MemoryStore, load_columns_or_default, save_columns};
//!
//! let defaults: ColumnSettings = [
//!     ColumnConfig::new("name", "Name", 160),
//!     ColumnConfig::new("email", "Email", 220),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut store = MemoryStore::new();
//! let mut edited = defaults.clone();
//! edited.set_visible("email", false);
//! save_columns(&mut store, "users", &edited).unwrap();
//!
//! let shown = load_columns_or_default(&store, "users", &defaults);
//! assert_eq!(shown.visible().count(), 1);
//! ```

pub mod columns;
pub mod edit;
pub mod page;
pub mod selection;
pub mod store;

pub use columns::{ColumnConfig, ColumnSettings, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use edit::{RowEditor, RowRef, SavedRow};
pub use page::{DEFAULT_PAGE_SIZE, PageInfo, SortOrder};
pub use selection::{Selection, SelectionMode, row_key};
pub use store::{
    ConfigStore, MemoryStore, StoreError, load_columns, load_columns_or_default, save_columns,
};
