// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline row editing: one row at a time, saved as a merged record.
//!
//! ## Usage
//!
//! 1) Keep a [`RowEditor`] next to the table's rows.
//! 2) [`RowEditor::begin`] when the user clicks a row's edit action; render
//!    editors for rows where [`RowEditor::is_editing`] holds.
//! 3) [`RowEditor::save`] with the edited fields yields a [`SavedRow`] for the
//!    host to persist. [`RowEditor::cancel`] drops the edit.
//! 4) [`RowEditor::delete`] locates a row for a delete action; the host confirms
//!    and removes it.
//!
//! ```
//! use trellis_record::Record;
//! use trellis_table::edit::RowEditor;
//!
//! let rows = vec![
//!     Record::new().with("id", "a").with("name", "Ada"),
//!     Record::new().with("id", "b").with("name", "Bob").with("team", "ops"),
//! ];
//! let mut editor = RowEditor::new();
//! assert!(editor.begin(&rows[1], "id"));
//! assert!(editor.is_editing(&rows[1], "id"));
//!
//! let saved = editor.save(&rows, "id", &Record::new().with("name", "Robert")).unwrap();
//! assert_eq!((saved.key.as_str(), saved.index), ("b", 1));
//! assert_eq!(saved.record.key_of("name").as_deref(), Some("Robert"));
//! assert_eq!(saved.record.key_of("team").as_deref(), Some("ops"));
//! assert!(editor.editing_key().is_none());
//! ```

use log::{debug, trace};
use trellis_record::{Entity, Record};

use crate::selection::row_key;

/// Result of saving an inline edit.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedRow {
    /// The original row with the edited fields written over it.
    pub record: Record,
    /// Key of the saved row.
    pub key: String,
    /// Position of the row in the table's data.
    pub index: usize,
}

/// A row located for deletion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowRef<'a, E> {
    /// The row.
    pub row: &'a E,
    /// Position of the row in the table's data.
    pub index: usize,
}

/// Which row, if any, is being edited inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowEditor {
    editing: Option<String>,
}

impl RowEditor {
    /// No row in edit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the row in edit.
    pub fn editing_key(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Whether `row` is the row in edit.
    pub fn is_editing<E: Entity>(&self, row: &E, key_field: &str) -> bool {
        self.editing.is_some() && row_key(row, key_field) == self.editing
    }

    /// Start editing `row`, replacing any edit in progress.
    ///
    /// Returns `false` and leaves the state alone when the row has no key.
    pub fn begin<E: Entity>(&mut self, row: &E, key_field: &str) -> bool {
        let Some(key) = row_key(row, key_field) else {
            debug!("cannot edit a row without `{key_field}`");
            return false;
        };
        trace!("editing row `{key}`");
        self.editing = Some(key);
        true
    }

    /// Drop the edit in progress.
    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Finish the edit in progress with the fields in `edited`.
    ///
    /// Every field present in `edited` overwrites the row's field of the same name;
    /// other fields keep the row's values. The edit ends either way. Returns `None`
    /// when no row is in edit or the row in edit is no longer in `rows`.
    pub fn save(
        &mut self,
        rows: &[Record],
        key_field: &str,
        edited: &Record,
    ) -> Option<SavedRow> {
        let key = self.editing.take()?;
        let Some(index) = position(rows, key_field, &key) else {
            debug!("row `{key}` left the table before its edit was saved");
            return None;
        };
        let mut record = rows[index].clone();
        for (field, value) in edited {
            record.insert(field.clone(), value.clone());
        }
        Some(SavedRow { record, key, index })
    }

    /// Locate the row keyed `key` for deletion, ending any edit in progress.
    ///
    /// Returns `None` when no row has that key.
    pub fn delete<'a, E: Entity>(
        &mut self,
        rows: &'a [E],
        key_field: &str,
        key: &str,
    ) -> Option<RowRef<'a, E>> {
        self.editing = None;
        let index = position(rows, key_field, key)?;
        Some(RowRef {
            row: &rows[index],
            index,
        })
    }
}

fn position<E: Entity>(rows: &[E], key_field: &str, key: &str) -> Option<usize> {
    rows.iter().position(|r| row_key(r, key_field).as_deref() == Some(key))
}
