// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row selection state: toggle, widget changes, and reconciliation after refresh.
//!
//! ## Usage
//!
//! 1) Create a [`Selection`] in single or multi mode.
//! 2) Feed it row clicks with [`Selection::toggle`] and checkbox/radio changes with
//!    [`Selection::apply_widget_change`].
//! 3) When the table's data is replaced, call [`Selection::reconcile`] with the new
//!    row keys (or [`Selection::clear`] if the table drops selection on refresh).
//! 4) Resolve the selected keys to rows with [`Selection::selected_rows`].
//!
//! ```
//! use trellis_record::Record;
//! use trellis_table::selection::{Selection, SelectionMode};
//!
//! let rows = vec![
//!     Record::new().with("id", "a"),
//!     Record::new().with("id", "b"),
//! ];
//! let mut sel = Selection::new(SelectionMode::Multi);
//! sel.toggle("b");
//! sel.toggle("a");
//! assert_eq!(sel.keys(), ["b", "a"]);
//! // Rows come back in table order, not click order.
//! let picked: Vec<_> = sel.selected_rows(&rows, "id").iter().filter_map(|r| r.key_of("id")).collect();
//! assert_eq!(picked, ["a", "b"]);
//! ```

use log::trace;
use trellis_record::Entity;

/// Key of a row, read from `key_field` and coerced to a string.
///
/// Rows whose key is missing or not a scalar have no key and cannot be selected.
pub fn row_key<E: Entity>(entity: &E, key_field: &str) -> Option<String> {
    entity.key_of(key_field)
}

/// Whether a table lets the user pick one row or many.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one selected row; a new pick replaces the old one.
    #[default]
    Single,
    /// Any number of selected rows, kept in selection order.
    Multi,
}

/// Selected row keys, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    keys: Vec<String>,
}

impl Selection {
    /// An empty selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            keys: Vec::new(),
        }
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected keys in selection order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Whether `key` is selected.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Toggle `key`, as for a row click. Returns whether `key` is selected afterwards.
    ///
    /// A selected key is removed. Otherwise single mode replaces the selection and
    /// multi mode appends.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
            return false;
        }
        match self.mode {
            SelectionMode::Single => {
                self.keys.clear();
                self.keys.push(key.to_owned());
            }
            SelectionMode::Multi => self.keys.push(key.to_owned()),
        }
        true
    }

    /// Apply the key list reported by a checkbox or radio column.
    ///
    /// Multi mode takes `keys` as given. Single mode keeps only the first reported
    /// key that was not selected before, or nothing when every reported key was
    /// already selected.
    pub fn apply_widget_change<S: AsRef<str>>(&mut self, keys: &[S]) {
        self.keys = match self.mode {
            SelectionMode::Multi => keys.iter().map(|k| k.as_ref().to_owned()).collect(),
            SelectionMode::Single => keys
                .iter()
                .map(|k| k.as_ref())
                .find(|k| !self.contains(k))
                .map(String::from)
                .into_iter()
                .collect(),
        };
    }

    /// Keep only keys still present in `current`, preserving selection order.
    ///
    /// Returns whether anything was dropped.
    pub fn reconcile<S: AsRef<str>>(&mut self, current: &[S]) -> bool {
        let before = self.keys.len();
        self.keys
            .retain(|k| current.iter().any(|c| c.as_ref() == k.as_str()));
        let dropped = before - self.keys.len();
        if dropped > 0 {
            trace!("selection reconcile dropped {dropped} stale keys");
        }
        dropped > 0
    }

    /// Reconcile against the keys of `rows`; see [`Selection::reconcile`].
    pub fn reconcile_rows<E: Entity>(&mut self, rows: &[E], key_field: &str) -> bool {
        let current: Vec<String> = rows.iter().filter_map(|r| row_key(r, key_field)).collect();
        self.reconcile(&current)
    }

    /// Drop every selected key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Rows whose key is selected, in row order.
    pub fn selected_rows<'a, E: Entity>(&self, rows: &'a [E], key_field: &str) -> Vec<&'a E> {
        rows.iter()
            .filter(|r| row_key(*r, key_field).is_some_and(|k| self.contains(&k)))
            .collect()
    }
}
