// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Record`] container and the [`Entity`] access trait.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;

use crate::value::Value;

/// Read access to named fields of a data row.
///
/// The tree and table crates only need to look fields up by name, so they are
/// generic over this trait. [`Record`] implements it; typed application rows
/// can implement it directly instead of converting to records.
pub trait Entity {
    /// Returns the value of `name`, or `None` when the field is missing or absent.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Returns the field coerced to a key string (see [`Value::to_key`]).
    fn key_of(&self, name: &str) -> Option<String> {
        self.field(name).and_then(Value::to_key)
    }
}

impl<E: Entity + ?Sized> Entity for &E {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

/// A key-value entity instance: field name to [`Value`].
///
/// Fields iterate in name order. Records are plain values; nothing in this
/// workspace mutates a record it was handed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Look up a field. An explicitly absent value reads as `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_absent())
    }

    /// The field coerced to a key string.
    pub fn key_of(&self, field: &str) -> Option<String> {
        self.get(field).and_then(Value::to_key)
    }

    /// Whether the field holds a non-absent value.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Number of stored fields, absent ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no fields are stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

impl Entity for Record {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
