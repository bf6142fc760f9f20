// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence of column settings through a host-provided key/value store.
//!
//! Tables never own storage. A host passes something implementing [`ConfigStore`]
//! (browser local storage, a settings file, a user-preferences service) and the
//! functions here read and write [`ColumnSettings`] as JSON under a table key.

use std::collections::BTreeMap;
use std::convert::Infallible;

use log::{trace, warn};

use crate::columns::ColumnSettings;

/// A string key/value store.
pub trait ConfigStore {
    /// Backend error.
    type Error: core::error::Error + 'static;

    /// Value stored under `key`, or `None` when there is none.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Errors from loading or saving column settings.
#[derive(Debug, thiserror::Error)]
pub enum StoreError<E: core::error::Error + 'static> {
    /// The backend failed.
    #[error("config store failed")]
    Backend(#[source] E),
    /// The stored value is not valid column settings JSON.
    #[error("stored column settings under `{key}` are malformed")]
    Malformed {
        /// Table key.
        key: String,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The settings could not be encoded.
    #[error("column settings could not be encoded")]
    Encode(#[source] serde_json::Error),
}

/// In-memory store, for tests and hosts without persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load the column settings stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored.
pub fn load_columns<S: ConfigStore>(
    store: &S,
    key: &str,
) -> Result<Option<ColumnSettings>, StoreError<S::Error>> {
    let Some(raw) = store.read(key).map_err(StoreError::Backend)? else {
        trace!("no stored column settings under `{key}`");
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Malformed {
            key: key.to_owned(),
            source,
        })
}

/// Store `settings` under `key` as JSON.
pub fn save_columns<S: ConfigStore>(
    store: &mut S,
    key: &str,
    settings: &ColumnSettings,
) -> Result<(), StoreError<S::Error>> {
    let raw = serde_json::to_string(settings).map_err(StoreError::Encode)?;
    store.write(key, &raw).map_err(StoreError::Backend)?;
    trace!("saved {} column settings under `{key}`", settings.columns().len());
    Ok(())
}

/// Stored settings merged with `defaults`, or `defaults` when nothing usable is stored.
///
/// Read failures and malformed values are logged and fall back to `defaults`, so a
/// broken preference never keeps a table from rendering.
pub fn load_columns_or_default<S: ConfigStore>(
    store: &S,
    key: &str,
    defaults: &ColumnSettings,
) -> ColumnSettings {
    match load_columns(store, key) {
        Ok(Some(stored)) => stored.merged_with(defaults),
        Ok(None) => defaults.clone(),
        Err(err) => {
            warn!("using default columns for `{key}`: {err}");
            defaults.clone()
        }
    }
}
