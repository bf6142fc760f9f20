// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Record: the entity model shared by the Trellis crates.
//!
//! Data-driven admin screens pass around loosely shaped rows: a handful of
//! scalar fields, sometimes a nested record or a list of them. This crate gives
//! those rows a narrow, explicit type instead of a dynamic lookup.
//!
//! - [`Value`]: string, number, boolean, timestamp, nested record, record list, or absent.
//! - [`Record`]: an ordered map from field name to [`Value`].
//! - [`Entity`]: read access by field name, implemented by [`Record`] and by any
//!   typed row an application wants to feed to the tree or table crates.
//!
//! Identifier and parent-reference fields are read with [`Entity::key_of`], which
//! coerces scalars to strings via [`Value::to_key`].
//!
//! # Example
//!
//! ```rust
//! use trellis_record::{Entity, Record, Value};
//!
//! let dept = Record::new()
//!     .with("id", 10)
//!     .with("parent", "")
//!     .with("name", "Engineering");
//!
//! assert_eq!(dept.key_of("id").as_deref(), Some("10"));
//! // An empty parent reference is not a key: this record is top-level.
//! assert_eq!(dept.key_of("parent"), None);
//! assert_eq!(dept.get("name").and_then(Value::as_str), Some("Engineering"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod record;
pub mod value;

pub use record::{Entity, Record};
pub use value::{Timestamp, Value};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn json_shape_is_plain() {
        let r = Record::new()
            .with("id", "a")
            .with("rank", 2)
            .with("active", true)
            .with("tags", vec![Record::new().with("id", "t")]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"active":true,"id":"a","rank":2.0,"tags":[{"id":"t"}]}"#
        );
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn json_null_reads_as_absent() {
        let r: Record = serde_json::from_str(r#"{"id":"a","parent":null}"#).unwrap();
        assert_eq!(r.get("parent"), None);
        assert_eq!(r.len(), 2);
        assert_eq!(r.key_of("id"), Some("a".to_string()));
    }
}
