// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field values: scalars, timestamps, nested records, and the absent marker.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::record::Record;

/// Point in time as milliseconds since the Unix epoch.
///
/// The record model does not interpret calendars or zones; a timestamp is only
/// compared and coerced to a key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Create a timestamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    pub const fn millis(self) -> i64 {
        self.0
    }
}

/// A single field value of a [`Record`].
///
/// ## Keys
///
/// Identifier and parent-reference fields are read through [`Value::to_key`],
/// which coerces scalars to strings. Empty strings and [`Value::Absent`] are not
/// keys, so a parent field holding either marks a top-level record.
///
/// ## Serde
///
/// With the `serde` feature, values use an untagged JSON shape. Timestamps
/// serialize as numbers and therefore read back as [`Value::Number`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// No value (the field exists but is undefined).
    #[default]
    Absent,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// String scalar.
    Str(String),
    /// Point in time.
    Timestamp(Timestamp),
    /// Nested record.
    Record(Record),
    /// List of nested records.
    List(Vec<Record>),
}

impl Value {
    /// True for [`Value::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True for strings, numbers, booleans and timestamps.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Str(_) | Self::Number(_) | Self::Bool(_) | Self::Timestamp(_)
        )
    }

    /// Borrow the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The timestamp payload.
    pub const fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Borrow the nested record.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the nested record list.
    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Coerce a scalar to a key string.
    ///
    /// - Strings are returned as-is, except the empty string which is not a key.
    /// - Integral finite numbers print without a fraction (`7.0` → `"7"`).
    /// - Booleans print `true`/`false`; timestamps print their millisecond count.
    /// - Absent values, nested records and lists yield `None`.
    pub fn to_key(&self) -> Option<String> {
        match self {
            Self::Absent | Self::Record(_) | Self::List(_) => None,
            Self::Str(s) if s.is_empty() => None,
            Self::Str(s) => Some(s.clone()),
            Self::Number(n) => Some(number_key(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Timestamp(t) => Some(t.0.to_string()),
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The cast is only used after checking the value round-trips exactly."
)]
fn number_key(n: f64) -> String {
    if n.is_finite() && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        let i = n as i64;
        if i as f64 == n {
            return i.to_string();
        }
    }
    format!("{n}")
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(v.into())
    }
}

impl From<i64> for Value {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Record numbers are f64 like the JSON they come from."
    )]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

impl From<Vec<Record>> for Value {
    fn from(v: Vec<Record>) -> Self {
        Self::List(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}
