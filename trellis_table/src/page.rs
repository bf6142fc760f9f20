// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging and sort state exchanged between a table and its data loader.

use serde::{Deserialize, Serialize};

/// Rows per page when a loader does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Sort on one field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    /// Field to sort by.
    pub key: String,
    /// Descending when `true`.
    #[serde(default)]
    pub desc: bool,
}

impl SortOrder {
    /// Ascending sort on `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: false,
        }
    }

    /// Descending sort on `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: true,
        }
    }
}

/// The page a table shows, with the loader's row total and the active sorts.
///
/// `current` is 1-based. A zero `page_size` is treated as [`DEFAULT_PAGE_SIZE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page, starting at 1.
    pub current: u32,
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Total rows reported by the loader.
    #[serde(default)]
    pub total: u64,
    /// Sorts in priority order.
    #[serde(default)]
    pub sorts: Vec<SortOrder>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
            sorts: Vec::new(),
        }
    }
}

impl PageInfo {
    fn effective_page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Number of pages needed for `total` rows; zero rows means zero pages.
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.effective_page_size()))
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.current.saturating_sub(1)) * u64::from(self.effective_page_size())
    }

    /// Move to `page`, keeping size, total, and sorts.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.current = page.max(1);
        self
    }

    /// Change the page size and go back to the first page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self.current = 1;
        self
    }
}
