// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tree: compose flat, parent-referenced records into trees.
//!
//! Data loaders hand back flat lists: every department, category or menu entry
//! with an identifier and a reference to its parent. Tree views and tree
//! selectors need the hierarchy. This crate does the conversion.
//!
//! - Link records to their parents by key; records with no parent, or a parent
//!   key that matches no record, become roots.
//! - Optionally sort siblings at every level with a caller-supplied comparator.
//! - Optionally wrap all roots in a single synthetic [`VirtualRoot`].
//! - Reject malformed input with a typed [`ComposeError`]: missing identifiers,
//!   duplicate identifiers, and parent cycles.
//!
//! The [`expand`] module holds the state helpers a tree view needs around the
//! composed forest: search-driven expansion and single selection.
//!
//! ## Not a widget
//!
//! Nothing here renders, tracks focus, or caches. Every call builds a fresh forest
//! that borrows the input records; hosts re-run composition when data changes.
//!
//! ## API overview
//!
//! - [`TreeComposer`]: builder; [`compose_tree`]: the same as one function call.
//! - [`TreeNode`]: key, parent key, label, borrowed entity, ordered children.
//! - [`sort_tree`], [`walk_forest`], [`flatten_keys`].
//!
//! # Example
//!
//! ```rust
//! use trellis_record::Record;
//! use trellis_tree::{TreeComposer, flatten_keys};
//!
//! let records = vec![
//!     Record::new().with("id", "eng").with("name", "Engineering"),
//!     Record::new().with("id", "web").with("parent", "eng").with("name", "Web"),
//!     Record::new().with("id", "api").with("parent", "eng").with("name", "API"),
//!     Record::new().with("id", "ops").with("name", "Operations"),
//! ];
//!
//! let forest = TreeComposer::new("id", "parent")
//!     .label(|r: &Record| r.key_of("name").unwrap_or_default())
//!     .comparator(|a, b| a.label.cmp(&b.label))
//!     .compose(&records)
//!     .unwrap();
//!
//! assert_eq!(flatten_keys(&forest), ["eng", "api", "web", "ops"]);
//! assert_eq!(forest[0].label, "Engineering");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod compose;
pub mod expand;
pub mod types;

pub use compose::{ComposeError, TreeComposer, compose_tree, sort_tree};
pub use types::{TreeNode, VirtualRoot, Walk, flatten_keys, walk_forest};
