// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree composition: flat parent-referenced records to an ordered forest.
//!
//! ## Algorithm
//!
//! 1. Index every record by its identifier key (labels are computed here, once per record).
//! 2. Link each record under its parent; records without a parent, or whose parent key
//!    matches no record, become roots.
//! 3. Verify every record is reachable from a root (otherwise a parent cycle exists).
//! 4. Materialize nodes bottom-up, sort siblings if a comparator is set, and wrap the
//!    roots in the virtual root if one is configured.
//!
//! Children keep input order unless a comparator is supplied. The comparator is
//! applied at every level, roots included, with a stable sort.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use log::{debug, trace};
use trellis_record::Entity;

use crate::types::{TreeNode, VirtualRoot};

/// Errors reported by [`TreeComposer::compose`] and [`compose_tree`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The record's identifier field is missing, empty, or not a scalar.
    #[error("record at index {index} has no usable identifier")]
    MissingKey {
        /// Input index of the record.
        index: usize,
    },
    /// Two records share an identifier.
    #[error("identifier `{key}` is used by records at index {first} and {second}")]
    DuplicateKey {
        /// The shared key.
        key: String,
        /// Input index of the first record with this key.
        first: usize,
        /// Input index of the second record with this key.
        second: usize,
    },
    /// A record cannot be reached from any root because its parent chain loops.
    #[error("record `{key}` is unreachable from any root: its parent chain forms a cycle")]
    Cycle {
        /// Key of the first unreachable record in input order.
        key: String,
    },
}

type LabelFn<'a, E> = Box<dyn Fn(&E) -> String + 'a>;
type CompareFn<'a, E> = Box<dyn Fn(&TreeNode<'a, E>, &TreeNode<'a, E>) -> Ordering + 'a>;

/// Builder-style tree composer.
///
/// ## Usage
///
/// - [`TreeComposer::new`] with the identifier and parent-reference field names.
/// - Optionally [`label`](Self::label), [`comparator`](Self::comparator), and
///   [`virtual_root`](Self::virtual_root).
/// - Call [`compose`](Self::compose) as often as the records change; the composer
///   keeps no state between calls.
///
/// ```
/// use trellis_record::Record;
/// use trellis_tree::TreeComposer;
///
/// let records = vec![
///     Record::new().with("id", "a").with("parent", ""),
///     Record::new().with("id", "b").with("parent", "a"),
/// ];
/// let forest = TreeComposer::new("id", "parent")
///     .virtual_root("R", "Root")
///     .compose(&records)
///     .unwrap();
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].key, "R");
/// assert_eq!(forest[0].children[0].children[0].key, "b");
/// ```
pub struct TreeComposer<'a, E: 'a> {
    id_field: String,
    parent_field: String,
    label: Option<LabelFn<'a, E>>,
    comparator: Option<CompareFn<'a, E>>,
    virtual_root: Option<VirtualRoot>,
}

impl<E> fmt::Debug for TreeComposer<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeComposer")
            .field("id_field", &self.id_field)
            .field("parent_field", &self.parent_field)
            .field("has_label", &self.label.is_some())
            .field("has_comparator", &self.comparator.is_some())
            .field("virtual_root", &self.virtual_root)
            .finish()
    }
}

impl<'a, E: Entity + 'a> TreeComposer<'a, E> {
    /// Create a composer reading keys from `id_field` and parents from `parent_field`.
    pub fn new(id_field: impl Into<String>, parent_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
            parent_field: parent_field.into(),
            label: None,
            comparator: None,
            virtual_root: None,
        }
    }

    /// Set the label function. Without one, a node's label is its key.
    #[must_use]
    pub fn label(mut self, f: impl Fn(&E) -> String + 'a) -> Self {
        self.label = Some(Box::new(f));
        self
    }

    /// Sort siblings at every level with `f` (stable).
    #[must_use]
    pub fn comparator(
        mut self,
        f: impl Fn(&TreeNode<'a, E>, &TreeNode<'a, E>) -> Ordering + 'a,
    ) -> Self {
        self.comparator = Some(Box::new(f));
        self
    }

    /// Wrap all roots in a synthetic node.
    #[must_use]
    pub fn virtual_root(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.virtual_root = Some(VirtualRoot::new(key, label));
        self
    }

    /// Compose `records` into a forest.
    ///
    /// Returns a single-element list holding the virtual root when one is configured.
    pub fn compose(&self, records: &'a [E]) -> Result<Vec<TreeNode<'a, E>>, ComposeError> {
        compose_with(
            records,
            &self.id_field,
            &self.parent_field,
            self.label.as_deref(),
            self.comparator.as_deref(),
            self.virtual_root.as_ref(),
        )
    }
}

/// Compose `records` into a forest in one call.
///
/// Free-function form of [`TreeComposer`]: `label` renders each record,
/// `comparator` (if any) orders siblings at every level, and `virtual_root`
/// (if any) wraps the roots.
pub fn compose_tree<'a, E: Entity>(
    records: &'a [E],
    id_field: &str,
    parent_field: &str,
    label: impl Fn(&E) -> String,
    comparator: Option<&dyn Fn(&TreeNode<'a, E>, &TreeNode<'a, E>) -> Ordering>,
    virtual_root: Option<VirtualRoot>,
) -> Result<Vec<TreeNode<'a, E>>, ComposeError> {
    let label: &dyn Fn(&E) -> String = &label;
    compose_with(
        records,
        id_field,
        parent_field,
        Some(label),
        comparator,
        virtual_root.as_ref(),
    )
}

/// Stable-sort `nodes` and, recursively, every node's children with `cmp`.
pub fn sort_tree<'a, E, F>(nodes: &mut [TreeNode<'a, E>], cmp: &F)
where
    F: Fn(&TreeNode<'a, E>, &TreeNode<'a, E>) -> Ordering + ?Sized,
{
    for node in nodes.iter_mut() {
        sort_tree(&mut node.children, cmp);
    }
    nodes.sort_by(|a, b| cmp(a, b));
}

struct Slot<'a, E> {
    key: String,
    parent_key: Option<String>,
    label: String,
    entity: &'a E,
    children: Vec<usize>,
}

fn compose_with<'a, E: Entity>(
    records: &'a [E],
    id_field: &str,
    parent_field: &str,
    label: Option<&dyn Fn(&E) -> String>,
    comparator: Option<&dyn Fn(&TreeNode<'a, E>, &TreeNode<'a, E>) -> Ordering>,
    virtual_root: Option<&VirtualRoot>,
) -> Result<Vec<TreeNode<'a, E>>, ComposeError> {
    // Index by key.
    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    let mut slots: Vec<Slot<'a, E>> = Vec::with_capacity(records.len());
    for (i, entity) in records.iter().enumerate() {
        let key = entity
            .key_of(id_field)
            .ok_or(ComposeError::MissingKey { index: i })?;
        if let Some(&first) = index.get(&key) {
            return Err(ComposeError::DuplicateKey {
                key,
                first,
                second: i,
            });
        }
        index.insert(key.clone(), i);
        let label = match label {
            Some(f) => f(entity),
            None => key.clone(),
        };
        slots.push(Slot {
            key,
            parent_key: entity.key_of(parent_field),
            label,
            entity,
            children: Vec::new(),
        });
    }

    // Link children to parents.
    let mut roots: Vec<usize> = Vec::new();
    for i in 0..slots.len() {
        let parent = match slots[i].parent_key.as_deref() {
            None => None,
            Some(pk) => {
                let found = index.get(pk).copied();
                if found.is_none() {
                    debug!(
                        "record `{}` references unknown parent `{pk}`; placing it as a root",
                        slots[i].key
                    );
                }
                found
            }
        };
        match parent {
            Some(p) => slots[p].children.push(i),
            None => roots.push(i),
        }
    }

    // Pre-order from the roots. Every record has one parent link, so anything
    // left unreached sits on or below a parent cycle.
    let mut reached = vec![false; slots.len()];
    let mut order: Vec<usize> = Vec::with_capacity(slots.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(i) = stack.pop() {
        reached[i] = true;
        order.push(i);
        stack.extend(slots[i].children.iter().rev().copied());
    }
    if let Some(i) = reached.iter().position(|r| !r) {
        return Err(ComposeError::Cycle {
            key: slots[i].key.clone(),
        });
    }

    // Materialize bottom-up: reverse pre-order visits children before parents.
    let mut slots: Vec<Option<Slot<'a, E>>> = slots.into_iter().map(Some).collect();
    let mut built: Vec<Option<TreeNode<'a, E>>> = (0..slots.len()).map(|_| None).collect();
    for &i in order.iter().rev() {
        let Some(slot) = slots[i].take() else {
            continue;
        };
        let children = slot
            .children
            .iter()
            .filter_map(|&c| built[c].take())
            .collect();
        built[i] = Some(TreeNode {
            key: slot.key,
            parent_key: slot.parent_key,
            label: slot.label,
            entity: Some(slot.entity),
            children,
        });
    }
    let mut forest: Vec<TreeNode<'a, E>> =
        roots.iter().filter_map(|&r| built[r].take()).collect();

    if let Some(cmp) = comparator {
        sort_tree(&mut forest, cmp);
    }
    trace!(
        "composed {} records into {} roots",
        records.len(),
        forest.len()
    );

    Ok(match virtual_root {
        Some(root) => vec![TreeNode::virtual_root(root, forest)],
        None => forest,
    })
}
