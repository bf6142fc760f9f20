// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for composed trees: nodes, the virtual root, and pre-order walks.

use alloc::string::String;
use alloc::vec::Vec;

/// A synthetic node injected above all natural roots.
///
/// Gives a multi-root forest a single entry point (for example "All departments").
/// Its key is not checked against record keys; pick one that cannot collide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualRoot {
    /// Key of the synthetic node.
    pub key: String,
    /// Display label of the synthetic node.
    pub label: String,
}

impl VirtualRoot {
    /// Create a virtual root.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A record wrapped with its position in a composed tree.
///
/// Built fresh by every [`compose`](crate::compose::TreeComposer::compose) call.
/// Nodes borrow the records they wrap; the records are never modified.
#[derive(Clone, Debug)]
pub struct TreeNode<'a, E> {
    /// Identifier-field value coerced to a string. Unique within one composition.
    pub key: String,
    /// Parent-reference value as found on the record (`None` for top-level records).
    ///
    /// A dangling reference is kept here even though the node was placed as a root.
    pub parent_key: Option<String>,
    /// Display label produced by the caller's label function.
    pub label: String,
    /// The wrapped record, or `None` for a [`VirtualRoot`].
    pub entity: Option<&'a E>,
    /// Ordered children (empty for leaves).
    pub children: Vec<TreeNode<'a, E>>,
}

impl<'a, E> TreeNode<'a, E> {
    pub(crate) fn virtual_root(root: &VirtualRoot, children: Vec<Self>) -> Self {
        Self {
            key: root.key.clone(),
            parent_key: None,
            label: root.label.clone(),
            entity: None,
            children,
        }
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for a synthetic [`VirtualRoot`] node.
    pub fn is_virtual(&self) -> bool {
        self.entity.is_none()
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn size(&self) -> usize {
        self.walk().count()
    }

    /// Pre-order walk of this subtree. Depth is 0 for `self`.
    pub fn walk(&self) -> Walk<'_, 'a, E> {
        Walk {
            stack: alloc::vec![(0, self)],
        }
    }

    /// Find a node by key in this subtree.
    pub fn find(&self, key: &str) -> Option<&Self> {
        self.walk().map(|(_, n)| n).find(|n| n.key == key)
    }

    /// Keys from this node down to the node with `key`, both ends included.
    pub fn path_to(&self, key: &str) -> Option<Vec<&str>> {
        if self.key == key {
            return Some(alloc::vec![self.key.as_str()]);
        }
        for child in &self.children {
            if let Some(mut tail) = child.path_to(key) {
                tail.insert(0, self.key.as_str());
                return Some(tail);
            }
        }
        None
    }
}

/// Pre-order iterator over `(depth, node)` pairs.
///
/// Returned by [`TreeNode::walk`] and [`walk_forest`].
#[derive(Debug)]
pub struct Walk<'n, 'a, E> {
    stack: Vec<(usize, &'n TreeNode<'a, E>)>,
}

impl<'n, 'a, E> Iterator for Walk<'n, 'a, E> {
    type Item = (usize, &'n TreeNode<'a, E>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

/// Pre-order walk across a forest, roots in order. Roots have depth 0.
pub fn walk_forest<'n, 'a, E>(nodes: &'n [TreeNode<'a, E>]) -> Walk<'n, 'a, E> {
    Walk {
        stack: nodes.iter().rev().map(|n| (0, n)).collect(),
    }
}

/// Keys of every node in a forest, in pre-order.
pub fn flatten_keys<'n, E>(nodes: &'n [TreeNode<'_, E>]) -> Vec<&'n str> {
    walk_forest(nodes).map(|(_, n)| n.key.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn leaf(key: &str) -> TreeNode<'static, ()> {
        TreeNode {
            key: key.into(),
            parent_key: None,
            label: key.into(),
            entity: Some(&()),
            children: Vec::new(),
        }
    }

    fn sample() -> TreeNode<'static, ()> {
        let mut b = leaf("b");
        b.children.push(leaf("c"));
        let mut a = leaf("a");
        a.children = vec![b, leaf("d")];
        a
    }

    #[test]
    fn walk_is_pre_order_with_depth() {
        let a = sample();
        let seen: Vec<(usize, &str)> = a.walk().map(|(d, n)| (d, n.key.as_str())).collect();
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c"), (1, "d")]);
        assert_eq!(a.size(), 4);
    }

    #[test]
    fn find_and_path() {
        let a = sample();
        assert_eq!(a.find("c").map(|n| n.label.as_str()), Some("c"));
        assert!(a.find("zz").is_none());
        assert_eq!(a.path_to("c"), Some(vec!["a", "b", "c"]));
        assert_eq!(a.path_to("a"), Some(vec!["a"]));
        assert_eq!(a.path_to("zz"), None);
    }

    #[test]
    fn forest_keys_in_order() {
        let forest = vec![sample(), leaf("e")];
        assert_eq!(flatten_keys(&forest), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn virtual_root_has_no_entity() {
        let root = TreeNode::virtual_root(&VirtualRoot::new("R", "Root"), vec![leaf("a")]);
        assert!(root.is_virtual());
        assert!(!root.is_leaf());
        assert!(!leaf("a").is_virtual());
    }
}
