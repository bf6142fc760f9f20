// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for tree composition over random acyclic record sets.

use proptest::prelude::*;
use trellis_record::Record;
use trellis_tree::{TreeComposer, TreeNode, VirtualRoot, compose_tree, flatten_keys, walk_forest};

#[derive(Clone, Debug)]
enum Parent {
    None,
    Earlier(usize),
    Dangling,
}

fn parent_strategy() -> impl Strategy<Value = Parent> {
    prop_oneof![
        2 => Just(Parent::None),
        6 => any::<usize>().prop_map(Parent::Earlier),
        1 => Just(Parent::Dangling),
    ]
}

/// Records whose parents always point at an earlier index, so the set is acyclic,
/// delivered in shuffled order.
fn acyclic_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(parent_strategy(), 0..48)
        .prop_map(|parents| {
            parents
                .into_iter()
                .enumerate()
                .map(|(i, p)| {
                    let parent = match p {
                        Parent::None => String::new(),
                        Parent::Earlier(_) if i == 0 => String::new(),
                        Parent::Earlier(n) => format!("k{}", n % i),
                        Parent::Dangling => format!("missing{i}"),
                    };
                    Record::new()
                        .with("id", format!("k{i}"))
                        .with("parent", parent)
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn sorted_keys(records: &[Record]) -> Vec<String> {
    let mut keys: Vec<String> = records.iter().filter_map(|r| r.key_of("id")).collect();
    keys.sort();
    keys
}

fn check_parent_links(nodes: &[TreeNode<'_, Record>], parent: Option<&str>) -> bool {
    nodes.iter().all(|n| {
        let linked = match parent {
            Some(p) => n.parent_key.as_deref() == Some(p),
            None => true,
        };
        linked && check_parent_links(&n.children, Some(&n.key))
    })
}

fn siblings_sorted(nodes: &[TreeNode<'_, Record>]) -> bool {
    nodes.windows(2).all(|w| w[0].key <= w[1].key) && nodes.iter().all(|n| siblings_sorted(&n.children))
}

proptest! {
    #[test]
    fn flatten_yields_every_input_key(records in acyclic_records()) {
        let forest = compose_tree(&records, "id", "parent", |r: &Record| r.key_of("id").unwrap_or_default(), None, None).unwrap();
        let mut flat: Vec<String> = flatten_keys(&forest).into_iter().map(String::from).collect();
        flat.sort();
        prop_assert_eq!(flat, sorted_keys(&records));
    }

    #[test]
    fn children_sit_under_their_declared_parent(records in acyclic_records()) {
        let forest = TreeComposer::new("id", "parent").compose(&records).unwrap();
        prop_assert!(check_parent_links(&forest, None));
        // Roots are exactly the records whose parent is empty or unknown.
        let keys = sorted_keys(&records);
        for root in &forest {
            let dangling_or_none = root
                .parent_key
                .as_ref()
                .is_none_or(|p| keys.binary_search(p).is_err());
            prop_assert!(dangling_or_none, "root {} has a resolvable parent", root.key);
        }
    }

    #[test]
    fn virtual_root_wraps_everything(records in acyclic_records()) {
        let forest = compose_tree(
            &records,
            "id",
            "parent",
            |r: &Record| r.key_of("id").unwrap_or_default(),
            None,
            Some(VirtualRoot::new("__root__", "All")),
        )
        .unwrap();
        prop_assert_eq!(forest.len(), 1);
        prop_assert!(forest[0].is_virtual());
        prop_assert_eq!(forest[0].size(), records.len() + 1);
        prop_assert!(walk_forest(&forest).skip(1).all(|(depth, n)| depth >= 1 && !n.is_virtual()));
    }

    #[test]
    fn comparator_orders_every_level(records in acyclic_records()) {
        let forest = TreeComposer::new("id", "parent")
            .comparator(|a, b| a.key.cmp(&b.key))
            .compose(&records)
            .unwrap();
        prop_assert!(siblings_sorted(&forest));
    }

    #[test]
    fn composition_is_deterministic(records in acyclic_records()) {
        let composer = TreeComposer::new("id", "parent");
        let a = composer.compose(&records).unwrap();
        let b = composer.compose(&records).unwrap();
        let walk_a: Vec<(usize, &str)> = walk_forest(&a).map(|(d, n)| (d, n.key.as_str())).collect();
        let walk_b: Vec<(usize, &str)> = walk_forest(&b).map(|(d, n)| (d, n.key.as_str())).collect();
        prop_assert_eq!(walk_a, walk_b);
    }
}
