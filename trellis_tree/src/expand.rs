// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion and selection helpers for tree views.
//!
//! A tree view owns its expanded keys and selection; these functions only compute
//! the next value from the current one and the records, so the view stays a
//! controlled component and the logic stays testable without a renderer.
//!
//! ## Search
//!
//! [`search_expanded_keys`] opens every ancestor of every record whose label
//! contains the keyword, so all matches become visible. The view then feeds the
//! result through [`merge_expanded`] to keep what the user already opened.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use log::trace;
use trellis_record::Entity;

/// Keys to expand so that every record whose label contains `keyword` is visible.
///
/// - An empty keyword expands nothing.
/// - A matching record contributes its parent key. A top-level match contributes
///   `virtual_root_key` when one is given and nothing otherwise.
/// - All transitive ancestors of contributed keys follow.
///
/// The result is deduplicated in first-seen order. Parent cycles end the walk.
pub fn search_expanded_keys<E: Entity>(
    records: &[E],
    id_field: &str,
    parent_field: &str,
    label: impl Fn(&E) -> String,
    keyword: &str,
    virtual_root_key: Option<&str>,
) -> Vec<String> {
    if keyword.is_empty() {
        return Vec::new();
    }
    let parent_of = |e: &E| {
        e.key_of(parent_field)
            .or_else(|| virtual_root_key.map(String::from))
    };

    // id → parents (several when ids repeat; every copy is followed).
    let mut parents: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for e in records {
        if let (Some(id), Some(parent)) = (e.key_of(id_field), parent_of(e)) {
            parents.entry(id).or_default().push(parent);
        }
    }

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out: Vec<String> = Vec::new();
    let mut frontier: Vec<String> = Vec::new();
    for key in records
        .iter()
        .filter(|e| label(*e).contains(keyword))
        .filter_map(parent_of)
    {
        if seen.insert(key.clone()) {
            out.push(key.clone());
            frontier.push(key);
        }
    }
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for key in &frontier {
            for parent in parents.get(key).into_iter().flatten() {
                if seen.insert(parent.clone()) {
                    out.push(parent.clone());
                    next.push(parent.clone());
                }
            }
        }
        frontier = next;
    }
    trace!("search `{keyword}` expands {} keys", out.len());
    out
}

/// Union of `current` and `requested`, first-seen order, no duplicates.
pub fn merge_expanded<S: AsRef<str>>(current: &[S], requested: &[S]) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    current
        .iter()
        .chain(requested)
        .map(|k| k.as_ref())
        .filter(|k| seen.insert(*k))
        .map(String::from)
        .collect()
}

/// Keys expanded when a tree first mounts.
///
/// Explicit defaults win; otherwise a virtual root starts open.
pub fn default_expanded_keys(explicit: Option<&[String]>, virtual_root_key: Option<&str>) -> Vec<String> {
    match (explicit, virtual_root_key) {
        (Some(keys), _) => keys.to_vec(),
        (None, Some(root)) => alloc::vec![String::from(root)],
        (None, None) => Vec::new(),
    }
}

/// Resolve a single-select tree selection to its record.
///
/// Only the first selected key counts. Returns `None` when nothing is selected or
/// the key matches no record (for example the virtual root).
pub fn resolve_selection<'a, E: Entity, S: AsRef<str>>(
    records: &'a [E],
    id_field: &str,
    selected: &[S],
) -> Option<&'a E> {
    let key = selected.first()?.as_ref();
    records
        .iter()
        .find(|e| e.key_of(id_field).as_deref() == Some(key))
}
