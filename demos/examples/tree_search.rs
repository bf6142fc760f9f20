// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree search and selection.
//!
//! Compute which nodes a tree view must expand so every match of a keyword is
//! visible, merge that with what the user already opened, and resolve a click.
//!
//! Run:
//! - `cargo run -p trellis_demos --example tree_search`

use env_logger::Env;
use trellis_record::Record;
use trellis_tree::expand::{
    default_expanded_keys, merge_expanded, resolve_selection, search_expanded_keys,
};

const ROOT: &str = "__all__";

fn category(id: &str, parent: &str, name: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("parent", parent)
        .with("name", name)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let records = vec![
        category("hw", "", "Hardware"),
        category("cpu", "hw", "Processors"),
        category("gpu", "hw", "Graphics cards"),
        category("sw", "", "Software"),
        category("os", "sw", "Operating systems"),
        category("gfx", "sw", "Graphics editors"),
    ];
    let name = |r: &Record| r.key_of("name").unwrap_or_default();

    let expanded = default_expanded_keys(None, Some(ROOT));
    println!("initially expanded: {expanded:?}");

    let found = search_expanded_keys(&records, "id", "parent", name, "Graphics", Some(ROOT));
    let expanded = merge_expanded(&expanded, &found);
    println!("after searching `Graphics`: {expanded:?}");

    let selected = ["gfx"];
    if let Some(record) = resolve_selection(&records, "id", &selected) {
        println!("selected: {}", name(record));
    }
}
