// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree basics.
//!
//! Compose a flat department list into a sorted tree under a virtual root, print
//! it, and show how malformed input is reported.
//!
//! Run:
//! - `cargo run -p trellis_demos --example tree_basics`
//! - `RUST_LOG=debug cargo run -p trellis_demos --example tree_basics` to see dangling parents

use env_logger::Env;
use log::info;
use trellis_record::Record;
use trellis_tree::{ComposeError, TreeComposer, walk_forest};

fn dept(id: &str, parent: &str, name: &str) -> Record {
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
        dept("ops", "", "Operations"),
        dept("web", "eng", "Web"),
        dept("eng", "", "Engineering"),
        dept("api", "eng", "API"),
        dept("fin", "", "Finance"),
        // Parent was deleted upstream: becomes a root.
        dept("tmp", "archived", "Temporary"),
    ];

    let composer = TreeComposer::new("id", "parent")
        .label(|r: &Record| r.key_of("name").unwrap_or_default())
        .comparator(|a, b| a.label.cmp(&b.label))
        .virtual_root("__all__", "All departments");

    let forest = composer.compose(&records).unwrap();
    for (depth, node) in walk_forest(&forest) {
        println!("{:indent$}{} ({})", "", node.label, node.key, indent = depth * 2);
    }
    info!("{} nodes under the virtual root", forest[0].size() - 1);

    if let Some(path) = forest[0].path_to("web") {
        println!("path to web: {}", path.join(" / "));
    }

    // Two records claiming each other as parent never reach a root.
    let cyclic = vec![dept("a", "b", "A"), dept("b", "a", "B")];
    match TreeComposer::new("id", "parent").compose(&cyclic) {
        Err(err @ ComposeError::Cycle { .. }) => println!("rejected: {err}"),
        other => panic!("expected a cycle error, got {other:?}"),
    }
}
