// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table state.
//!
//! Select rows, refresh the data and reconcile the selection, edit and persist
//! column settings, and page through results.
//!
//! Run:
//! - `cargo run -p trellis_demos --example table_state`

use env_logger::Env;
use log::info;
use trellis_record::Record;
use trellis_table::{
    ColumnConfig, ColumnSettings, MemoryStore, PageInfo, Selection, SelectionMode, SortOrder,
    load_columns_or_default, save_columns,
};

fn user(id: u32, name: &str) -> Record {
    Record::new().with("id", id).with("name", name)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let page = PageInfo {
        total: 3,
        sorts: vec![SortOrder::asc("name")],
        ..PageInfo::default()
    };
    info!("page {} of {}, offset {}", page.current, page.page_count(), page.offset());

    let rows = vec![user(1, "Ada"), user(2, "Grace"), user(3, "Linus")];
    let mut selection = Selection::new(SelectionMode::Multi);
    selection.toggle("3");
    selection.toggle("1");
    println!("selected keys: {:?}", selection.keys());

    // User 3 disappears after a refresh.
    let refreshed = vec![user(1, "Ada"), user(2, "Grace")];
    selection.reconcile_rows(&refreshed, "id");
    let names: Vec<String> = selection
        .selected_rows(&refreshed, "id")
        .iter()
        .filter_map(|r| r.key_of("name"))
        .collect();
    println!("still selected after refresh: {names:?} (of {} rows before)", rows.len());

    let defaults: ColumnSettings = [
        ColumnConfig::new("id", "ID", 60),
        ColumnConfig::new("name", "Name", 180),
        ColumnConfig::new("email", "Email", 240),
    ]
    .into_iter()
    .collect();

    let mut store = MemoryStore::new();
    let mut edited = load_columns_or_default(&store, "users", &defaults);
    edited.set_visible("id", false);
    edited.set_width("email", 500);
    edited.move_column("email", "name");
    save_columns(&mut store, "users", &edited).unwrap();

    let restored = load_columns_or_default(&store, "users", &defaults);
    for column in restored.visible() {
        println!("{:>2} {:<6} {}px", column.order, column.label, column.width);
    }
}
