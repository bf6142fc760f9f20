// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form layout.
//!
//! Load a declarative form from JSON, pack it for two and four columns, and print
//! the rows with their 24-unit grid widths.
//!
//! Run:
//! - `cargo run -p trellis_demos --example form_layout`
//! - `RUST_LOG=debug cargo run -p trellis_demos --example form_layout` to see clamped spans

use env_logger::Env;
use log::info;
use trellis_layout::{ColumnCount, LayoutItem, Row, pack, pack_group, pack_layout};

const FORM: &str = r#"[
    {"key": "id", "span": 1, "flags": ""},
    {"key": "first_name", "label": "First name", "span": 1},
    {"key": "last_name", "label": "Last name", "span": 1},
    {"key": "email", "label": "Email", "span": 2},
    {"key": "street", "label": "Street", "span": 4, "section": {"title": "Address"}},
    {"key": "city", "label": "City", "span": 1},
    {"key": "validity", "label": "Valid", "span": 2, "sub_items": [
        {"key": "valid_from", "span": 1},
        {"key": "valid_to", "span": 1}
    ]},
    {"key": "remarks", "label": "Remarks", "span": 4, "section": {}}
]"#;

fn print_rows(rows: &[Row<'_>], columns: ColumnCount, indent: usize) {
    for row in rows {
        match row {
            Row::Items(cells) => {
                let line: Vec<String> = cells
                    .iter()
                    .map(|c| format!("{}[{}/24]", c.item.key, c.grid_span))
                    .collect();
                println!("{:indent$}| {}", "", line.join(" | "));
                for cell in cells.iter().filter(|c| c.item.is_group()) {
                    print_rows(&pack_group(cell, columns), columns, indent + 4);
                }
            }
            Row::Separator { title } => {
                println!("{:indent$}-- {} --", "", title.unwrap_or(""));
            }
            Row::Hidden(items) => {
                let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
                println!("{:indent$}(hidden: {})", "", keys.join(", "));
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let items: Vec<LayoutItem> = serde_json::from_str(FORM).unwrap();
    info!("loaded {} fields", items.len());

    for columns in [ColumnCount::TWO, ColumnCount::FOUR] {
        println!("== {} columns ==", columns.get());
        print_rows(&pack(&items, columns), columns, 0);
    }

    if let Err(err) = pack_layout(&items, 6) {
        println!("rejected: {err}");
    }
}
