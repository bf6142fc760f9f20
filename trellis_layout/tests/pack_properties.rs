// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for row packing.

use proptest::prelude::*;
use trellis_layout::{ColumnCount, LayoutItem, Row, pack};

fn item_strategy() -> impl Strategy<Value = (u8, bool, bool)> {
    // (span, hidden, section start)
    (0_u8..7, prop::bool::weighted(0.2), prop::bool::weighted(0.15))
}

fn items_strategy() -> impl Strategy<Value = Vec<LayoutItem>> {
    prop::collection::vec(item_strategy(), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (span, hidden, section))| {
                let mut item = LayoutItem::new(format!("f{i}"), span);
                if hidden {
                    item = item.hidden();
                }
                if section {
                    item = item.section_start((i % 2 == 0).then_some("Section"));
                }
                item
            })
            .collect()
    })
}

fn columns_strategy() -> impl Strategy<Value = ColumnCount> {
    (1_u8..=4).prop_map(|n| ColumnCount::new(n).unwrap())
}

proptest! {
    #[test]
    fn packed_rows_fit_and_close_only_when_needed(
        items in items_strategy(),
        columns in columns_strategy(),
    ) {
        let cols = columns.get();
        let rows = pack(&items, columns);
        for (i, row) in rows.iter().enumerate() {
            let Row::Items(cells) = row else { continue };
            prop_assert!(!cells.is_empty());
            prop_assert!(row.total_span() <= cols);
            // A row followed directly by another items row was closed by overflow.
            if let Some(Row::Items(next)) = rows.get(i + 1) {
                prop_assert!(row.total_span() + next[0].span > cols);
            }
        }
    }

    #[test]
    fn packing_is_idempotent(items in items_strategy(), columns in columns_strategy()) {
        prop_assert_eq!(pack(&items, columns), pack(&items, columns));
    }

    #[test]
    fn hidden_items_only_in_trailing_row(items in items_strategy(), columns in columns_strategy()) {
        let rows = pack(&items, columns);
        let hidden: Vec<&str> = items
            .iter()
            .filter(|i| !i.is_visible())
            .map(|i| i.key.as_str())
            .collect();
        let hidden_rows: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| matches!(r, Row::Hidden(_)))
            .map(|(i, _)| i)
            .collect();
        if hidden.is_empty() {
            prop_assert!(hidden_rows.is_empty());
        } else {
            prop_assert_eq!(hidden_rows, vec![rows.len() - 1]);
            prop_assert_eq!(rows[rows.len() - 1].keys(), hidden);
        }
        for row in rows.iter().filter(|r| r.is_packed()) {
            let Row::Items(cells) = row else { continue };
            prop_assert!(cells.iter().all(|c| c.item.is_visible()));
        }
    }

    #[test]
    fn visible_order_is_preserved(items in items_strategy(), columns in columns_strategy()) {
        let rows = pack(&items, columns);
        let packed: Vec<&str> = rows
            .iter()
            .filter(|r| r.is_packed())
            .flat_map(Row::keys)
            .collect();
        let visible: Vec<&str> = items
            .iter()
            .filter(|i| i.is_visible())
            .map(|i| i.key.as_str())
            .collect();
        prop_assert_eq!(packed, visible);
    }

    #[test]
    fn every_separator_precedes_its_section_item(items in items_strategy(), columns in columns_strategy()) {
        let rows = pack(&items, columns);
        let sections = items.iter().filter(|i| i.is_visible() && i.section.is_some()).count();
        let separators = rows.iter().filter(|r| matches!(r, Row::Separator { .. })).count();
        prop_assert_eq!(sections, separators);
        for (i, row) in rows.iter().enumerate() {
            if matches!(row, Row::Separator { .. }) {
                let Some(Row::Items(cells)) = rows.get(i + 1) else {
                    return Err(TestCaseError::fail("separator not followed by items"));
                };
                prop_assert!(cells[0].item.section.is_some());
            }
        }
    }
}
