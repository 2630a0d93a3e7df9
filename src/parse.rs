// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pasted text → item set.
//!
//! Spreadsheets copy a column as one cell per line, but a cell containing a
//! line break comes out wrapped in double quotes. So: a `"` toggles quoted mode
//! (and is dropped), a line break inside quotes becomes a single space, a line
//! break outside quotes ends the item.

use std::collections::BTreeSet;

/// Split pasted text into trimmed, non-empty, deduplicated items.
///
/// ```ignore
/// let items = parse_input("a\nb\n\"c\nd\"\ne");
/// assert_eq!(items, ["a", "b", "c d", "e"].map(String::from).into());
/// ```
pub fn parse_input(text: &str) -> BTreeSet<String> {
    let mut items = BTreeSet::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            // CRLF: let the '\n' do the work
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' if in_quotes => current.push(' '),
            '\n' => push_item(&mut items, &mut current),
            _ => current.push(c),
        }
    }
    push_item(&mut items, &mut current);

    items
}

fn push_item(items: &mut BTreeSet<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        items.insert(trimmed.to_string());
    }
    current.clear();
}
