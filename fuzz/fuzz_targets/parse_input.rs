// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for pasted-list parsing.
//!
//! Arbitrary text in, clean items out: nothing empty, nothing padded, no line
//! breaks or quote characters surviving into an item.

#![no_main]

use libfuzzer_sys::fuzz_target;
use setsift::parse_input;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let items = parse_input(&text);

    for item in &items {
        // INVARIANT 1: items are trimmed and non-empty
        assert!(!item.is_empty());
        assert_eq!(item.trim(), item.as_str(), "untrimmed item {:?}", item);

        // INVARIANT 2: line breaks end items or become spaces
        assert!(!item.contains('\n'), "line break in item {:?}", item);

        // INVARIANT 3: quotes only toggle mode
        assert!(!item.contains('"'), "quote in item {:?}", item);
    }

    // INVARIANT 4: re-pasting the items one per line is a fixed point
    let repasted = items.iter().cloned().collect::<Vec<_>>().join("\n");
    assert_eq!(parse_input(&repasted), items);
});
