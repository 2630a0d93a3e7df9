// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal rendering of an analysis and of a single score breakdown.

use setsift::fuzzy::{partial_ratio, ratio, token_sort_ratio};
use setsift::romanize::{contains_hangul, gloss, romanize};
use setsift::{base_score, score, AnalysisResult, ItemList};

use super::display::*;

/// Columns available for item text inside a row.
const TEXT_WIDTH: usize = BOX_WIDTH - 8;

/// Column for names/keys in two-column rows.
const KEY_WIDTH: usize = 36;

fn join_items(list: &ItemList) -> String {
    truncate(&list.items.join(", "), TEXT_WIDTH)
}

fn dim(text: &str) -> String {
    themed(Tone::Muted, &[DIM], text)
}

/// Print the full report.
pub fn print_report(result: &AnalysisResult) {
    double_header();
    title("SETSIFT ANALYSIS");
    double_footer();

    section_top("GROUPS");
    for name in &result.group_names {
        let size = result.group_sizes.get(name).copied().unwrap_or(0);
        row(&format!(
            "  {}{}",
            pad_right(&truncate(name, KEY_WIDTH), KEY_WIDTH),
            pad_left(&format!("{} items", size), 12)
        ));
    }

    section_mid("EXACT COMBINATIONS");
    if result.combinations.is_empty() {
        row(&format!("  {}", dim("(none)")));
    }
    for (key, list) in &result.combinations {
        row(&format!(
            "  {}{}",
            pad_right(&truncate(key, KEY_WIDTH), KEY_WIDTH),
            pad_left(&list.count.to_string(), 6)
        ));
        row(&format!("    {}", dim(&join_items(list))));
    }

    if !result.intersections.is_empty() {
        section_mid("PAIRWISE INTERSECTIONS");
        for (key, list) in &result.intersections {
            row(&format!(
                "  {}{}",
                pad_right(&truncate(key, KEY_WIDTH), KEY_WIDTH),
                pad_left(&list.count.to_string(), 6)
            ));
        }
    }

    section_mid("UNIQUE ITEMS");
    for (name, list) in &result.unique_items {
        row(&format!(
            "  {}{}",
            pad_right(&truncate(name, KEY_WIDTH), KEY_WIDTH),
            pad_left(&list.count.to_string(), 6)
        ));
        if !list.is_empty() {
            row(&format!("    {}", dim(&join_items(list))));
        }
    }

    if !result.coverage_matrix.is_empty() {
        section_mid("COVERAGE");
        for (key, entry) in &result.coverage_matrix {
            row(&format!(
                "  {}{}  {}",
                pad_right(&truncate(key, KEY_WIDTH), KEY_WIDTH),
                coverage_colored(entry.percentage),
                dim(&format!("{}/{}", entry.covered, entry.total))
            ));
            for missing in &entry.missing {
                let suggestions = missing
                    .suggestions
                    .iter()
                    .map(|s| format!("{} {}", truncate(&s.text, 20), score_badge(s.score)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let item = truncate(&missing.item, 28);
                if suggestions.is_empty() {
                    row(&format!("    - {}", item));
                } else {
                    row(&format!("    - {} → {}", item, suggestions));
                }
            }
        }
    }

    section_mid("SIMILAR ITEMS");
    if result.similar_groups.is_empty() {
        row(&format!("  {}", dim("(none)")));
    }
    for cluster in &result.similar_groups {
        row(&format!(
            "  {}",
            themed(Tone::Title, &[BOLD], &truncate(&cluster.representative, TEXT_WIDTH))
        ));
        for item in &cluster.items_list {
            row(&format!(
                "    {} {}  {}",
                count_badge(item.count),
                truncate(&item.text, 36),
                dim(&truncate(&item.groups.join(", "), 30))
            ));
        }
    }
    section_bot();
}

/// Print the metric breakdown for one pair.
pub fn print_score(a: &str, b: &str, threshold: u8) {
    section_top("SCORE");
    row(&format!("  a: {}", truncate(a, TEXT_WIDTH)));
    row(&format!("  b: {}", truncate(b, TEXT_WIDTH)));

    section_mid("METRICS");
    row(&format!("  {}{}", pad_right("ratio", 24), score_badge(ratio(a, b))));
    row(&format!(
        "  {}{}",
        pad_right("partial_ratio", 24),
        score_badge(partial_ratio(a, b))
    ));
    row(&format!(
        "  {}{}",
        pad_right("token_sort_ratio", 24),
        score_badge(token_sort_ratio(a, b))
    ));
    row(&format!("  {}{}", pad_right("base", 24), score_badge(base_score(a, b))));

    if contains_hangul(a) != contains_hangul(b) {
        let korean = if contains_hangul(a) { a } else { b };
        section_mid("ROMANIZATION");
        match romanize(korean).and_then(|plain| gloss(korean).map(|g| (plain, g))) {
            Ok((plain, glossed)) => {
                row(&format!("  {}{}", pad_right("plain", 10), truncate(&plain, TEXT_WIDTH - 10)));
                if let Some(g) = glossed {
                    row(&format!("  {}{}", pad_right("name", 10), dim(&g.name)));
                    row(&format!("  {}{}", pad_right("nouns", 10), dim(&g.nouns.join(", "))));
                }
            }
            Err(e) => row(&format!("  {}", themed(Tone::Poor, &[], &e.to_string()))),
        }
    }

    section_mid("RESULT");
    row(&format!(
        "  {}{}",
        pad_right(&format!("score (threshold {})", threshold), 24),
        score_badge(score(a, b, threshold))
    ));
    section_bot();
}
