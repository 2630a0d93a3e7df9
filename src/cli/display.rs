// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the setsift CLI.
//!
//! Colors come in tones (what a piece of text means) rather than hues. Each
//! tone has a OneDark and a One Light value; `SETSIFT_THEME` ("dark" or
//! "light") picks one, then the `COLORFGBG` background hint, else dark.
//! `NO_COLOR` and non-TTY output get plain text.
//!
//! Box widths are measured in terminal columns, and Hangul/CJK characters take
//! two columns, so a Korean item doesn't push the right border out of line.

use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME AND TONES
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SETSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": 7 and up is a light background, except 8 (dark gray)
    let light_bg = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8);
    if light_bg {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// What a colored span means in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Box borders and secondary text
    Muted,
    /// Double-line title frame
    Frame,
    /// Section labels
    Label,
    /// Titles and cluster representatives
    Title,
    /// Complete coverage, near-identical scores
    Best,
    Good,
    Fair,
    /// Little coverage, errors
    Poor,
    /// Group counts
    Count,
}

/// RGB of a tone: OneDark on dark backgrounds, One Light on light ones.
fn tone_rgb(tone: Tone, theme: Theme) -> (u8, u8, u8) {
    let (dark, light) = match tone {
        Tone::Muted => ((92, 99, 112), (160, 161, 167)),
        Tone::Frame => ((97, 175, 239), (64, 120, 242)),
        Tone::Label => ((86, 182, 194), (1, 132, 188)),
        Tone::Title => ((102, 217, 239), (1, 112, 158)),
        Tone::Best => ((166, 226, 46), (68, 140, 39)),
        Tone::Good => ((152, 195, 121), (80, 161, 79)),
        Tone::Fair => ((229, 192, 123), (193, 132, 1)),
        Tone::Poor => ((224, 108, 117), (228, 86, 73)),
        Tone::Count => ((198, 120, 221), (166, 38, 164)),
    };
    match theme {
        Theme::Dark => dark,
        Theme::Light => light,
    }
}

/// True-color foreground escape for a tone in the current theme.
fn escape(tone: Tone) -> String {
    let (r, g, b) = tone_rgb(tone, theme());
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Color `text` in `tone`, with optional modifiers; plain when colors are off.
pub fn themed(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), escape(tone), text, RESET)
    } else {
        text.to_string()
    }
}

/// Escape for a tone, or nothing when colors are off.
fn paint(tone: Tone) -> String {
    if use_colors() {
        escape(tone)
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Terminal columns taken by one character.
fn char_width(c: char) -> usize {
    match c {
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{303E}'
        | '\u{3041}'..='\u{33FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{A960}'..='\u{A97F}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}' => 2,
        _ => 1,
    }
}

/// Calculate visible width in columns (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += char_width(c);
        }
    }
    len
}

/// Cut plain text to at most `max` columns, ending in `…` if anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if visible_len(text) <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = paint(Tone::Muted);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{border}│{r}{content}{}{border}│{r}",
        " ".repeat(pad),
        r = reset()
    );
}

/// A labelled single rule between two corner glyphs: ┌─ LABEL ───┐
fn labelled_rule(left: char, right: char, label: &str) {
    let border = paint(Tone::Muted);
    let label_part = format!("─ {} ", themed(Tone::Label, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{border}{left}{r}{label_part}{border}{}{right}{r}",
        "─".repeat(remaining),
        r = reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule('┌', '┐', label);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule('├', '┤', label);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", paint(Tone::Muted), "─".repeat(BOX_WIDTH), reset());
}

fn double_rule(left: char, right: char) {
    println!("{}{left}{}{right}{}", paint(Tone::Frame), "═".repeat(BOX_WIDTH), reset());
}

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    double_rule('╔', '╗');
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    double_rule('╚', '╝');
}

/// Print a centered bold title between double bars: ║   TITLE   ║
pub fn title(text: &str) {
    let frame = paint(Tone::Frame);
    let colored = themed(Tone::Title, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!(
        "{frame}║{r}{}{colored}{}{frame}║{r}",
        " ".repeat(left_pad),
        " ".repeat(total_pad - left_pad),
        r = reset()
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Coverage percentage, best when complete, poor below a quarter.
pub fn coverage_colored(percentage: f64) -> String {
    let tone = if percentage >= 100.0 {
        Tone::Best
    } else if percentage >= 75.0 {
        Tone::Good
    } else if percentage >= 25.0 {
        Tone::Fair
    } else {
        Tone::Poor
    };
    themed(tone, &[], &format!("{:>6.2}%", percentage))
}

/// Similarity score badge: `[ 92]`
pub fn score_badge(score: u8) -> String {
    let tone = match score {
        95.. => Tone::Best,
        85..=94 => Tone::Good,
        _ => Tone::Fair,
    };
    themed(tone, &[], &format!("[{:>3}]", score))
}

/// Count badge for group membership: `×3`
pub fn count_badge(count: usize) -> String {
    themed(Tone::Count, &[BOLD], &format!("×{}", count))
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
