// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal formatting helpers for the CLI.
//!
//! Plain ANSI escapes, no terminal crate. Everything here returns strings;
//! the caller decides where they go.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Wrap text in an ANSI style.
pub fn styled(code: &str, text: &str) -> String {
    format!("{}{}{}", code, text, RESET)
}

/// A section header line: `── TITLE ──────…` padded to a fixed width.
pub fn section(title: &str) -> String {
    let label = format!("── {} ", title);
    let fill = 64usize.saturating_sub(label.chars().count());
    format!("{}{}", styled(BOLD, &label), styled(DIM, &"─".repeat(fill)))
}

/// Fixed-width relevance score. Negative scores (terms in every document)
/// render dim instead of alarming.
pub fn score(value: f64) -> String {
    let text = format!("{:>8.4}", value);
    if value < 0.0 {
        styled(DIM, &text)
    } else {
        styled(GREEN, &text)
    }
}

/// Human-readable byte count.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Shorten long paths from the left, keeping the tail that matters.
pub fn truncate_path(path: &str, max: usize) -> String {
    if path.chars().count() <= max {
        return path.to_string();
    }
    let tail: String = path
        .chars()
        .rev()
        .take(max.saturating_sub(1))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("…{}", tail)
}
