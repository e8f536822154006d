//! Guess how moves were laid out on the sheet.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PAIRED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.\s]+[a-zA-Z0-9]+\s+[a-zA-Z0-9]+").unwrap());
static SEQUENTIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.\s]+[a-zA-Z0-9]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnLayout {
    /// W1 B1 / W2 B2 on the same row.
    Paired,
    /// All of White's moves in one column, then all of Black's.
    Sequential,
}

/// Count paired-looking rows against single-move rows; ties go to sequential.
pub fn detect_column_alignment(raw_text: &str) -> ColumnLayout {
    let mut paired = 0usize;
    let mut sequential = 0usize;

    for line in raw_text.lines() {
        if PAIRED_RE.is_match(line) {
            paired += 1;
        } else if SEQUENTIAL_RE.is_match(line) {
            sequential += 1;
        }
    }

    if paired > sequential {
        ColumnLayout::Paired
    } else {
        ColumnLayout::Sequential
    }
}
