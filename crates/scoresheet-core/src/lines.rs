//! Line-oriented extraction: player headers, result markers, and the
//! per-line move fallback used when token reconstruction finds nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Confidence, GameResult, Move};
use crate::tokenizer::clean_move_text;

static WHITE_PLAYER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:white|w):\s*([a-z\s]+)").unwrap());
static BLACK_PLAYER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:black|b):\s*([a-z\s]+)").unwrap());

static MOVE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)[.\s|]+([a-zA-Z0-9\-+#=!?]+)[\s|]*([a-zA-Z0-9\-+#=!?]*)").unwrap()
});

static RESULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(1-0|0-1|1/2-1/2|½-½|\*)").unwrap());

/// Player names pulled off the sheet, plus the lines left for move parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetHeader {
    pub white_player: Option<String>,
    pub black_player: Option<String>,
    pub cleaned_lines: Vec<String>,
}

/// Trimmed, non-empty lines of raw text.
pub fn significant_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pull "White: ..." / "Black: ..." lines out of the sheet.
/// A line naming White is never also read as naming Black.
pub fn extract_player_names(lines: &[String]) -> SheetHeader {
    let mut header = SheetHeader::default();

    for line in lines {
        if let Some(cap) = WHITE_PLAYER_RE.captures(line) {
            header.white_player = Some(cap[1].trim().to_string());
        } else if let Some(cap) = BLACK_PLAYER_RE.captures(line) {
            header.black_player = Some(cap[1].trim().to_string());
        } else {
            header.cleaned_lines.push(line.clone());
        }
    }

    header
}

/// First result marker anywhere in the text.
pub fn extract_result(raw_text: &str) -> Option<GameResult> {
    RESULT_RE
        .captures(raw_text)
        .and_then(|cap| GameResult::from_marker(&cap[1]))
}

/// Read one "N white black" pair per line.
///
/// Move text is normalized but not shape-checked; odd readings are kept
/// for manual review rather than dropped.
pub fn extract_moves_by_line(lines: &[String]) -> Vec<Move> {
    let mut moves = Vec::new();

    for line in lines {
        let Some(cap) = MOVE_LINE_RE.captures(line) else {
            continue;
        };
        let Ok(move_number) = cap[1].parse::<u32>() else {
            continue;
        };

        let (white, white_nag) = clean_move_text(&cap[2]);
        let (black, black_nag) = clean_move_text(&cap[3]);
        if white.is_empty() {
            continue;
        }

        moves.push(Move {
            move_number,
            confidence: Confidence::for_plies(!black.is_empty()),
            white,
            black,
            white_nag,
            black_nag,
        });
    }

    moves
}
