//! Page-level entry points: raw OCR text in, one `ParsedScoresheet` out.

use tracing::debug;

use crate::lines::{extract_moves_by_line, extract_player_names, extract_result, significant_lines};
use crate::model::{Move, OcrMetadata, ParsedScoresheet};
use crate::reconstruct::reconstruct_moves;
use crate::tokenizer::tokenize;

/// Reconstruct one page of a scoresheet from raw OCR text.
///
/// Never fails: unreadable input yields a page with no moves.
pub fn parse_scoresheet(raw_text: &str) -> ParsedScoresheet {
    let lines = significant_lines(raw_text);
    let header = extract_player_names(&lines);

    let mut moves = reconstruct_moves(tokenize(&header.cleaned_lines.join("\n")));
    if moves.is_empty() {
        moves = extract_moves_by_line(&header.cleaned_lines);
        debug!(moves = moves.len(), "Token reconstruction found nothing, used line fallback");
    }

    ParsedScoresheet {
        moves,
        white_player: header.white_player,
        black_player: header.black_player,
        result: extract_result(raw_text),
    }
}

/// Like [`parse_scoresheet`], but metadata the recognizer already supplied
/// takes precedence over what is read off the text.
pub fn parse_scoresheet_with_metadata(raw_text: &str, metadata: &OcrMetadata) -> ParsedScoresheet {
    let parsed = parse_scoresheet(raw_text);
    ParsedScoresheet {
        white_player: metadata.white_player.clone().or(parsed.white_player),
        black_player: metadata.black_player.clone().or(parsed.black_player),
        result: metadata.result.or(parsed.result),
        moves: parsed.moves,
    }
}

/// Indices of moves where either ply's confidence is below `threshold`.
pub fn low_confidence_indices(moves: &[Move], threshold: f64) -> Vec<usize> {
    moves
        .iter()
        .enumerate()
        .filter(|(_, m)| m.confidence.white < threshold || m.confidence.black < threshold)
        .map(|(i, _)| i)
        .collect()
}
