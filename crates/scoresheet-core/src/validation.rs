//! Fail-fast replay of a transcribed game against the rules of chess.
//!
//! Moves are applied in order from the initial position. The first move the
//! oracle refuses ends the replay: it is classified (ambiguous, illegal or
//! invalid notation) and returned with candidate corrections and a snapshot
//! of the legal moves at that point. Nothing after it is looked at, since
//! every later move depends on the board the refused move would have made.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{MoveRejection, ScoresheetError};
use crate::model::{Move, ValidationError, ValidationErrorKind, ValidationResponse};
use crate::oracle::RulesOracle;
use crate::similarity::rank_similar;

/// How many near-miss suggestions an illegal move gets.
pub const MAX_SUGGESTIONS: usize = 3;

static SQUARE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-h][1-8]").unwrap());

/// Replay `moves` (White and Black interleaved) and report the first failure.
pub fn validate_moves<O, S>(oracle: &O, moves: &[S]) -> ValidationResponse
where
    O: RulesOracle,
    S: AsRef<str>,
{
    let mut state = oracle.initial_state();
    let mut errors = Vec::new();

    for (index, mv) in moves.iter().enumerate() {
        let mv = mv.as_ref();
        match oracle.apply(&state, mv) {
            Ok(next) => state = next,
            Err(rejection) => {
                let error = classify_failure(oracle, &state, index, mv, &rejection);
                debug!(
                    index,
                    mv,
                    kind = ?error.error,
                    suggestions = ?error.suggestions,
                    "Validation stopped at first unplayable move"
                );
                errors.push(error);
                break;
            }
        }
    }

    ValidationResponse {
        valid: errors.is_empty(),
        errors,
        final_fen: oracle.to_board_notation(&state),
    }
}

fn classify_failure<O: RulesOracle>(
    oracle: &O,
    state: &O::State,
    index: usize,
    mv: &str,
    rejection: &MoveRejection,
) -> ValidationError {
    let legal_moves = oracle.legal_moves(state);
    let same_target = same_piece_same_target(mv, &legal_moves);

    let (error, suggestions) = if same_target.len() > 1 {
        (ValidationErrorKind::Ambiguous, same_target)
    } else {
        let kind = match rejection {
            MoveRejection::InvalidNotation(_) => ValidationErrorKind::InvalidNotation,
            MoveRejection::Illegal(_) | MoveRejection::Ambiguous(_) => ValidationErrorKind::Illegal,
        };
        (kind, rank_similar(mv, &legal_moves, MAX_SUGGESTIONS))
    };

    ValidationError {
        index,
        mv: mv.to_string(),
        error,
        suggestions,
        legal_moves,
    }
}

/// Legal moves sharing the attempted move's leading character (piece letter
/// or pawn file) and its first destination-looking square.
pub fn same_piece_same_target(mv: &str, legal_moves: &[String]) -> Vec<String> {
    let Some(target) = SQUARE_RE.find(mv).map(|m| m.as_str()) else {
        return Vec::new();
    };
    let Some(lead) = mv.chars().next() else {
        return Vec::new();
    };

    legal_moves
        .iter()
        .filter(|legal| legal.starts_with(lead) && legal.contains(target))
        .cloned()
        .collect()
}

/// Flatten move pairs into the interleaved list the validator takes:
/// White then Black, skipping Black plies that were never recognized.
pub fn flatten_moves(moves: &[Move]) -> Vec<String> {
    moves
        .iter()
        .flat_map(|m| {
            std::iter::once(m.white.clone()).chain(m.has_black().then(|| m.black.clone()))
        })
        .collect()
}

/// Board notation after playing `moves` up to the first one that fails.
pub fn board_position<O, S>(oracle: &O, moves: &[S]) -> String
where
    O: RulesOracle,
    S: AsRef<str>,
{
    let mut state = oracle.initial_state();
    for mv in moves {
        match oracle.apply(&state, mv.as_ref()) {
            Ok(next) => state = next,
            Err(_) => break,
        }
    }
    oracle.to_board_notation(&state)
}

/// Legal moves in the position described by `notation`.
pub fn legal_moves_from<O: RulesOracle>(
    oracle: &O,
    notation: &str,
) -> Result<Vec<String>, ScoresheetError> {
    let state = oracle.from_board_notation(notation)?;
    Ok(oracle.legal_moves(&state))
}

/// Play one move from `notation`. `Ok(None)` when the oracle refuses the move.
pub fn make_move<O: RulesOracle>(
    oracle: &O,
    notation: &str,
    mv: &str,
) -> Result<Option<String>, ScoresheetError> {
    let state = oracle.from_board_notation(notation)?;
    Ok(oracle
        .apply(&state, mv)
        .ok()
        .map(|next| oracle.to_board_notation(&next)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ShakmatyOracle;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_game() {
        let result = validate_moves(&ShakmatyOracle, &["e4", "e5", "Nf3", "Nc6", "Bb5"]);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.final_fen,
            "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"
        );
    }

    #[test]
    fn test_empty_move_list() {
        let result = validate_moves::<_, &str>(&ShakmatyOracle, &[]);
        assert!(result.valid);
        assert_eq!(
            result.final_fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_first_move_fails() {
        let result = validate_moves(&ShakmatyOracle, &["e5", "e4"]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        let err = &result.errors[0];
        assert_eq!(err.index, 0);
        assert_eq!(err.error, ValidationErrorKind::Illegal);
        assert_eq!(err.legal_moves.len(), 20);
        assert_eq!(err.suggestions.len(), MAX_SUGGESTIONS);
        assert!(err.suggestions.contains(&"e4".to_string()));
        assert_eq!(
            result.final_fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_invalid_notation() {
        let result = validate_moves(&ShakmatyOracle, &["e4", "Kz9"]);
        let err = &result.errors[0];
        assert_eq!(err.index, 1);
        assert_eq!(err.mv, "Kz9");
        assert_eq!(err.error, ValidationErrorKind::InvalidNotation);
        assert_eq!(err.suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_same_piece_same_target() {
        let legal = strings(&["Nbd2", "Nfd2", "Bd2", "d3", "Nc3"]);
        assert_eq!(same_piece_same_target("Nd2", &legal), strings(&["Nbd2", "Nfd2"]));
        assert_eq!(same_piece_same_target("Bd2", &legal), strings(&["Bd2"]));
        assert!(same_piece_same_target("Nz", &legal).is_empty());
        assert!(same_piece_same_target("", &legal).is_empty());
    }

    #[test]
    fn test_flatten_moves() {
        let moves = vec![Move::new(1, "e4", "e5"), Move::new(2, "Nf3", "")];
        assert_eq!(flatten_moves(&moves), strings(&["e4", "e5", "Nf3"]));
    }

    #[test]
    fn test_board_position_stops_at_failure() {
        let fen = board_position(&ShakmatyOracle, &["e4", "Ke7", "d4"]);
        assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    }

    #[test]
    fn test_make_move_and_legal_moves() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            make_move(&ShakmatyOracle, start, "Nf3").unwrap().as_deref(),
            Some("rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1")
        );
        assert_eq!(make_move(&ShakmatyOracle, start, "Nf4").unwrap(), None);
        assert!(make_move(&ShakmatyOracle, "garbage", "e4").is_err());
        assert_eq!(legal_moves_from(&ShakmatyOracle, start).unwrap().len(), 20);
    }
}
