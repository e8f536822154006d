//! Rules oracle: the chess-rules capability the validator replays moves against.

use shakmaty::fen::Fen;
use shakmaty::san::{San, SanError, SanPlus};
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position};

use crate::error::{MoveRejection, ScoresheetError};

/// Anything that can play SAN moves, list legal moves and render a position.
pub trait RulesOracle {
    type State: Clone;

    fn initial_state(&self) -> Self::State;

    /// Play `mv` on a copy of `state`. The input state is never modified.
    fn apply(&self, state: &Self::State, mv: &str) -> Result<Self::State, MoveRejection>;

    /// Legal moves in SAN, in the oracle's enumeration order.
    fn legal_moves(&self, state: &Self::State) -> Vec<String>;

    fn to_board_notation(&self, state: &Self::State) -> String;

    fn from_board_notation(&self, notation: &str) -> Result<Self::State, ScoresheetError>;
}

/// Standard chess rules backed by shakmaty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyOracle;

impl RulesOracle for ShakmatyOracle {
    type State = Chess;

    fn initial_state(&self) -> Chess {
        Chess::default()
    }

    fn apply(&self, state: &Chess, mv: &str) -> Result<Chess, MoveRejection> {
        let san: SanPlus = mv
            .trim()
            .parse()
            .map_err(|_| MoveRejection::InvalidNotation(mv.to_string()))?;

        let legal = san.san.to_move(state).map_err(|e| match e {
            SanError::AmbiguousSan => MoveRejection::Ambiguous(mv.to_string()),
            _ => MoveRejection::Illegal(mv.to_string()),
        })?;

        let mut next = state.clone();
        next.play_unchecked(legal);
        Ok(next)
    }

    fn legal_moves(&self, state: &Chess) -> Vec<String> {
        state
            .legal_moves()
            .iter()
            .map(|m| {
                let san = San::from_move(state, m.clone());
                let mut after = state.clone();
                after.play_unchecked(m.clone());
                let suffix = if after.is_checkmate() {
                    "#"
                } else if after.is_check() {
                    "+"
                } else {
                    ""
                };
                format!("{san}{suffix}")
            })
            .collect()
    }

    fn to_board_notation(&self, state: &Chess) -> String {
        Fen::from_position(state, EnPassantMode::Legal).to_string()
    }

    fn from_board_notation(&self, notation: &str) -> Result<Chess, ScoresheetError> {
        let fen: Fen = notation
            .trim()
            .parse()
            .map_err(|e| ScoresheetError::InvalidFen(notation.to_string(), format!("{e}")))?;

        fen.into_position(CastlingMode::Standard)
            .map_err(|e| ScoresheetError::InvalidPosition(notation.to_string(), e.to_string()))
    }
}
