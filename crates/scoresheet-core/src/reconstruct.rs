//! Token-stream reconstruction: folds classified tokens into numbered move pairs.

use tracing::debug;

use crate::model::{Confidence, Move};
use crate::tokenizer::{is_move_like, Token};

/// A move pair still being filled in.
#[derive(Debug, Clone)]
struct PendingMove {
    move_number: u32,
    white: String,
    white_nag: Option<String>,
    black: Option<(String, Option<String>)>,
}

impl PendingMove {
    fn new(move_number: u32, white: String, white_nag: Option<String>) -> Self {
        Self {
            move_number,
            white,
            white_nag,
            black: None,
        }
    }

    fn into_move(self) -> Move {
        let (black, black_nag) = self.black.unwrap_or_default();
        Move {
            move_number: self.move_number,
            confidence: Confidence::for_plies(!black.is_empty()),
            white: self.white,
            black,
            white_nag: self.white_nag,
            black_nag,
        }
    }
}

#[derive(Debug, Default)]
struct Reconstructor {
    current_move_number: Option<u32>,
    pending: Option<PendingMove>,
    moves: Vec<Move>,
}

impl Reconstructor {
    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.moves.push(pending.into_move());
        }
    }

    fn feed(&mut self, token: Token) {
        match token {
            Token::MoveNumberWithMove { number, text, nag } => {
                self.flush();
                self.current_move_number = Some(number);
                if is_move_like(&text) {
                    self.pending = Some(PendingMove::new(number, text, nag));
                }
            }
            Token::MoveNumber(number) => {
                self.flush();
                self.current_move_number = Some(number);
            }
            Token::Noise(_) => {}
            Token::MoveLike { text, nag } => match (self.current_move_number, self.pending.as_mut()) {
                (None, _) => {
                    debug!(token = %text, "Dropping move with no move number to anchor it");
                }
                (Some(number), None) => {
                    self.pending = Some(PendingMove::new(number, text, nag));
                }
                (Some(_), Some(pending)) if pending.black.is_none() => {
                    pending.black = Some((text, nag));
                }
                (Some(number), Some(_)) => {
                    // Unnumbered continuation: the next pair starts here.
                    let Some(next) = number.checked_add(1) else {
                        debug!(token = %text, number, "Dropping move past the last move number");
                        return;
                    };
                    self.flush();
                    self.pending = Some(PendingMove::new(next, text, nag));
                    self.current_move_number = Some(next);
                }
            },
        }
    }

    fn finish(mut self) -> Vec<Move> {
        self.flush();
        self.moves
    }
}

/// Assemble move pairs from a token stream in a single forward pass.
pub fn reconstruct_moves(tokens: impl IntoIterator<Item = Token>) -> Vec<Move> {
    let mut state = Reconstructor::default();
    for token in tokens {
        state.feed(token);
    }
    state.finish()
}
