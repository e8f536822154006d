//! Scoresheet reconstruction and move validation.
//!
//! Turns OCR text of handwritten chess scoresheets into numbered move pairs,
//! stitches multi-page sheets into one game, and replays the result against
//! a rules oracle to flag and help repair transcription errors.

pub mod error;
pub mod layout;
pub mod lines;
pub mod model;
pub mod nag;
pub mod oracle;
pub mod reconstruct;
pub mod scoresheet;
pub mod similarity;
pub mod stitch;
pub mod tokenizer;
pub mod validation;

pub use error::{MoveRejection, ScoresheetError};
pub use layout::{detect_column_alignment, ColumnLayout};
pub use model::{
    Confidence, GameResult, Move, OcrMetadata, ParsedScoresheet, ValidationError,
    ValidationErrorKind, ValidationResponse,
};
pub use oracle::{RulesOracle, ShakmatyOracle};
pub use scoresheet::{low_confidence_indices, parse_scoresheet, parse_scoresheet_with_metadata};
pub use stitch::stitch_pages;
pub use validation::{flatten_moves, validate_moves};
