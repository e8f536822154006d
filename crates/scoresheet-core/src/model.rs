use serde::{Deserialize, Serialize};

/// Confidence assigned to a ply the recognizer produced but nobody verified.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Confidence assigned to an absent ply (nothing to doubt).
pub const ABSENT_PLY_CONFIDENCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub white: f64,
    pub black: f64,
}

impl Confidence {
    /// Default confidence for a freshly recognized pair.
    pub fn for_plies(black_present: bool) -> Self {
        Self {
            white: DEFAULT_CONFIDENCE,
            black: if black_present {
                DEFAULT_CONFIDENCE
            } else {
                ABSENT_PLY_CONFIDENCE
            },
        }
    }
}

/// One numbered half-move pair as read from the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub move_number: u32,
    pub white: String,
    /// Empty when Black's ply was not played or not recognized.
    #[serde(default)]
    pub black: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_nag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_nag: Option<String>,
}

impl Move {
    pub fn new(move_number: u32, white: impl Into<String>, black: impl Into<String>) -> Self {
        let black = black.into();
        Self {
            move_number,
            white: white.into(),
            confidence: Confidence::for_plies(!black.is_empty()),
            black,
            white_nag: None,
            black_nag: None,
        }
    }

    pub fn has_black(&self) -> bool {
        !self.black.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    #[serde(rename = "*")]
    Unknown,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unknown => "*",
        }
    }

    /// Parse a result marker as it appears on a sheet.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" | "½-½" => Some(GameResult::Draw),
            "*" => Some(GameResult::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page's reconstruction result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedScoresheet {
    pub moves: Vec<Move>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
}

impl ParsedScoresheet {
    /// Move number of the first reconstructed pair, 0 for an empty page.
    pub fn first_move_number(&self) -> u32 {
        self.moves.first().map(|m| m.move_number).unwrap_or(0)
    }
}

/// Metadata the recognizer may hand over alongside the raw text.
/// When present it wins over what the parser extracts itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    Illegal,
    Ambiguous,
    InvalidNotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Position in the flattened move list.
    pub index: usize,
    #[serde(rename = "move")]
    pub mv: String,
    pub error: ValidationErrorKind,
    pub suggestions: Vec<String>,
    pub legal_moves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub final_fen: String,
}
