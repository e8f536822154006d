//! Tokenizer for raw OCR text.
//!
//! Splits recognized text on whitespace and pipes, repairs the usual OCR
//! confusions in move text, and classifies every piece as a move number,
//! a number glued to a move, a move, or noise.

use std::sync::LazyLock;

use regex::Regex;

use crate::nag::split_annotation;

static CASTLE_LONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0o]-[0o]-[0o]").unwrap());
static CASTLE_SHORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0o]-[0o]").unwrap());

static CASTLING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^O-O(?:-O)?[+#]?$").unwrap());
static SAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?$").unwrap()
});

// Lowercase `b` before a square: a pawn reading needs a capture onto another file.
static LOWER_B_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^b(x?)([a-h])[1-8]").unwrap());

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)[.)]?$").unwrap());
static GLUED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[.)]?([A-Za-z0O].+)$").unwrap());

/// A classified unit of OCR text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `"12"`, `"12."`, `"12)"`
    MoveNumber(u32),
    /// OCR glued the number to the following move: `"1.e4"`.
    /// `text` is normalized but not yet checked for move shape.
    MoveNumberWithMove {
        number: u32,
        text: String,
        nag: Option<String>,
    },
    MoveLike { text: String, nag: Option<String> },
    /// Names, punctuation, result markers, stray garbage.
    Noise(String),
}

/// Repair OCR artifacts in a single move candidate.
///
/// - `0-0` / `0-0-0` (digit zero, any case of `o`) become `O-O` / `O-O-O`
/// - a leading lowercase piece letter is upper-cased (`nf3` -> `Nf3`);
///   `b` only when no pawn move reads that way (`bb5` -> `Bb5`, while
///   `b4` and `bxc3` stay pawn moves)
/// - whitespace inside the token is removed
pub fn normalize_move(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let castled = if CASTLE_LONG_RE.is_match(&compact) {
        CASTLE_LONG_RE.replace(&compact, "O-O-O").into_owned()
    } else {
        CASTLE_SHORT_RE.replace(&compact, "O-O").into_owned()
    };

    let mut chars = castled.chars();
    match chars.next() {
        Some(first @ ('k' | 'q' | 'r' | 'n')) => {
            format!("{}{}", first.to_ascii_uppercase(), chars.as_str())
        }
        Some('b') if reads_as_bishop(&castled) => format!("B{}", chars.as_str()),
        _ => castled,
    }
}

fn reads_as_bishop(text: &str) -> bool {
    if !SAN_RE.is_match(text) {
        return true;
    }
    match LOWER_B_RE.captures(text) {
        Some(cap) => cap[1].is_empty() || &cap[2] == "b",
        None => false,
    }
}

/// Does the text have the shape of a SAN move or castling?
pub fn is_move_like(text: &str) -> bool {
    CASTLING_RE.is_match(text) || SAN_RE.is_match(text)
}

/// Normalize move text and peel off a trailing annotation glyph.
pub(crate) fn clean_move_text(raw: &str) -> (String, Option<String>) {
    let normalized = normalize_move(raw);
    let (body, nag) = split_annotation(&normalized);
    (body.to_string(), nag.map(str::to_string))
}

/// Classify one whitespace/pipe-delimited piece of text.
pub fn classify_token(raw: &str) -> Token {
    if let Some(cap) = NUMBER_RE.captures(raw) {
        return match cap[1].parse() {
            Ok(n) => Token::MoveNumber(n),
            Err(_) => Token::Noise(raw.to_string()),
        };
    }

    if let Some(cap) = GLUED_RE.captures(raw) {
        if let Ok(number) = cap[1].parse() {
            let (text, nag) = clean_move_text(&cap[2]);
            return Token::MoveNumberWithMove { number, text, nag };
        }
        return Token::Noise(raw.to_string());
    }

    let (text, nag) = clean_move_text(raw);
    if is_move_like(&text) {
        Token::MoveLike { text, nag }
    } else {
        Token::Noise(raw.to_string())
    }
}

/// Split raw text on pipes and whitespace and classify every piece.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split(|c: char| c == '|' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(classify_token)
        .collect()
}
