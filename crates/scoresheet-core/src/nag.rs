//! Annotation glyphs written next to moves ("!", "??", ...).

/// Glyph -> PGN numeric annotation code.
const NAG_SYMBOLS: [(&str, &str); 6] = [
    ("!", "$1"),
    ("?", "$2"),
    ("!!", "$3"),
    ("??", "$4"),
    ("!?", "$5"),
    ("?!", "$6"),
];

/// PGN code for an annotation glyph, e.g. `"!?"` -> `"$5"`.
pub fn nag_code(symbol: &str) -> Option<&'static str> {
    NAG_SYMBOLS
        .iter()
        .find(|(glyph, _)| *glyph == symbol)
        .map(|(_, code)| *code)
}

/// Split a trailing annotation glyph off a move token.
/// `"Nf3!?"` -> `("Nf3", Some("!?"))`. Unknown glyph runs (`"e4!!!"`) are left attached.
pub fn split_annotation(token: &str) -> (&str, Option<&str>) {
    let body = token.trim_end_matches(['!', '?']);
    let glyph = &token[body.len()..];
    if body.is_empty() || glyph.is_empty() || nag_code(glyph).is_none() {
        return (token, None);
    }
    (body, Some(glyph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nag_code() {
        assert_eq!(nag_code("!"), Some("$1"));
        assert_eq!(nag_code("??"), Some("$4"));
        assert_eq!(nag_code("?!"), Some("$6"));
        assert_eq!(nag_code("!!!"), None);
    }

    #[test]
    fn test_split_annotation() {
        assert_eq!(split_annotation("Nf3!?"), ("Nf3", Some("!?")));
        assert_eq!(split_annotation("Qxh7+!!"), ("Qxh7+", Some("!!")));
        assert_eq!(split_annotation("e4"), ("e4", None));
        assert_eq!(split_annotation("e4!!!"), ("e4!!!", None));
        assert_eq!(split_annotation("??"), ("??", None));
    }
}
