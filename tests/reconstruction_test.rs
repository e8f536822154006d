//! Integration tests: raw OCR text -> pages -> stitched game.

use scoresheet_core::lines::{extract_moves_by_line, significant_lines};
use scoresheet_core::{
    detect_column_alignment, flatten_moves, parse_scoresheet, stitch_pages, validate_moves,
    ColumnLayout, GameResult, ParsedScoresheet, ShakmatyOracle,
};

fn pairs(page: &ParsedScoresheet) -> Vec<(u32, String, String)> {
    page.moves
        .iter()
        .map(|m| (m.move_number, m.white.clone(), m.black.clone()))
        .collect()
}

fn expected(items: &[(u32, &str, &str)]) -> Vec<(u32, String, String)> {
    items
        .iter()
        .map(|(n, w, b)| (*n, w.to_string(), b.to_string()))
        .collect()
}

#[test]
fn test_glued_numbers_reconstruct() {
    let page = parse_scoresheet("1.e4 e5 2.Nf3 Nc6");
    assert_eq!(pairs(&page), expected(&[(1, "e4", "e5"), (2, "Nf3", "Nc6")]));
}

#[test]
fn test_line_layout_reconstructs() {
    let page = parse_scoresheet("1 e4 e5\n2 Nf3 Nc6");
    assert_eq!(pairs(&page), expected(&[(1, "e4", "e5"), (2, "Nf3", "Nc6")]));
}

#[test]
fn test_token_strategy_preferred_over_lines() {
    // Line reading takes the stray "Zz" as Black's move; tokens skip it.
    let raw = "1. e4 Zz e5\n2. Nf3 Nc6";
    let by_line = extract_moves_by_line(&significant_lines(raw));
    assert_eq!(by_line[0].black, "Zz");

    let page = parse_scoresheet(raw);
    assert_eq!(pairs(&page), expected(&[(1, "e4", "e5"), (2, "Nf3", "Nc6")]));
}

#[test]
fn test_line_fallback_when_no_tokens_read() {
    let page = parse_scoresheet("1. e Nf\n2. Qx Ke");
    assert_eq!(pairs(&page), expected(&[(1, "e", "Nf"), (2, "Qx", "Ke")]));
}

#[test]
fn test_huge_move_number_does_not_panic() {
    let page = parse_scoresheet("4294967295 e4 e5 Nf3");
    assert_eq!(pairs(&page), expected(&[(u32::MAX, "e4", "e5")]));
}

#[test]
fn test_reconstruction_is_deterministic() {
    let raw = "White: Ann Lee\n1. d4 | Nf6\n2. c4 | e6\n3. nc3 | bb4\n4. 0-0 ?? | d5!\n1/2-1/2";
    assert_eq!(parse_scoresheet(raw), parse_scoresheet(raw));
}

#[test]
fn test_noisy_sheet() {
    // Typical OCR output: header junk, table pipes, castling read as zeros,
    // an annotation glyph, and the result at the bottom.
    let raw = "\
        SCORESHEET  Rd 4  Board 12\n\
        White: Ann Lee\n\
        Black: Tom Berg\n\
        1 | e4 | c5\n\
        2 | nf3 | d6\n\
        3 | d4 | cxd4\n\
        4 | Nxd4 | Nf6\n\
        5 | Nc3 | a6\n\
        6 | Be2 | e5\n\
        7 | Nb3 | Be7\n\
        8 | 0-0 | 0-0!\n\
        0-1";
    let page = parse_scoresheet(raw);

    assert_eq!(page.white_player.as_deref(), Some("Ann Lee"));
    assert_eq!(page.black_player.as_deref(), Some("Tom Berg"));
    assert_eq!(page.result, Some(GameResult::BlackWins));
    assert_eq!(page.moves.len(), 8);
    assert_eq!(page.moves[1].white, "Nf3");
    assert_eq!(page.moves[7].white, "O-O");
    assert_eq!(page.moves[7].black, "O-O");
    assert_eq!(page.moves[7].black_nag.as_deref(), Some("!"));
    assert!(page
        .moves
        .windows(2)
        .all(|w| w[0].move_number <= w[1].move_number));

    let flat = flatten_moves(&page.moves);
    let result = validate_moves(&ShakmatyOracle, &flat);
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
}

#[test]
fn test_multi_page_game() {
    let page_two = parse_scoresheet("4. Ba4 Nf6\n5. O-O Be7\n1-0");
    let page_one = parse_scoresheet("W: Ruy Lopez\n1. e4 e5\n2. Nf3 Nc6\n3. Bb5 a6");

    let game = stitch_pages(vec![page_two, page_one]);
    assert_eq!(game.white_player.as_deref(), Some("Ruy Lopez"));
    assert_eq!(game.result, Some(GameResult::WhiteWins));
    let numbers: Vec<u32> = game.moves.iter().map(|m| m.move_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);

    let result = validate_moves(&ShakmatyOracle, &flatten_moves(&game.moves));
    assert!(result.valid);
}

#[test]
fn test_stitch_order_by_first_move() {
    let pages = vec![
        parse_scoresheet("5. c3 Ba5"),
        parse_scoresheet("1. e4 e5"),
        parse_scoresheet("10. d4 exd4"),
    ];
    let game = stitch_pages(pages);
    assert_eq!(game.moves[0].move_number, 1);
    assert_eq!(game.moves[1].move_number, 5);
    assert_eq!(game.moves[2].move_number, 10);
}

#[test]
fn test_stitch_metadata() {
    let mut a = parse_scoresheet("1. e4 e5");
    a.white_player = Some("Alice".to_string());
    a.result = None;
    let mut b = parse_scoresheet("2. Nf3 Nc6");
    b.result = Some(GameResult::WhiteWins);

    let game = stitch_pages(vec![a, b]);
    assert_eq!(game.result, Some(GameResult::WhiteWins));
    assert_eq!(game.white_player.as_deref(), Some("Alice"));
}

#[test]
fn test_column_layout() {
    assert_eq!(
        detect_column_alignment("1. e4 e5\n2. Nf3 Nc6"),
        ColumnLayout::Paired
    );
    assert_eq!(
        detect_column_alignment("1. e4\n2. Nf3\n3. Bb5\n1. e5\n2. Nc6"),
        ColumnLayout::Sequential
    );
}
