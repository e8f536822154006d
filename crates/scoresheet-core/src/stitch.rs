//! Merge per-page reconstructions of a multi-page scoresheet into one game.

use tracing::debug;

use crate::model::ParsedScoresheet;

/// Stitch pages by their first move number.
///
/// Pages are ordered by first move number (empty pages first) and their
/// moves concatenated as-is: no renumbering, no overlap detection. Player
/// names come from the first page; the result from the last page, else the
/// first.
pub fn stitch_pages(mut pages: Vec<ParsedScoresheet>) -> ParsedScoresheet {
    if pages.len() <= 1 {
        return pages.pop().unwrap_or_default();
    }

    pages.sort_by_key(ParsedScoresheet::first_move_number);
    let order: Vec<u32> = pages.iter().map(ParsedScoresheet::first_move_number).collect();
    debug!(pages = pages.len(), ?order, "Stitching scoresheet pages");

    let result = pages
        .last()
        .and_then(|page| page.result)
        .or(pages[0].result);
    let white_player = pages[0].white_player.clone();
    let black_player = pages[0].black_player.clone();

    let moves = pages.into_iter().flat_map(|page| page.moves).collect();

    ParsedScoresheet {
        moves,
        white_player,
        black_player,
        result,
    }
}
