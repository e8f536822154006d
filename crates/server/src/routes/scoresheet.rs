use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use scoresheet_core::{
    detect_column_alignment, low_confidence_indices, parse_scoresheet_with_metadata, stitch_pages,
    ColumnLayout, Move, OcrMetadata, ParsedScoresheet,
};

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub raw_text: String,
    pub page_number: Option<u32>,
    /// Player names / result the recognizer already found, if any.
    #[serde(default)]
    pub metadata: OcrMetadata,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub moves: Vec<Move>,
    pub metadata: OcrMetadata,
    pub raw_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    pub layout: ColumnLayout,
    pub low_confidence_indices: Vec<usize>,
}

/// POST /api/scoresheet/parse
/// Reconstruct one page of moves from recognized text.
pub async fn parse_page(
    Extension(config): Extension<Config>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::BadRequest("raw_text is required".into()));
    }

    let parsed = parse_scoresheet_with_metadata(&req.raw_text, &req.metadata);
    let flagged = low_confidence_indices(&parsed.moves, config.low_confidence_threshold);

    tracing::info!(
        page = ?req.page_number,
        moves = parsed.moves.len(),
        flagged = flagged.len(),
        "Parsed scoresheet page"
    );

    Ok(Json(ParseResponse {
        layout: detect_column_alignment(&req.raw_text),
        low_confidence_indices: flagged,
        metadata: OcrMetadata {
            white_player: parsed.white_player,
            black_player: parsed.black_player,
            result: parsed.result,
        },
        moves: parsed.moves,
        raw_text: req.raw_text,
        page_number: req.page_number,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StitchRequest {
    pub pages: Vec<ParsedScoresheet>,
}

/// POST /api/scoresheet/stitch
/// Merge per-page results into one game, ordered by first move number.
pub async fn stitch(
    Extension(config): Extension<Config>,
    Json(req): Json<StitchRequest>,
) -> Result<Json<ParsedScoresheet>, AppError> {
    if req.pages.len() > config.max_pages {
        return Err(AppError::BadRequest(format!(
            "At most {} pages can be stitched",
            config.max_pages
        )));
    }

    Ok(Json(stitch_pages(req.pages)))
}
