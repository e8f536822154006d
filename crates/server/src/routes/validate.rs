use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use scoresheet_core::validation::{board_position, legal_moves_from, make_move};
use scoresheet_core::{flatten_moves, validate_moves, Move, ShakmatyOracle, ValidationResponse};

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// Flat SAN list, White and Black interleaved.
    pub moves: Option<Vec<String>>,
    /// Reconstructed move pairs; flattened before replay.
    pub scoresheet: Option<Vec<Move>>,
}

/// POST /api/validate
/// Replay the moves and report the first one that cannot be played.
pub async fn validate(Json(req): Json<ValidateRequest>) -> Result<Json<ValidationResponse>, AppError> {
    let moves = match (req.moves, req.scoresheet) {
        (Some(moves), _) => moves,
        (None, Some(pairs)) => flatten_moves(&pairs),
        (None, None) => return Err(AppError::BadRequest("Moves array is required".into())),
    };

    let response = tokio::task::spawn_blocking(move || validate_moves(&ShakmatyOracle, &moves))
        .await
        .map_err(|e| AppError::Internal(format!("Validation task failed: {e}")))?;

    if let Some(err) = response.errors.first() {
        tracing::info!(
            index = err.index,
            mv = %err.mv,
            kind = ?err.error,
            "Move list failed validation"
        );
    }

    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub moves: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub fen: String,
}

/// POST /api/position
/// FEN after the longest playable prefix of the moves.
pub async fn position(Json(req): Json<PositionRequest>) -> Result<Json<PositionResponse>, AppError> {
    let moves = req.moves;
    let fen = tokio::task::spawn_blocking(move || board_position(&ShakmatyOracle, &moves))
        .await
        .map_err(|e| AppError::Internal(format!("Position task failed: {e}")))?;

    Ok(Json(PositionResponse { fen }))
}

#[derive(Debug, Deserialize)]
pub struct LegalMovesQuery {
    pub fen: String,
}

#[derive(Debug, Serialize)]
pub struct LegalMovesResponse {
    pub legal_moves: Vec<String>,
}

/// GET /api/legal-moves?fen=...
pub async fn legal_moves(
    Query(q): Query<LegalMovesQuery>,
) -> Result<Json<LegalMovesResponse>, AppError> {
    Ok(Json(LegalMovesResponse {
        legal_moves: legal_moves_from(&ShakmatyOracle, &q.fen)?,
    }))
}

#[derive(Debug, Deserialize)]
pub struct MakeMoveRequest {
    pub fen: String,
    #[serde(rename = "move")]
    pub mv: String,
}

#[derive(Debug, Serialize)]
pub struct MakeMoveResponse {
    /// `None` when the move cannot be played from `fen`.
    pub fen: Option<String>,
}

/// POST /api/make-move
pub async fn apply_move(Json(req): Json<MakeMoveRequest>) -> Result<Json<MakeMoveResponse>, AppError> {
    Ok(Json(MakeMoveResponse {
        fen: make_move(&ShakmatyOracle, &req.fen, &req.mv)?,
    }))
}
