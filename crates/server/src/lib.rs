pub mod config;
pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

/// Build the HTTP router with all scoresheet routes.
pub fn app(config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Reconstruction
        .route("/api/scoresheet/parse", post(routes::scoresheet::parse_page))
        .route("/api/scoresheet/stitch", post(routes::scoresheet::stitch))
        // Validation
        .route("/api/validate", post(routes::validate::validate))
        .route("/api/position", post(routes::validate::position))
        .route("/api/legal-moves", get(routes::validate::legal_moves))
        .route("/api/make-move", post(routes::validate::apply_move))
        .layer(Extension(config))
        .layer(cors)
}
