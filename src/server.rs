//! HTTP boundary - marshals the generate request/response over axum
//!
//! Thin by design: the route handler validates nothing itself beyond
//! JSON shape; all semantic validation lives in [`crate::generate`].
//! CORS is wide open so the visualizer frontend can call the lab server
//! from any origin.

use std::env;
use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::generate::{generate_named, GenerateResult};

/// Wire request: `width`/`height` default to the grid's own shape when
/// omitted, `ruleset` defaults to s2
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// height x width grid, 0 = empty, nonzero = filled
    pub board: Vec<Vec<u8>>,
    pub piece: String,
    pub algorithm: String,
    #[serde(default = "default_ruleset")]
    pub ruleset: String,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

fn default_ruleset() -> String {
    "s2".to_string()
}

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(api_generate))
        .layer(cors)
}

/// Bind address from MOVEGEN_HOST / MOVEGEN_PORT, defaulting to
/// 127.0.0.1:8000
pub fn resolve_addr() -> SocketAddr {
    let host = env::var("MOVEGEN_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("MOVEGEN_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8000);

    format!("{host}:{port}")
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8000)))
}

async fn health() -> &'static str {
    "ok"
}

async fn api_generate(
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResult>, (StatusCode, String)> {
    let height = payload.height.unwrap_or(payload.board.len() as i32);
    let width = payload
        .width
        .unwrap_or_else(|| payload.board.first().map_or(0, |row| row.len() as i32));

    let result = generate_named(
        &payload.board,
        &payload.piece,
        &payload.algorithm,
        &payload.ruleset,
        width,
        height,
    )
    .map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            format!("{}: {}", err.code(), err.message()),
        )
    })?;

    Ok(Json(result))
}
