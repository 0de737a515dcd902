//! HTTP handlers for notegen-api.

pub mod files;
pub mod notes;

use axum::{extract::State, Json};
use serde::Serialize;

use notegen_core::GenerationBackend;

use crate::AppState;

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub generation_backend: bool,
    pub model: String,
}

/// Liveness plus generation-backend reachability.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let generation_backend = state.generator.health_check().await.unwrap_or(false);
    Json(HealthResponse {
        status: "ok",
        generation_backend,
        model: state.generator.model_name().to_string(),
    })
}
