use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use bp_core::PipelineKind;

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/status", get(status))
}

pub fn compress_routes() -> Router<AppState> {
    Router::new().route("/api/v1/compress", post(compress))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn status(State(state): State<AppState>) -> Json<Value> {
    let pipelines: Vec<&str> = PipelineKind::ALL.iter().map(|k| k.as_str()).collect();
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "pipelines": pipelines,
        "registered": state.registry.len(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompressParams {
    /// Optional wire name overriding rule-based selection.
    pipeline: Option<String>,
}

/// Compress a payload and report what happened.
///
/// The body is the raw payload. Selection normally follows the routing
/// rules over the extracted features; a `?pipeline=` override skips them.
/// Override names that match no known pipeline degrade to the generic one
/// rather than erroring. Transform failures are not masked: a pipeline
/// that rejects its input surfaces as an unprocessable response.
async fn compress(
    State(state): State<AppState>,
    Query(params): Query<CompressParams>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let features = bp_analyzer::analyze(&body);

    let kind = match params.pipeline.as_deref() {
        Some(name) => PipelineKind::from_name(name).unwrap_or_else(|| {
            tracing::warn!("unknown pipeline override {name:?}, using generic_pipeline");
            PipelineKind::Generic
        }),
        None => bp_router::select_with_rules(&features, &state.rules),
    };

    let compressed = state.registry.dispatch(kind, &body)?;
    let verdict = state.policy.validate(&body, &compressed);

    tracing::info!(
        "request {request_id}: {} ({} bytes) -> {} ({} bytes, valid={})",
        features.media_type,
        features.size_bytes,
        kind,
        verdict.compressed_size,
        verdict.valid
    );

    Ok((
        [("x-request-id", request_id.to_string())],
        Json(json!({
            "pipeline": kind.as_str(),
            "compressed_size": verdict.compressed_size,
            "valid": verdict.valid,
            "media_type": features.media_type,
            "entropy_bits": features.entropy_bits,
        })),
    ))
}
