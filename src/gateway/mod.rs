//! HTTP gateway (Axum) for screening runs.
//!
//! The gateway is a thin delivery surface: it validates the request
//! envelope and hands the batch to [`ScreeningEngine`](crate::engine::ScreeningEngine).
//! Presentation (tables, KPI cards) belongs to the dashboard consuming
//! this API.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::screen_handler;
pub use payload::{CandidateUpload, ScreenRequest, ScreenResponse};
pub use state::HandlerState;

use crate::embedding::TextEmbedder;

/// Response header carrying the gateway-level status of a request.
pub const CALIPER_STATUS_HEADER: &str = "x-caliper-status";
pub const CALIPER_STATUS_HEALTHY: &str = "healthy";
pub const CALIPER_STATUS_READY: &str = "ready";

pub fn create_router_with_state<E>(state: HandlerState<E>) -> Router
where
    E: TextEmbedder + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/screen", post(screen_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub embedding: &'static str,
    pub embedder_mode: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        CALIPER_STATUS_HEADER,
        HeaderValue::from_static(CALIPER_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

use axum::extract::State;

#[tracing::instrument(skip(state))]
pub async fn ready_handler<E>(State(state): State<HandlerState<E>>) -> Response
where
    E: TextEmbedder + 'static,
{
    let embedder_mode = if state.stub_embedder { "stub" } else { "real" };

    let components = ComponentStatus {
        http: CALIPER_STATUS_READY,
        embedding: CALIPER_STATUS_READY,
        embedder_mode,
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        CALIPER_STATUS_HEADER,
        HeaderValue::from_static(CALIPER_STATUS_READY),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
