use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::embedding::TextEmbedder;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{ScreenRequest, ScreenResponse};
use crate::gateway::state::HandlerState;
use crate::ranking::CandidateDocument;

/// Runs one screening pass over the uploaded batch.
///
/// The engine is CPU-bound (encoder forward passes), so the run is moved
/// off the async runtime onto a blocking worker.
#[instrument(skip(state, request), fields(candidates = request.candidates.len()))]
pub async fn screen_handler<E>(
    State(state): State<HandlerState<E>>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, GatewayError>
where
    E: TextEmbedder + 'static,
{
    if request.job_description.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "job_description must not be empty".to_string(),
        ));
    }

    if request.candidates.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "at least one candidate document is required".to_string(),
        ));
    }

    let documents: Vec<CandidateDocument> = request
        .candidates
        .into_iter()
        .map(|c| CandidateDocument::new(c.identifier, c.text))
        .collect();

    debug!(candidates = documents.len(), "Dispatching screening run");

    let engine = state.engine.clone();
    let jd_text = request.job_description;

    let outcome = tokio::task::spawn_blocking(move || engine.screen(&jd_text, &documents))
        .await
        .map_err(|e| GatewayError::InternalError(format!("screening task failed: {}", e)))?
        .map_err(|e| GatewayError::EmbeddingFailed(e.to_string()))?;

    Ok(Json(ScreenResponse::from_outcome(outcome)))
}
