use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use nomibot_core::{AnswerPipeline, BackendError, ChatResult};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/ask", post(ask))
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: ChatResult,
}

async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let raw = state
        .backend
        .raw_answer(&request.question)
        .await
        .map_err(|e| match e {
            // Upstream error bodies go back to the caller unchanged.
            BackendError::Upstream { body, .. } => (StatusCode::BAD_REQUEST, body),
            other => (StatusCode::BAD_GATEWAY, other.to_string()),
        })?;

    let response = AnswerPipeline::process(&request.question, &raw);

    Ok(Json(AskResponse { response }))
}
