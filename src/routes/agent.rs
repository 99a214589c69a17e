use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::agent::{ANALYSIS_REQUEST, AgentRequest, build_prompt};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/agent", post(api_agent))
}

/// Proxies a dashboard question (or an automated analysis request) to the
/// chat-completions provider and returns its text verbatim.
async fn api_agent(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AgentRequest>,
) -> Result<Json<Value>, ApiError> {
    // Callers may supply their own window; otherwise attach ours.
    let bars = match request.gold_data {
        Some(bars) => bars,
        None => state.window(),
    };
    let bars = (!bars.is_empty()).then_some(bars);

    // Automated analysis requests may arrive without a message.
    let user_message = if request.is_analysis && request.user_message.trim().is_empty() {
        ANALYSIS_REQUEST
    } else {
        request.user_message.as_str()
    };

    let prompt = build_prompt(user_message, bars.as_deref(), request.is_analysis);

    match state.agent.chat(&prompt).await {
        Ok(response) => Ok(Json(json!({ "response": response }))),
        Err(err) => {
            tracing::error!("agent request failed: {err}");
            Err(ApiError::Agent)
        }
    }
}
