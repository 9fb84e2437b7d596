use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::llm_client::prompts::connectivity_check;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    #[serde(default)]
    pub deep: bool,
}

/// GET /health
/// Returns service status. `?deep=true` also makes a minimal model call.
pub async fn health_handler(
    State(state): State<AppState>,
    Query(query): Query<HealthQuery>,
) -> Json<Value> {
    let api_key = if state.config.openai_api_key.is_empty() {
        "missing"
    } else {
        "configured"
    };

    let mut body = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interviewer",
        "api_key": api_key,
    });

    if query.deep {
        body["llm"] = match state.llm.complete(&connectivity_check()).await {
            Ok(_) => json!("reachable"),
            Err(e) => {
                tracing::warn!("Deep health check failed: {e}");
                json!("unreachable")
            }
        };
    }

    Json(body)
}
