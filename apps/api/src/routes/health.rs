use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and generation mode.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "truthlens-api",
        "llm": if state.config.llm_enabled() { "enabled" } else { "demo" }
    }))
}
