use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::report::models::{QueryRequest, UserQueryResult};
use crate::state::AppState;

/// POST /api/fact-check/query
pub async fn handle_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<UserQueryResult>, AppError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("Query is required".to_string()));
    }
    let result = state
        .reports
        .process_query(query, req.context.as_deref())
        .await;
    Ok(Json(result))
}
