use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::auth::extract::OptionalAuthUser;
use crate::errors::AppError;
use crate::fact_check::result::{FactCheckRequest, FactCheckResult, FactCheckSession};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckClaimBody {
    #[serde(default)]
    pub claim: String,
    pub session_id: Option<String>,
    pub additional_context: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueBody {
    pub session_id: Option<String>,
    pub additional_claim: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// POST /api/fact-check
pub async fn handle_check_claim(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(body): Json<CheckClaimBody>,
) -> Result<Json<FactCheckResult>, AppError> {
    let claim = body.claim.trim();
    if claim.is_empty() {
        return Err(AppError::Validation("Claim is required".to_string()));
    }

    let result = state
        .sessions
        .record(FactCheckRequest {
            claim: claim.to_string(),
            session_id: non_blank(body.session_id),
            user_id: auth.email(),
            additional_context: non_blank(body.additional_context),
        })
        .await?;
    Ok(Json(result))
}

/// GET /api/fact-check?sessionId=..
pub async fn handle_get_session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<FactCheckSession>, AppError> {
    let session_id = non_blank(query.session_id)
        .ok_or_else(|| AppError::Validation("Session ID is required".to_string()))?;

    state
        .sessions
        .get_session(&session_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}

/// POST /api/fact-check/continue
pub async fn handle_continue(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(body): Json<ContinueBody>,
) -> Result<Json<FactCheckResult>, AppError> {
    let (Some(session_id), Some(claim)) = (
        non_blank(body.session_id),
        non_blank(body.additional_claim),
    ) else {
        return Err(AppError::Validation(
            "Session ID and additional claim are required".to_string(),
        ));
    };

    let result = state
        .sessions
        .continue_session(&session_id, &claim, auth.email().as_deref())
        .await?;
    Ok(Json(result))
}
