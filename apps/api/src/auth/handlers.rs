use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::{AuthUser, OptionalAuthUser};
use crate::auth::tokens::{hash_token, magic_link, new_token, normalize_email};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    pub email: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user: User,
    pub expires: DateTime<Utc>,
}

/// POST /api/auth/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = normalize_email(&req.email)
        .ok_or_else(|| AppError::Validation("A valid email address is required".to_string()))?;

    let token = new_token();
    let expires_at = Utc::now() + Duration::minutes(state.config.magic_link_ttl_minutes);
    state
        .auth
        .insert_verification_token(&email, &hash_token(&token), expires_at)
        .await?;

    let link = magic_link(&state.config.public_url, &email, &token)?;
    state.mailer.send_magic_link(&email, &link).await?;

    Ok(Json(serde_json::json!({ "status": "verification_sent" })))
}

/// GET /api/auth/verify?email=..&token=..
pub async fn handle_verify(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<Json<SignedIn>, AppError> {
    let email = normalize_email(&params.email).ok_or(AppError::Unauthorized)?;

    let expires_at = state
        .auth
        .consume_verification_token(&email, &hash_token(&params.token))
        .await?
        .ok_or(AppError::Unauthorized)?;
    if expires_at <= Utc::now() {
        return Err(AppError::Unauthorized);
    }

    let user = state.auth.upsert_user(&email).await?;

    let session_token = new_token();
    let expires_at = Utc::now() + Duration::days(state.config.auth_session_ttl_days);
    state
        .auth
        .create_auth_session(user.id, &hash_token(&session_token), expires_at)
        .await?;

    info!("User {} signed in", user.id);
    Ok(Json(SignedIn {
        session_token,
        expires_at,
        user,
    }))
}

/// GET /api/auth/session
pub async fn handle_session(auth: OptionalAuthUser) -> Json<Option<SessionView>> {
    Json(auth.0.map(|a| SessionView {
        user: a.user,
        expires: a.expires_at,
    }))
}

/// POST /api/auth/signout
pub async fn handle_sign_out(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, AppError> {
    state.auth.delete_auth_session(&auth.token_hash).await?;
    info!("User {} signed out", auth.user.id);
    Ok(StatusCode::NO_CONTENT)
}
