//! Request extractors for bearer-token authentication.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{DateTime, Utc};

use crate::auth::tokens::{bearer_token, hash_token};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// A caller with a live bearer session. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// Like `AuthUser`, but anonymous callers (no token, or a dead one) are `None`.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The identifier recorded on fact-checks.
    pub fn email(&self) -> Option<String> {
        self.0.as_ref().map(|a| a.user.email.clone())
    }
}

async fn resolve(parts: &Parts, state: &AppState) -> Result<Option<AuthUser>, AppError> {
    let Some(token) = bearer_token(&parts.headers) else {
        return Ok(None);
    };
    let token_hash = hash_token(token);
    let session = state.auth.find_auth_session(&token_hash).await?;
    Ok(session.map(|(user, expires_at)| AuthUser {
        user,
        token_hash,
        expires_at,
    }))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await?.ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await.map(OptionalAuthUser)
    }
}
