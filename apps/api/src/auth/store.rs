//! Storage for magic-link tokens, users and bearer sessions.
//!
//! Only SHA-256 digests of tokens are ever stored.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::user::{AuthSessionRow, User};

#[async_trait]
pub trait AuthStore: Send + Sync {
    async fn insert_verification_token(
        &self,
        email: &str,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Deletes the token and returns its expiry. Single use: a second call with
    /// the same token returns `None`.
    async fn consume_verification_token(
        &self,
        email: &str,
        token_hash: &str,
    ) -> Result<Option<DateTime<Utc>>, AppError>;

    async fn upsert_user(&self, email: &str) -> Result<User, AppError>;

    async fn create_auth_session(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Looks up a live (unexpired) bearer session.
    async fn find_auth_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<(User, DateTime<Utc>)>, AppError>;

    async fn delete_auth_session(&self, token_hash: &str) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgAuthStore
// ────────────────────────────────────────────────────────────────────────────

pub struct PgAuthStore {
    pool: PgPool,
}

impl PgAuthStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthStore for PgAuthStore {
    async fn insert_verification_token(
        &self,
        email: &str,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO verification_tokens (token_hash, email, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(token_hash)
        .bind(email)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn consume_verification_token(
        &self,
        email: &str,
        token_hash: &str,
    ) -> Result<Option<DateTime<Utc>>, AppError> {
        Ok(sqlx::query_scalar(
            "DELETE FROM verification_tokens WHERE token_hash = $1 AND email = $2 RETURNING expires_at",
        )
        .bind(token_hash)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn upsert_user(&self, email: &str) -> Result<User, AppError> {
        Ok(sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email) VALUES ($1)
            ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
            RETURNING id, email, name, created_at
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_auth_session(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO auth_sessions (token_hash, user_id, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_auth_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<(User, DateTime<Utc>)>, AppError> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT u.id, u.email, u.name, u.created_at, s.expires_at
            FROM auth_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(AuthSessionRow::into_parts))
    }

    async fn delete_auth_session(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM auth_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryAuthStore: tests and database-less runs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct AuthTables {
    /// token hash → (email, expiry)
    tokens: HashMap<String, (String, DateTime<Utc>)>,
    users: HashMap<String, User>,
    /// token hash → (user id, expiry)
    sessions: HashMap<String, (i64, DateTime<Utc>)>,
}

#[derive(Default)]
pub struct MemoryAuthStore {
    tables: RwLock<AuthTables>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthStore for MemoryAuthStore {
    async fn insert_verification_token(
        &self,
        email: &str,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.tables
            .write()
            .await
            .tokens
            .insert(token_hash.to_string(), (email.to_string(), expires_at));
        Ok(())
    }

    async fn consume_verification_token(
        &self,
        email: &str,
        token_hash: &str,
    ) -> Result<Option<DateTime<Utc>>, AppError> {
        let mut tables = self.tables.write().await;
        match tables.tokens.get(token_hash) {
            Some((owner, _)) if owner == email => {}
            _ => return Ok(None),
        }
        Ok(tables.tokens.remove(token_hash).map(|(_, expires_at)| expires_at))
    }

    async fn upsert_user(&self, email: &str) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        let next_id = tables.users.len() as i64 + 1;
        let user = tables
            .users
            .entry(email.to_string())
            .or_insert_with(|| User {
                id: next_id,
                email: email.to_string(),
                name: None,
                created_at: Utc::now(),
            });
        Ok(user.clone())
    }

    async fn create_auth_session(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.tables
            .write()
            .await
            .sessions
            .insert(token_hash.to_string(), (user_id, expires_at));
        Ok(())
    }

    async fn find_auth_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<(User, DateTime<Utc>)>, AppError> {
        let tables = self.tables.read().await;
        let Some(&(user_id, expires_at)) = tables.sessions.get(token_hash) else {
            return Ok(None);
        };
        if expires_at <= Utc::now() {
            return Ok(None);
        }
        Ok(tables
            .users
            .values()
            .find(|u| u.id == user_id)
            .map(|u| (u.clone(), expires_at)))
    }

    async fn delete_auth_session(&self, token_hash: &str) -> Result<(), AppError> {
        self.tables.write().await.sessions.remove(token_hash);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_verification_token_is_single_use() {
        let store = MemoryAuthStore::new();
        let expires = Utc::now() + Duration::minutes(5);
        store
            .insert_verification_token("a@example.com", "h1", expires)
            .await
            .unwrap();

        // Wrong email leaves the token in place.
        assert!(store
            .consume_verification_token("b@example.com", "h1")
            .await
            .unwrap()
            .is_none());
        assert_eq!(
            store
                .consume_verification_token("a@example.com", "h1")
                .await
                .unwrap(),
            Some(expires)
        );
        assert!(store
            .consume_verification_token("a@example.com", "h1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_upsert_user_is_stable() {
        let store = MemoryAuthStore::new();
        let first = store.upsert_user("a@example.com").await.unwrap();
        let again = store.upsert_user("a@example.com").await.unwrap();
        let other = store.upsert_user("b@example.com").await.unwrap();
        assert_eq!(first, again);
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn test_expired_and_deleted_sessions_are_not_found() {
        let store = MemoryAuthStore::new();
        let user = store.upsert_user("a@example.com").await.unwrap();
        store
            .create_auth_session(user.id, "live", Utc::now() + Duration::days(1))
            .await
            .unwrap();
        store
            .create_auth_session(user.id, "stale", Utc::now() - Duration::seconds(1))
            .await
            .unwrap();

        let (found, _) = store.find_auth_session("live").await.unwrap().unwrap();
        assert_eq!(found, user);
        assert!(store.find_auth_session("stale").await.unwrap().is_none());

        store.delete_auth_session("live").await.unwrap();
        assert!(store.find_auth_session("live").await.unwrap().is_none());
    }
}
