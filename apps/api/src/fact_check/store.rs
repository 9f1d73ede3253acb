//! Session persistence.
//!
//! Sessions are append-only: results are inserted, never updated or deleted.
//! The PostgreSQL store writes the session upsert and the result rows in one
//! transaction; ordering within a session comes from the `seq` column.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::fact_check::result::{FactCheckResult, FactCheckSession};
use crate::models::fact_check::{FactCheckPayloadRow, FactCheckSessionRow};

/// The one session id shared by `results`, or `None` for an empty batch.
fn batch_session_id(results: &[FactCheckResult]) -> Result<Option<&str>, AppError> {
    let Some(first) = results.first() else {
        return Ok(None);
    };
    if results.iter().any(|r| r.session_id != first.session_id) {
        return Err(AppError::Internal(anyhow::anyhow!(
            "batch spans more than one session"
        )));
    }
    Ok(Some(&first.session_id))
}

#[async_trait]
pub trait FactCheckStore: Send + Sync {
    /// Appends `results` to their session in one write, creating the session
    /// if needed, and advances the session's `updated_at`. Either every result
    /// is stored or none is. All results must share one session id.
    async fn append_all(
        &self,
        results: &[FactCheckResult],
        user_id: Option<&str>,
    ) -> Result<(), AppError>;

    async fn append(&self, result: &FactCheckResult, user_id: Option<&str>) -> Result<(), AppError> {
        self.append_all(std::slice::from_ref(result), user_id).await
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<FactCheckSession>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgFactCheckStore
// ────────────────────────────────────────────────────────────────────────────

pub struct PgFactCheckStore {
    pool: PgPool,
}

impl PgFactCheckStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FactCheckStore for PgFactCheckStore {
    async fn append_all(
        &self,
        results: &[FactCheckResult],
        user_id: Option<&str>,
    ) -> Result<(), AppError> {
        let Some(session_id) = batch_session_id(results)? else {
            return Ok(());
        };
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO fact_check_sessions (id, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            ON CONFLICT (id) DO UPDATE
                SET updated_at = EXCLUDED.updated_at,
                    user_id = COALESCE(fact_check_sessions.user_id, EXCLUDED.user_id)
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        for result in results {
            sqlx::query(
                r#"
                INSERT INTO fact_checks
                    (id, session_id, claim, verdict, confidence_score, payload, user_id, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&result.id)
            .bind(&result.session_id)
            .bind(&result.claim)
            .bind(result.verdict.as_str())
            .bind(result.confidence_score as i16)
            .bind(Json(result))
            .bind(user_id)
            .bind(result.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<FactCheckSession>, AppError> {
        let Some(row) = sqlx::query_as::<_, FactCheckSessionRow>(
            "SELECT id, user_id, created_at, updated_at FROM fact_check_sessions WHERE id = $1",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let claims = sqlx::query_as::<_, FactCheckPayloadRow>(
            "SELECT payload FROM fact_checks WHERE session_id = $1 ORDER BY seq",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| r.payload.0)
        .collect();

        Ok(Some(FactCheckSession {
            id: row.id,
            user_id: row.user_id,
            claims,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryFactCheckStore: tests and database-less runs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryFactCheckStore {
    sessions: RwLock<HashMap<String, FactCheckSession>>,
}

impl MemoryFactCheckStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FactCheckStore for MemoryFactCheckStore {
    async fn append_all(
        &self,
        results: &[FactCheckResult],
        user_id: Option<&str>,
    ) -> Result<(), AppError> {
        let Some(session_id) = batch_session_id(results)? else {
            return Ok(());
        };
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| FactCheckSession {
                id: session_id.to_string(),
                user_id: None,
                claims: Vec::new(),
                created_at: now,
                updated_at: now,
            });
        if session.user_id.is_none() {
            session.user_id = user_id.map(str::to_string);
        }
        session.claims.extend_from_slice(results);
        session.updated_at = now;
        Ok(())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<FactCheckSession>, AppError> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact_check::analyzer::ClaimAnalyzer;
    use crate::fact_check::result::FactCheckRequest;

    async fn result_in(session_id: &str, claim: &str) -> FactCheckResult {
        ClaimAnalyzer::template_only()
            .analyze(&FactCheckRequest {
                claim: claim.to_string(),
                session_id: Some(session_id.to_string()),
                ..Default::default()
            })
            .await
    }

    #[tokio::test]
    async fn test_memory_store_appends_in_order() {
        let store = MemoryFactCheckStore::new();
        store.append(&result_in("s1", "first").await, None).await.unwrap();
        store
            .append(&result_in("s1", "second").await, Some("a@b.com"))
            .await
            .unwrap();

        let session = store.get_session("s1").await.unwrap().unwrap();
        assert_eq!(session.claims.len(), 2);
        assert_eq!(session.claims[0].claim, "first");
        assert_eq!(session.claims[1].claim, "second");
        assert_eq!(session.user_id.as_deref(), Some("a@b.com"));
        assert!(session.updated_at >= session.created_at);
    }

    #[tokio::test]
    async fn test_memory_store_unknown_session() {
        let store = MemoryFactCheckStore::new();
        assert!(store.get_session("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_all_writes_batch_in_order() {
        let store = MemoryFactCheckStore::new();
        let batch = vec![
            result_in("s2", "one").await,
            result_in("s2", "two").await,
            result_in("s2", "three").await,
        ];
        store.append_all(&batch, None).await.unwrap();

        let session = store.get_session("s2").await.unwrap().unwrap();
        let claims: Vec<&str> = session.claims.iter().map(|c| c.claim.as_str()).collect();
        assert_eq!(claims, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_append_all_rejects_mixed_sessions() {
        let store = MemoryFactCheckStore::new();
        let batch = vec![result_in("s3", "one").await, result_in("s4", "two").await];
        assert!(store.append_all(&batch, None).await.is_err());
        assert!(store.get_session("s3").await.unwrap().is_none());
        assert!(store.get_session("s4").await.unwrap().is_none());

        store.append_all(&[], None).await.unwrap();
    }
}
