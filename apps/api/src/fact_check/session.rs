//! Session Manager: multi-turn claim analysis.
//!
//! A session is an ordered, append-only list of results. Writes to one
//! session id are serialised through a per-session async mutex, so a
//! continuation always sees every result recorded before it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OwnedMutexGuard;
use tracing::info;

use crate::errors::AppError;
use crate::fact_check::analyzer::ClaimAnalyzer;
use crate::fact_check::result::{new_session_id, FactCheckRequest, FactCheckResult, FactCheckSession};
use crate::fact_check::store::FactCheckStore;

/// One async mutex per live session id. Entries are dropped once no writer
/// holds or waits on them.
#[derive(Default)]
struct SessionLocks {
    inner: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl SessionLocks {
    async fn acquire(&self, session_id: &str) -> SessionGuard<'_> {
        let lock = {
            let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            map.retain(|_, l| Arc::strong_count(l) > 1);
            map.entry(session_id.to_string()).or_default().clone()
        };
        SessionGuard {
            _guard: lock.lock_owned().await,
            locks: self,
            session_id: session_id.to_string(),
        }
    }
}

struct SessionGuard<'a> {
    _guard: OwnedMutexGuard<()>,
    locks: &'a SessionLocks,
    session_id: String,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        let mut map = self.locks.inner.lock().unwrap_or_else(|e| e.into_inner());
        // Map entry + this guard's owned Arc.
        if map
            .get(&self.session_id)
            .is_some_and(|l| Arc::strong_count(l) <= 2)
        {
            map.remove(&self.session_id);
        }
    }
}

pub struct SessionManager {
    analyzer: Arc<ClaimAnalyzer>,
    store: Arc<dyn FactCheckStore>,
    locks: SessionLocks,
}

impl SessionManager {
    pub fn new(analyzer: Arc<ClaimAnalyzer>, store: Arc<dyn FactCheckStore>) -> Self {
        Self {
            analyzer,
            store,
            locks: SessionLocks::default(),
        }
    }

    /// Analyzes a claim and appends it to its session. A missing session id
    /// starts a fresh session; an unknown one is created under that id.
    pub async fn record(&self, mut request: FactCheckRequest) -> Result<FactCheckResult, AppError> {
        let session_id = request
            .session_id
            .get_or_insert_with(new_session_id)
            .clone();
        let _guard = self.locks.acquire(&session_id).await;

        let result = self.analyzer.analyze(&request).await;
        self.store
            .append(&result, request.user_id.as_deref())
            .await?;

        info!(
            "Recorded {} in session {}: {}",
            result.id,
            session_id,
            result.verdict.as_str()
        );
        Ok(result)
    }

    /// Analyzes `claims` into one fresh session and stores them in a single
    /// write, so a failure leaves no partial session behind.
    pub async fn record_batch(
        &self,
        claims: Vec<String>,
        user_id: Option<String>,
        additional_context: Option<String>,
    ) -> Result<Vec<FactCheckResult>, AppError> {
        let session_id = new_session_id();
        let _guard = self.locks.acquire(&session_id).await;

        let mut results = Vec::with_capacity(claims.len());
        for claim in claims {
            let request = FactCheckRequest {
                claim,
                session_id: Some(session_id.clone()),
                user_id: user_id.clone(),
                additional_context: additional_context.clone(),
            };
            results.push(self.analyzer.analyze(&request).await);
        }
        self.store.append_all(&results, user_id.as_deref()).await?;

        info!("Recorded {} claims in session {}", results.len(), session_id);
        Ok(results)
    }

    /// Analyzes `additional_claim` with the session's prior claims as context
    /// and appends it. Unknown sessions are `NotFound`; nothing is stored.
    pub async fn continue_session(
        &self,
        session_id: &str,
        additional_claim: &str,
        user_id: Option<&str>,
    ) -> Result<FactCheckResult, AppError> {
        let _guard = self.locks.acquire(session_id).await;

        let session = self
            .store
            .get_session(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

        let request = FactCheckRequest {
            claim: additional_claim.to_string(),
            session_id: Some(session_id.to_string()),
            user_id: user_id.map(str::to_string),
            additional_context: Some(session.previous_context()),
        };
        let result = self.analyzer.analyze(&request).await;
        self.store.append(&result, user_id).await?;

        info!(
            "Continued session {} ({} prior claims) with {}",
            session_id,
            session.claims.len(),
            result.id
        );
        Ok(result)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Option<FactCheckSession>, AppError> {
        self.store.get_session(session_id).await
    }
}
