use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::mailer::Mailer;
use crate::auth::store::AuthStore;
use crate::config::Config;
use crate::fact_check::session::SessionManager;
use crate::report::service::ReportService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Claim analysis plus session bookkeeping.
    pub sessions: Arc<SessionManager>,
    pub reports: Arc<ReportService>,
    /// Tokens, users and bearer sessions.
    pub auth: Arc<dyn AuthStore>,
    /// Magic-link delivery. SMTP when configured, otherwise LogMailer.
    pub mailer: Arc<dyn Mailer>,
}
