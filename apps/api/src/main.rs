mod articles;
mod auth;
mod config;
mod db;
mod errors;
mod fact_check;
mod llm_client;
mod models;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::mailer::{LogMailer, Mailer, SmtpMailer};
use crate::auth::store::PgAuthStore;
use crate::config::Config;
use crate::db::create_pool;
use crate::fact_check::analyzer::ClaimAnalyzer;
use crate::fact_check::generator::{ClaimGenerator, LlmGenerator};
use crate::fact_check::session::SessionManager;
use crate::fact_check::store::PgFactCheckStore;
use crate::llm_client::LlmClient;
use crate::report::service::ReportService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TruthLens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client; without a key every answer comes from templates
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(
                key.clone(),
                config.llm_api_url.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set, running in demo mode with template analyses");
            None
        }
    };

    let remote = llm
        .clone()
        .map(|client| Arc::new(LlmGenerator::new(client)) as Arc<dyn ClaimGenerator>);
    let analyzer = Arc::new(ClaimAnalyzer::new(remote));
    let sessions = SessionManager::new(analyzer, Arc::new(PgFactCheckStore::new(db.clone())));

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            info!("Magic links will be mailed via {}:{}", smtp.host, smtp.port);
            Arc::new(SmtpMailer::new(smtp)?)
        }
        None => {
            warn!("EMAIL_SERVER_HOST not set, magic links are written to the log");
            Arc::new(LogMailer)
        }
    };

    let state = AppState {
        auth: Arc::new(PgAuthStore::new(db.clone())),
        db,
        config: config.clone(),
        sessions: Arc::new(sessions),
        reports: Arc::new(ReportService::new(llm)),
        mailer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
