use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::fact_check::result::FactCheckResult;

#[derive(Debug, Clone, FromRow)]
pub struct FactCheckSessionRow {
    pub id: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The full result is kept as JSONB; the scalar columns exist for querying.
#[derive(Debug, Clone, FromRow)]
pub struct FactCheckPayloadRow {
    pub payload: Json<FactCheckResult>,
}
