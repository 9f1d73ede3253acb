use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A bearer session joined with its user.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSessionRow {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSessionRow {
    pub fn into_parts(self) -> (User, DateTime<Utc>) {
        (
            User {
                id: self.id,
                email: self.email,
                name: self.name,
                created_at: self.created_at,
            },
            self.expires_at,
        )
    }
}
