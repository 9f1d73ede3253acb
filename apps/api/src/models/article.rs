use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An article row joined with its author.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub cover_url: Option<String>,
    pub content_md: String,
    pub read_time: i32,
    pub verified_pct: i32,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// `Tag` row tagged with the article it belongs to; used to batch-load tags.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleTagRow {
    pub article_id: i64,
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTag {
    pub id: i64,
    pub name: String,
    pub article_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub cover_url: Option<String>,
    pub content_md: String,
    pub read_time: i32,
    pub verified_pct: i32,
    pub author_id: i64,
    pub author: AuthorSummary,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn from_row(row: ArticleRow, tags: Vec<Tag>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            cover_url: row.cover_url,
            content_md: row.content_md,
            read_time: row.read_time,
            verified_pct: row.verified_pct,
            author_id: row.author_id,
            author: AuthorSummary {
                id: row.author_id,
                name: row.author_name,
                email: row.author_email,
            },
            tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    /// Byline used in claim context; falls back to the author's e-mail.
    pub fn byline(&self) -> &str {
        self.author.name.as_deref().unwrap_or(&self.author.email)
    }
}
