use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::articles::extraction::extract_claims;
use crate::articles::store;
use crate::articles::validation::{validate_article, CreateArticleRequest};
use crate::auth::extract::{AuthUser, OptionalAuthUser};
use crate::errors::AppError;
use crate::fact_check::result::FactCheckResult;
use crate::models::article::{Article, TrendingTag};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Clients send the id either as a number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl ArticleId {
    fn parse(&self) -> Option<i64> {
        match self {
            ArticleId::Number(n) => Some(*n),
            ArticleId::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeArticleRequest {
    pub article_id: Option<ArticleId>,
    #[serde(default)]
    pub specific_claims: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeArticleResponse {
    pub results: Vec<FactCheckResult>,
    pub article: Article,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_claims: Option<Vec<String>>,
}

/// GET /api/articles?limit=..&offset=..
pub async fn handle_list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Article>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0).max(0);
    let articles = store::list_articles(&state.db, limit, offset).await?;
    Ok(Json(articles))
}

/// POST /api/articles
pub async fn handle_create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<Article>), AppError> {
    let new_article = validate_article(req)?;
    let article = store::create_article(&state.db, auth.user.id, &new_article).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/articles/:slug
pub async fn handle_get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, AppError> {
    store::get_article_by_slug(&state.db, &slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Article '{slug}' not found")))
}

/// POST /api/articles/analyze
///
/// Analyses the supplied claims, or the ones extracted from the article body.
/// All results of one call share a fresh session and are stored together.
pub async fn handle_analyze_article(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(req): Json<AnalyzeArticleRequest>,
) -> Result<Json<AnalyzeArticleResponse>, AppError> {
    let article_id = req
        .article_id
        .as_ref()
        .and_then(ArticleId::parse)
        .ok_or_else(|| AppError::Validation("Article ID is required".to_string()))?;

    let article = store::get_article_by_id(&state.db, article_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article {article_id} not found")))?;

    let specific: Vec<String> = req
        .specific_claims
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    let (claims, extracted_claims) = if specific.is_empty() {
        let extracted = extract_claims(&article.content_md);
        (extracted.clone(), Some(extracted))
    } else {
        (specific, None)
    };

    let results = state
        .sessions
        .record_batch(claims, auth.email(), Some(article_context(&article)))
        .await?;

    info!("Analyzed {} claims from article {}", results.len(), article.id);
    Ok(Json(AnalyzeArticleResponse {
        results,
        article,
        extracted_claims,
    }))
}

/// GET /api/tags
pub async fn handle_trending_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrendingTag>>, AppError> {
    Ok(Json(store::trending_tags(&state.db).await?))
}

fn article_context(article: &Article) -> String {
    format!(
        "This claim is from the article: \"{}\" by {}",
        article.title,
        article.byline()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::article::AuthorSummary;
    use chrono::Utc;

    #[test]
    fn test_article_id_accepts_number_or_string() {
        let req: AnalyzeArticleRequest =
            serde_json::from_value(serde_json::json!({ "articleId": 42 })).unwrap();
        assert_eq!(req.article_id.unwrap().parse(), Some(42));

        let req: AnalyzeArticleRequest =
            serde_json::from_value(serde_json::json!({ "articleId": " 7 ", "specificClaims": ["a"] }))
                .unwrap();
        assert_eq!(req.article_id.unwrap().parse(), Some(7));
        assert_eq!(req.specific_claims, vec!["a"]);

        let req: AnalyzeArticleRequest =
            serde_json::from_value(serde_json::json!({ "articleId": "abc" })).unwrap();
        assert_eq!(req.article_id.unwrap().parse(), None);
    }

    #[test]
    fn test_article_context_names_title_and_author() {
        let now = Utc::now();
        let mut article = Article {
            id: 1,
            title: "Roads of India".to_string(),
            slug: "roads-of-india".to_string(),
            cover_url: None,
            content_md: String::new(),
            read_time: 1,
            verified_pct: 0,
            author_id: 3,
            author: AuthorSummary {
                id: 3,
                name: Some("Asha Rao".to_string()),
                email: "asha@example.com".to_string(),
            },
            tags: vec![],
            created_at: now,
            updated_at: now,
        };
        assert_eq!(
            article_context(&article),
            "This claim is from the article: \"Roads of India\" by Asha Rao"
        );

        article.author.name = None;
        assert!(article_context(&article).ends_with("by asha@example.com"));
    }
}
