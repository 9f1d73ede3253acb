//! Input validation for article creation.

use serde::Deserialize;

use crate::errors::AppError;

pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub content_md: String,
    pub read_time: Option<i32>,
    pub verified_pct: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A validated, normalised article ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub cover_url: Option<String>,
    pub content_md: String,
    pub read_time: i32,
    pub verified_pct: i32,
    pub tags: Vec<String>,
}

pub fn validate_article(req: CreateArticleRequest) -> Result<NewArticle, AppError> {
    let title = req.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let slug = req.slug.trim().to_string();
    if !is_valid_slug(&slug) {
        return Err(AppError::Validation(
            "Slug must be lower-case letters, digits and single hyphens".to_string(),
        ));
    }

    if req.content_md.trim().is_empty() {
        return Err(AppError::Validation("Content is required".to_string()));
    }

    let read_time = match req.read_time {
        Some(minutes) if minutes < 1 => {
            return Err(AppError::Validation(
                "Read time must be at least 1 minute".to_string(),
            ))
        }
        Some(minutes) => minutes,
        None => estimate_read_time(&req.content_md),
    };

    let mut tags: Vec<String> = Vec::new();
    for tag in req.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    Ok(NewArticle {
        title,
        slug,
        cover_url: req
            .cover_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty()),
        content_md: req.content_md,
        read_time,
        verified_pct: req.verified_pct.unwrap_or(0).clamp(0, 100),
        tags,
    })
}

/// `^[a-z0-9]+(-[a-z0-9]+)*$`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Whole minutes at `WORDS_PER_MINUTE`, never less than one.
pub fn estimate_read_time(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    (words / WORDS_PER_MINUTE).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateArticleRequest {
        CreateArticleRequest {
            title: "  Roads of India ".to_string(),
            slug: "roads-of-india-2024".to_string(),
            cover_url: Some("   ".to_string()),
            content_md: "word ".repeat(450),
            read_time: None,
            verified_pct: Some(140),
            tags: vec![
                "Infrastructure".to_string(),
                " ".to_string(),
                "Infrastructure".to_string(),
                "Policy".to_string(),
            ],
        }
    }

    #[test]
    fn test_valid_article_is_normalised() {
        let article = validate_article(request()).unwrap();
        assert_eq!(article.title, "Roads of India");
        assert_eq!(article.read_time, 2);
        assert_eq!(article.verified_pct, 100);
        assert!(article.cover_url.is_none());
        assert_eq!(article.tags, vec!["Infrastructure", "Policy"]);
    }

    #[test]
    fn test_read_time_estimate_has_floor() {
        assert_eq!(estimate_read_time("just a few words"), 1);
        assert_eq!(estimate_read_time(""), 1);
        assert_eq!(estimate_read_time(&"w ".repeat(1_000)), 5);
    }

    #[test]
    fn test_explicit_read_time() {
        let mut req = request();
        req.read_time = Some(7);
        assert_eq!(validate_article(req).unwrap().read_time, 7);

        let mut req = request();
        req.read_time = Some(0);
        assert!(matches!(validate_article(req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_slug_rules() {
        assert!(is_valid_slug("a"));
        assert!(is_valid_slug("ganga-cleanup-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Upper-Case"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut req = request();
        req.title = " ".to_string();
        assert!(matches!(validate_article(req), Err(AppError::Validation(_))));

        let mut req = request();
        req.content_md = String::new();
        assert!(matches!(validate_article(req), Err(AppError::Validation(_))));

        let mut req = request();
        req.slug = "Bad Slug".to_string();
        assert!(matches!(validate_article(req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_negative_verified_pct_clamps_to_zero() {
        let mut req = request();
        req.verified_pct = Some(-5);
        assert_eq!(validate_article(req).unwrap().verified_pct, 0);
    }
}
