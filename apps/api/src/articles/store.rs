use std::collections::HashMap;

use sqlx::PgPool;
use tracing::info;

use crate::articles::validation::NewArticle;
use crate::errors::AppError;
use crate::models::article::{Article, ArticleRow, ArticleTagRow, Tag, TrendingTag};

const TRENDING_TAG_LIMIT: i64 = 10;

const ARTICLE_SELECT: &str = r#"
    SELECT a.id, a.title, a.slug, a.cover_url, a.content_md, a.read_time, a.verified_pct,
           a.author_id, u.name AS author_name, u.email AS author_email,
           a.created_at, a.updated_at
    FROM articles a
    JOIN users u ON u.id = a.author_id
"#;

/// Loads tags for a batch of articles and assembles the API shape.
async fn with_tags(pool: &PgPool, rows: Vec<ArticleRow>) -> Result<Vec<Article>, sqlx::Error> {
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let tag_rows = sqlx::query_as::<_, ArticleTagRow>(
        r#"
        SELECT at.article_id, t.id, t.name
        FROM article_tags at
        JOIN tags t ON t.id = at.tag_id
        WHERE at.article_id = ANY($1)
        ORDER BY t.name
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut tags: HashMap<i64, Vec<Tag>> = HashMap::new();
    for row in tag_rows {
        tags.entry(row.article_id).or_default().push(Tag {
            id: row.id,
            name: row.name,
        });
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let article_tags = tags.remove(&row.id).unwrap_or_default();
            Article::from_row(row, article_tags)
        })
        .collect())
}

/// Newest first.
pub async fn list_articles(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Article>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ArticleRow>(&format!(
        "{ARTICLE_SELECT} ORDER BY a.created_at DESC, a.id DESC LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    with_tags(pool, rows).await
}

pub async fn get_article_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Article>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.slug = $1"))
        .bind(slug)
        .fetch_all(pool)
        .await?;
    Ok(with_tags(pool, rows).await?.pop())
}

pub async fn get_article_by_id(pool: &PgPool, id: i64) -> Result<Option<Article>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.id = $1"))
        .bind(id)
        .fetch_all(pool)
        .await?;
    Ok(with_tags(pool, rows).await?.pop())
}

/// Inserts the article and upserts its tags in one transaction.
/// A duplicate slug is a `Conflict`.
pub async fn create_article(
    pool: &PgPool,
    author_id: i64,
    article: &NewArticle,
) -> Result<Article, AppError> {
    let mut tx = pool.begin().await?;

    let inserted: Result<i64, sqlx::Error> = sqlx::query_scalar(
        r#"
        INSERT INTO articles (title, slug, cover_url, content_md, read_time, verified_pct, author_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(&article.title)
    .bind(&article.slug)
    .bind(&article.cover_url)
    .bind(&article.content_md)
    .bind(article.read_time)
    .bind(article.verified_pct)
    .bind(author_id)
    .fetch_one(&mut *tx)
    .await;

    let article_id = match inserted {
        Ok(id) => id,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::Conflict(format!(
                "An article with slug '{}' already exists",
                article.slug
            )));
        }
        Err(e) => return Err(e.into()),
    };

    for name in &article.tags {
        let tag_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tags (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(article_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!("Created article {} ({})", article_id, article.slug);

    get_article_by_id(pool, article_id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Article {article_id} vanished after insert")))
}

/// Top tags by number of articles.
pub async fn trending_tags(pool: &PgPool) -> Result<Vec<TrendingTag>, sqlx::Error> {
    sqlx::query_as::<_, TrendingTag>(
        r#"
        SELECT t.id, t.name, COUNT(at.article_id) AS article_count
        FROM tags t
        LEFT JOIN article_tags at ON at.tag_id = t.id
        GROUP BY t.id, t.name
        ORDER BY article_count DESC, t.name
        LIMIT $1
        "#,
    )
    .bind(TRENDING_TAG_LIMIT)
    .fetch_all(pool)
    .await
}
