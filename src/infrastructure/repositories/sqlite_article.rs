use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleUpdate, ArticleWithAuthor, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::map_sqlx;

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    is_published: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            published: row.is_published != 0,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    id: i64,
    title: String,
    content: String,
    is_published: i64,
    author_id: i64,
    author_username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleWithAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        Ok(ArticleWithAuthor {
            article: Article {
                id: ArticleId::new(row.id)?,
                title: ArticleTitle::new(row.title)?,
                content: ArticleContent::new(row.content)?,
                published: row.is_published != 0,
                author_id: UserId::new(row.author_id)?,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author_username: Username::new(row.author_username)?,
        })
    }
}

const WITH_AUTHOR_SELECT: &str = "SELECT a.id, a.title, a.content, a.is_published, a.author_id, \
     u.username AS author_username, a.created_at, a.updated_at \
     FROM articles a JOIN users u ON u.id = a.author_id";

/// Search terms are literal substrings; `%`, `_`, and the escape
/// character itself must not act as LIKE wildcards.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            published,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, is_published, author_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, title, content, is_published, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(i64::from(published))
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            published,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET \
                 title = COALESCE(?, title), \
                 content = COALESCE(?, content), \
                 is_published = COALESCE(?, is_published), \
                 updated_at = ? \
             WHERE id = ? \
             RETURNING id, title, content, is_published, author_id, created_at, updated_at",
        )
        .bind(title.as_ref().map(ArticleTitle::as_str))
        .bind(content.as_ref().map(ArticleContent::as_str))
        .bind(published.map(i64::from))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("article {id}")))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let sql = format!("{WITH_AUTHOR_SELECT} WHERE a.id = ?");
        let row = sqlx::query_as::<_, ArticleWithAuthorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleWithAuthor::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleWithAuthor>> {
        let search_pattern = filter.search().map(like_pattern);

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(WITH_AUTHOR_SELECT);
        let mut has_where = false;

        if filter.published_only {
            builder.push(" WHERE a.is_published = 1");
            has_where = true;
        }

        if let Some(pattern) = search_pattern.as_deref() {
            builder.push(if has_where { " AND (" } else { " WHERE (" });
            // SQLite LIKE is case-insensitive for ASCII, which is the
            // contract the search endpoint promises.
            builder.push("a.title LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\' OR a.content LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\')");
        }

        builder.push(" ORDER BY a.id ASC");

        let rows = builder
            .build_query_as::<ArticleWithAuthorRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleWithAuthor::try_from)
            .collect()
    }
}
