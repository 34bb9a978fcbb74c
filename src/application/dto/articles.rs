use crate::domain::article::{Article, ArticleWithAuthor};
use crate::domain::user::Username;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub author_id: i64,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_parts(article: Article, author_username: Username) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            content: article.content.into(),
            is_published: article.published,
            author_id: article.author_id.into(),
            author_username: author_username.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<ArticleWithAuthor> for ArticleDto {
    fn from(record: ArticleWithAuthor) -> Self {
        Self::from_parts(record.article, record.author_username)
    }
}
