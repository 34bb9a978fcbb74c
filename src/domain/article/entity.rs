// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.updated_at = now;
    }

    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        content: ArticleContent,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.content = content;
        self.updated_at = now;
    }
}

/// An article joined with its author's username, as read back for
/// listing and detail pages.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author_username: Username,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            published: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: ArticleContent::new("content").unwrap(),
            published: false,
            author_id: UserId::new(1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn publish_sets_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.publish(now);
        assert!(article.published);
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn unpublish_sets_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.publish(now);
        let later = now + chrono::Duration::seconds(10);
        article.unpublish(later);
        assert!(!article.published);
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn set_content_updates_fields() {
        let mut article = sample_article();
        let now = Utc::now();
        let title = ArticleTitle::new("new title").unwrap();
        let content = ArticleContent::new("new content").unwrap();
        article.set_content(title.clone(), content.clone(), now);
        assert_eq!(article.title.as_str(), title.as_str());
        assert_eq!(article.content.as_str(), content.as_str());
        assert_eq!(article.updated_at, now);
    }
}
