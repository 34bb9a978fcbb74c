use crate::domain::article::entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
use crate::domain::article::specifications::ArticleFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>>;
    /// List in insertion (primary-key) order, applying the filter's
    /// publication and substring predicates.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleWithAuthor>>;
}
