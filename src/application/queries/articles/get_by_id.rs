use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
    pub include_drafts: bool,
}

impl ArticleQueryService {
    /// An unpublished article is reported as missing on the public path,
    /// matching the listing's visibility rule.
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found(format!("article {}", query.id)))?;

        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|record| query.include_drafts || record.article.published)
            .ok_or_else(|| ApplicationError::not_found(format!("article {id}")))?;

        Ok(record.into())
    }
}
