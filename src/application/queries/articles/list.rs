use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleFilter,
};

pub struct ListArticlesQuery {
    pub include_drafts: bool,
    pub search: Option<String>,
}

impl ArticleQueryService {
    /// The public listing passes `include_drafts: false`; the admin
    /// surface is the only caller that sets it.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = if query.include_drafts {
            ArticleFilter::all()
        } else {
            ArticleFilter::published()
        }
        .with_search(query.search);

        let records = self.read_repo.list(&filter).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
