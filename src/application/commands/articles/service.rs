use std::sync::Arc;

use crate::application::dto::ArticleDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::article::{Article, ArticleReadRepository, ArticleWriteRepository};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    /// Re-read a just-written article through the read side so the DTO
    /// carries the author's username.
    pub(super) async fn dto_with_author(&self, article: Article) -> ApplicationResult<ArticleDto> {
        self.read_repo
            .find_by_id(article.id)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| {
                ApplicationError::infrastructure(format!(
                    "article {} missing after write",
                    article.id
                ))
            })
    }
}
