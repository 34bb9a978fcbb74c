use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        if command.title.is_none() && command.content.is_none() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(ArticleContent::new(content)?);
        }

        let updated = self.write_repo.update(update).await?;
        self.dto_with_author(updated).await
    }
}
