use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let update = ArticleUpdate::new(id, self.clock.now()).with_published(command.publish);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, published = updated.published, "publish state changed");
        self.dto_with_author(updated).await
    }
}
