use super::UserCommandService;
use crate::application::error::ApplicationResult;

pub struct LogoutCommand {
    pub token: String,
}

impl UserCommandService {
    pub async fn logout(&self, command: LogoutCommand) -> ApplicationResult<()> {
        self.sessions.remove(&command.token).await
    }
}
