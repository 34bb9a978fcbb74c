// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{security::PasswordHasher, session::SessionStore, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    user_repo: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        session_ttl: Duration,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&sessions),
            Arc::clone(&clock),
            session_ttl,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            user_commands,
            article_commands,
            article_queries,
            user_repo,
            sessions,
            clock,
        }
    }

    /// Resolve a bearer session token to its owning user. Expired tokens
    /// are dropped from the store on sight; callers get a flat
    /// "unauthorized" either way so tokens cannot be probed.
    pub async fn authenticate_session(
        &self,
        token: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let record = self
            .sessions
            .get(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired session"))?;

        if record.expires_at <= self.clock.now() {
            self.sessions.remove(token).await?;
            return Err(ApplicationError::unauthorized("invalid or expired session"));
        }

        let user = self
            .user_repo
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired session"))?;

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username,
            role: user.role,
            session_token: token.to_string(),
        })
    }
}
