use super::UserCommandService;
use crate::{
    application::{
        dto::{SessionTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
        ports::session::SessionRecord,
    },
    domain::user::{User, Username},
};
use uuid::Uuid;

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: SessionTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    /// Authenticate a username/password pair and open an admin session.
    /// Unknown users and wrong passwords are indistinguishable to the
    /// caller; valid non-admin credentials are rejected without a session.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)?;
        let user = self
            .find_and_authenticate_user(username, &command.password)
            .await?;

        if !user.role.is_admin() {
            return Err(ApplicationError::forbidden(
                "administrative privileges are required",
            ));
        }

        let token = Uuid::new_v4().to_string();
        let now = self.clock.now();
        let expires_at = now
            + chrono::Duration::from_std(self.session_ttl)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        // Each login sweeps sessions that expired without being presented
        // again, so abandoned tokens do not accumulate.
        self.sessions.prune(now).await?;
        self.sessions
            .put(
                &token,
                SessionRecord {
                    user_id: user.id,
                    expires_at,
                },
            )
            .await?;

        Ok(LoginResult {
            token: SessionTokenDto { token, expires_at },
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
