use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl UserCommandService {
    /// Create an account. There is no public registration route; this is
    /// reached from startup seeding and test fixtures only.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        if command.password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser {
            username,
            password_hash,
            role: command.role,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;

        Ok(user.into())
    }
}
