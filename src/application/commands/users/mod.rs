mod login;
mod logout;
mod register;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub use logout::LogoutCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
