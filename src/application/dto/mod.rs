pub mod articles;
pub mod users;

pub use articles::ArticleDto;
pub use users::{AuthenticatedUser, SessionTokenDto, UserDto};
