// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use publish::SetPublishStateCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
