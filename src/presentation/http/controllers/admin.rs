// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        articles::{
            CreateArticleCommand, DeleteArticleCommand, SetPublishStateCommand,
            UpdateArticleCommand,
        },
        users::{LoginUserCommand, LogoutCommand},
    },
    dto::{ArticleDto, SessionTokenDto, UserDto},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminSession;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: SessionTokenDto,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub publish: bool,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(LoginUserCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    AdminSession(user): AdminSession,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .logout(LogoutCommand {
            token: user.session_token,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "logged out" })))
}

/// Management-surface landing route; its only job is to prove the
/// session is valid and say who is logged in.
pub async fn home(AdminSession(user): AdminSession) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "username": user.username.as_str(),
        "role": user.role,
    }))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    AdminSession(_user): AdminSession,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            include_drafts: true,
            search: params.q,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    AdminSession(_user): AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery {
            id,
            include_drafts: true,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    AdminSession(user): AdminSession,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .create_article(
            &user,
            CreateArticleCommand {
                title: payload.title,
                content: payload.content,
                publish: payload.publish,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    AdminSession(_user): AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: payload.title,
            content: payload.content,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    AdminSession(_user): AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .set_publish_state(SetPublishStateCommand {
            id,
            publish: payload.publish,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    AdminSession(_user): AdminSession,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
