// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::ArticleDto,
    error::ApplicationError,
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::PathRejection},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            include_drafts: false,
            search: params.q,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<ArticleDto>> {
    // A malformed id cannot name an article; report it like any other miss.
    let Path(id) = id.map_err(|_| {
        HttpError::from_error(ApplicationError::not_found("article not found"))
    })?;

    state
        .services
        .article_queries
        .get_article(GetArticleQuery {
            id,
            include_drafts: false,
        })
        .await
        .into_http()
        .map(Json)
}
