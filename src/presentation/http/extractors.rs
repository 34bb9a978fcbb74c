// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Extracts the admin-session owner from a bearer token. Rejects with
/// 401 when the token is absent, unknown, or expired, and with 403 when
/// the session's user is not an admin.
#[derive(Debug, Clone)]
pub struct AdminSession(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let user = app_state
            .services
            .authenticate_session(header.token())
            .await
            .map_err(HttpError::from_error)?;

        if !user.is_admin() {
            return Err(HttpError::from_error(ApplicationError::Forbidden(
                "administrative privileges are required".into(),
            )));
        }

        Ok(Self(user))
    }
}
