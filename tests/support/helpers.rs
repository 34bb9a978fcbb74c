// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt as _;

use newsroom::application::commands::articles::CreateArticleCommand;
use newsroom::application::commands::users::RegisterUserCommand;
use newsroom::application::dto::{ArticleDto, AuthenticatedUser, UserDto};
use newsroom::application::ports::{security::PasswordHasher, session::SessionStore, time::Clock};
use newsroom::application::services::ApplicationServices;
use newsroom::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsroom::domain::user::{Role, UserId, UserRepository, Username};
use newsroom::infrastructure::database;
use newsroom::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteUserRepository,
};
use newsroom::infrastructure::security::{Argon2PasswordHasher, InMemorySessionStore};
use newsroom::infrastructure::time::SystemClock;
use newsroom::presentation::http::{routes::build_router, state::HttpState};

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub sessions: Arc<dyn SessionStore>,
}

/// Full stack against a single-connection in-memory SQLite database.
/// One connection keeps every query on the same in-memory instance.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_clock(Arc::new(SystemClock::default())).await
}

pub async fn spawn_app_with_clock(clock: Arc<dyn Clock>) -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let article_write: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        password_hasher,
        Arc::clone(&sessions),
        clock,
        Duration::from_secs(3600),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    TestApp {
        router: build_router(state),
        services,
        sessions,
    }
}

pub async fn seed_user(app: &TestApp, username: &str, password: &str, role: Role) -> UserDto {
    app.services
        .user_commands
        .register(RegisterUserCommand {
            username: username.into(),
            password: password.into(),
            role,
        })
        .await
        .expect("seed user")
}

pub async fn seed_article(
    app: &TestApp,
    author: &UserDto,
    title: &str,
    content: &str,
    published: bool,
) -> ArticleDto {
    let actor = AuthenticatedUser {
        id: UserId::new(author.id).expect("author id"),
        username: Username::new(author.username.clone()).expect("author username"),
        role: author.role,
        session_token: String::new(),
    };

    app.services
        .article_commands
        .create_article(
            &actor,
            CreateArticleCommand {
                title: title.into(),
                content: content.into(),
                publish: published,
            },
        )
        .await
        .expect("seed article")
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn get_auth(app: &TestApp, uri: &str, token: &str) -> Response<Body> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn send_json(
    app: &TestApp,
    method: &str,
    uri: &str,
    token: Option<&str>,
    payload: &Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = builder.body(Body::from(payload.to_string())).unwrap();
    app.router.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in through the HTTP surface and return the bearer token.
pub async fn login(app: &TestApp, username: &str, password: &str) -> String {
    let resp = send_json(
        app,
        "POST",
        "/admin/login",
        None,
        &json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK, "login should succeed");
    let json = body_json(resp).await;
    json["token"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}
