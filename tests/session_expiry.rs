// tests/session_expiry.rs
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use newsroom::application::ports::session::SessionStore as _;
use newsroom::domain::user::Role;
use std::sync::Arc;

mod support;

#[tokio::test]
async fn expired_session_is_rejected_and_forgotten() {
    let clock = Arc::new(support::ManualClock::new(Utc::now()));
    let app = support::spawn_app_with_clock(clock.clone()).await;
    support::seed_user(&app, "admin", "adminpass", Role::Admin).await;

    let token = support::login(&app, "admin", "adminpass").await;

    // Still valid just before the one-hour TTL.
    clock.advance(Duration::minutes(59));
    let resp = support::get_auth(&app, "/admin/", &token).await;
    assert_eq!(resp.status(), StatusCode::OK);

    clock.advance(Duration::minutes(2));
    let resp = support::get_auth(&app, "/admin/", &token).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // And it stays dead even if the clock were to rewind.
    clock.advance(Duration::minutes(-30));
    let resp = support::get_auth(&app, "/admin/", &token).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn abandoned_sessions_are_swept_on_the_next_login() {
    let clock = Arc::new(support::ManualClock::new(Utc::now()));
    let app = support::spawn_app_with_clock(clock.clone()).await;
    support::seed_user(&app, "admin", "adminpass", Role::Admin).await;

    // The token expires but is never presented again.
    let abandoned = support::login(&app, "admin", "adminpass").await;
    clock.advance(Duration::hours(2));

    let fresh = support::login(&app, "admin", "adminpass").await;

    assert!(app.sessions.get(&abandoned).await.unwrap().is_none());
    assert!(app.sessions.get(&fresh).await.unwrap().is_some());
}
