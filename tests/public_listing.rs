// tests/public_listing.rs
use axum::http::StatusCode;
use newsroom::domain::user::Role;

mod support;

#[tokio::test]
async fn listing_returns_200_with_only_published_articles() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "News One", "Content 1", true).await;
    support::seed_article(&app, &user, "Another News", "Content 2", true).await;
    support::seed_article(&app, &user, "Hidden", "Secret", false).await;

    let resp = support::get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = support::body_json(resp).await;
    let articles = json.as_array().expect("array body");
    assert_eq!(articles.len(), 2);

    let titles: Vec<&str> = articles
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert!(!titles.contains(&"Hidden"));
}

#[tokio::test]
async fn listing_is_in_insertion_order() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "First", "a", true).await;
    support::seed_article(&app, &user, "Second", "b", true).await;

    let json = support::body_json(support::get(&app, "/").await).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn search_filter_matches_title_case_insensitively() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "News One", "Content 1", true).await;
    support::seed_article(&app, &user, "Another News", "Content 2", true).await;
    support::seed_article(&app, &user, "Hidden", "Secret", false).await;

    let resp = support::get(&app, "/?q=one").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = support::body_json(resp).await;
    let articles = json.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "News One");
}

#[tokio::test]
async fn search_filter_also_matches_content() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "Quiet Title", "contains KEYWORD here", true).await;
    support::seed_article(&app, &user, "Other", "nothing relevant", true).await;

    let json = support::body_json(support::get(&app, "/?q=keyword").await).await;
    let articles = json.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "Quiet Title");
}

#[tokio::test]
async fn search_never_exposes_unpublished_matches() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "Hidden", "Secret", false).await;

    let json = support::body_json(support::get(&app, "/?q=hidden").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn search_treats_like_wildcards_as_literal_characters() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "Amaze", "what an amazing day", true).await;
    support::seed_article(&app, &user, "Cat", "the cat sat", true).await;
    support::seed_article(&app, &user, "Sale", "everything 50% off", true).await;

    // "a%z" and "c_t" are substrings of nothing above; the % and _
    // must not act as wildcards.
    let json = support::body_json(support::get(&app, "/?q=a%25z").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let json = support::body_json(support::get(&app, "/?q=c_t").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // A literal percent sign is still searchable.
    let json = support::body_json(support::get(&app, "/?q=50%25").await).await;
    let articles = json.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], "Sale");
}

#[tokio::test]
async fn blank_search_term_is_ignored() {
    let app = support::spawn_app().await;
    let user = support::seed_user(&app, "user1", "pass", Role::Author).await;

    support::seed_article(&app, &user, "News One", "Content 1", true).await;

    let json = support::body_json(support::get(&app, "/?q=").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_store_yields_empty_list() {
    let app = support::spawn_app().await;

    let resp = support::get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = support::body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
