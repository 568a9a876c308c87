//! End-to-end tests: the real in-memory store and query cache behind the
//! full router, with storage delays turned off.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use quilld::config::Config;

fn config() -> Config {
    let mut config = Config::default();
    config.latency.list_ms = 0;
    config.latency.get_ms = 0;
    config.latency.create_ms = 0;
    config
}

fn app() -> Router {
    quilld::build_app(&config()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let (status, _, body) = send(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, body)
}

fn form(body: &str) -> Request<Body> {
    Request::post("/create")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn should_answer_health_check() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn should_show_both_featured_sample_tales_on_landing_page() {
    let (status, body) = get(&app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Featured Tales"));
    assert!(body.contains("The Ancient Art of Wand Making"));
    assert!(body.contains("Caring for Your Hippogriff"));
    assert!(body.contains("Recent Tales"));
    assert!(body.contains("Quidditch Through the Ages"));
}

#[tokio::test]
async fn should_find_single_tale_by_search() {
    let (status, body) = get(&app(), "/posts?q=hippogriff").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 magical tale found"));
    assert!(body.contains("Caring for Your Hippogriff"));
}

#[tokio::test]
async fn should_search_excerpts_case_insensitively() {
    let (_, body) = get(&app(), "/posts?q=MAGICAL").await;
    assert!(body.contains("3 magical tales found"));
}

#[tokio::test]
async fn should_combine_search_and_category() {
    let (_, body) = get(&app(), "/posts?q=magical&category=Wizarding%20World").await;
    assert!(body.contains("1 magical tale found"));
    assert!(body.contains("A History of the Triwizard Tournament"));
}

#[tokio::test]
async fn should_show_empty_state_when_nothing_matches() {
    let (_, body) = get(&app(), "/posts?q=basilisk").await;
    assert!(body.contains("0 magical tales found"));
    assert!(body.contains("No Tales Found"));
}

#[tokio::test]
async fn should_render_seeded_post_detail() {
    let (status, body) = get(&app(), "/post?id=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Brewing the Perfect Polyjuice Potion"));
    assert!(body.contains("Back to Chronicles"));
}

#[tokio::test]
async fn should_create_post_and_redirect_to_it() {
    let app = app();
    let (status, location, _) = send(
        &app,
        form("title=The+Phoenix+Feather&content=It+burned.%0D%0A%0D%0AIt+rose.&category=Magical+Creatures"),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/post?id=7"));

    let (status, body) = get(&app, "/post?id=7").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Phoenix Feather"));
    assert!(body.contains("<p>It burned.</p>"));
    assert!(body.contains("Anonymous Wizard"));
}

#[tokio::test]
async fn should_list_new_post_after_create() {
    let app = app();
    let (_, before) = get(&app, "/posts").await;
    assert!(before.contains("6 magical tales found"));

    send(&app, form("title=Fresh+Ink&content=New.")).await;

    let (_, after) = get(&app, "/posts").await;
    assert!(after.contains("7 magical tales found"));
    assert!(after.contains("Fresh Ink"));
}

#[tokio::test]
async fn should_forget_not_found_once_post_exists() {
    let app = app();
    let (status, _) = get(&app, "/post?id=7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, form("title=Late+Arrival&content=Here.")).await;

    let (status, body) = get(&app, "/post?id=7").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Late Arrival"));
}

#[tokio::test]
async fn should_reject_form_with_blank_title() {
    let (status, location, body) = send(&app(), form("title=&content=Body")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(location.is_none());
    assert!(body.contains("Please fill in the title and content"));
}

#[tokio::test]
async fn should_return_json_404_for_missing_post() {
    let (status, body) = get(&app(), "/api/posts/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn should_honour_api_sort_and_limit() {
    let (status, body) = get(&app(), "/api/posts?sort=-created_date&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let posts: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], "1");
    assert_eq!(posts[1]["id"], "2");
}

#[tokio::test]
async fn should_create_through_api() {
    let app = app();
    let request = Request::post("/api/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"Via JSON","content":"Body"}"#))
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    let post: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(post["id"], "7");
    assert_eq!(post["reading_time"], 5);
}

#[tokio::test]
async fn should_start_empty_without_seed() {
    let mut config = config();
    config.seed.enabled = false;
    let app = quilld::build_app(&config).unwrap();
    let (_, body) = get(&app, "/").await;
    assert!(body.contains("Write the First Tale"));
}

#[tokio::test]
async fn should_render_loading_page_when_storage_is_slow() {
    let mut config = config();
    config.latency.list_ms = 200;
    config.pages.render_budget_ms = 10;
    let app = quilld::build_app(&config).unwrap();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("http-equiv=\"refresh\""));

    tokio::time::sleep(Duration::from_millis(400)).await;
    let (_, body) = get(&app, "/").await;
    assert!(body.contains("Featured Tales"));
}
