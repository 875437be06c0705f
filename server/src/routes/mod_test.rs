use super::*;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("xevrion")
        .site_root("target/site")
        .build()
}

/// Render `uri` through the full site router.
async fn render(uri: &str) -> (StatusCode, String) {
    let response = app(test_options()).oneshot(get_request(uri)).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = api_routes().oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let request = Request::builder()
        .method("POST")
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let response = api_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let response = api_routes().oneshot(get_request("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================
// SSR pages
// =============================================================

#[tokio::test]
async fn home_renders_every_project_and_skill() {
    let (status, html) = render("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="project""#).count(), 4);
    assert_eq!(html.matches(r#"class="skill""#).count(), 12);
    let first = html.find("E-Commerce Platform").expect("first project");
    let last = html.find("Task Management Tool").expect("last project");
    assert!(first < last);
}

#[tokio::test]
async fn home_renders_toggle_placeholder_before_preference_read() {
    let (_, html) = render("/").await;
    assert_eq!(html.matches("theme-toggle--placeholder").count(), 1);
    assert!(!html.contains("theme-toggle__icon--sun"));
    assert!(!html.contains("theme-toggle__icon--moon"));
}

#[tokio::test]
async fn home_links_to_blog() {
    let (_, html) = render("/").await;
    assert!(html.contains(r#"href="/blog""#));
}

#[tokio::test]
async fn blog_renders_posts_in_authored_order() {
    let (status, html) = render("/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<article").count(), 4);
    assert_eq!(html.matches("theme-toggle--placeholder").count(), 1);

    let positions = ["Jan 10, 2025", "Jan 5, 2025", "Dec 28, 2024", "Dec 20, 2024"]
        .iter()
        .map(|date| html.find(date).expect("date should render"))
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn shell_applies_stored_appearance_before_hydration() {
    let (_, html) = render("/").await;
    let script_at = html.find("xevrion_appearance").expect("appearance script in head");
    let body_at = html.find("<body").expect("body tag");
    assert!(script_at < body_at);
}

#[tokio::test]
async fn unrendered_post_route_is_not_found() {
    let (status, html) = render("/blog/nextjs-15-guide").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found."));
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let (status, html) = render("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found."));
}

#[tokio::test]
async fn missing_asset_under_pkg_is_not_found() {
    let (status, _) = render("/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_router_keeps_health_probe() {
    let (status, _) = render("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
