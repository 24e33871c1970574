use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a GET request via `oneshot` and return the raw response.
async fn get_raw(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body.to_vec())
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get_raw(app, uri).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_serves_html_page() {
    let app = maestro_docs_server::build_router();
    let (status, content_type, body) = get_raw(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let page = String::from_utf8(body).unwrap();
    assert!(page.starts_with("<!doctype html>"));
    assert!(page.contains("Maestro Startup"));
}

#[tokio::test]
async fn index_html_serves_the_same_page() {
    let root = get_raw(maestro_docs_server::build_router(), "/").await.2;
    let index = get_raw(maestro_docs_server::build_router(), "/index.html")
        .await
        .2;
    assert_eq!(root, index);
}

#[tokio::test]
async fn page_toc_links_resolve_to_ids() {
    let (_, _, body) = get_raw(maestro_docs_server::build_router(), "/").await;
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("href=\"#executive-summary\""));
    assert!(page.contains("id=\"executive-summary\""));
    assert!(page.contains("href=\"#disaster-recovery\""));
    assert!(page.contains("id=\"disaster-recovery\""));
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_guide_returns_full_document() {
    let (status, json) = get_json(maestro_docs_server::build_router(), "/api/guide").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["title"],
        "Maestro Startup — Architecture & Implementation Guide"
    );
    assert_eq!(json["sections"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn api_toc_numbering_matches_position() {
    let (status, json) = get_json(maestro_docs_server::build_router(), "/api/guide/toc").await;
    assert_eq!(status, StatusCode::OK);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0]["number"], 1);
    assert_eq!(entries[0]["anchor"], "executive-summary");
    assert_eq!(entries[19]["number"], 20);
    assert_eq!(entries[19]["anchor"], "disaster-recovery");
}

#[tokio::test]
async fn api_section_lookup_by_anchor() {
    let (status, json) = get_json(
        maestro_docs_server::build_router(),
        "/api/guide/sections/sizing-pricing",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["anchor"], "sizing-pricing");
    assert_eq!(json["title"], "Sizing & Pricing (Monthly, rough)");
    assert_eq!(json["toc_label"], "Sizing & Pricing (Monthly)");
}

#[tokio::test]
async fn api_unknown_section_is_404_with_json_error() {
    let (status, json) = get_json(
        maestro_docs_server::build_router(),
        "/api/guide/sections/not-a-section",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("not-a-section"));
}

#[tokio::test]
async fn api_malformed_anchor_is_400() {
    let (status, json) = get_json(
        maestro_docs_server::build_router(),
        "/api/guide/sections/Not%20An%20Anchor",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("invalid anchor"));
}

#[tokio::test]
async fn api_health_payload() {
    let (status, json) = get_json(maestro_docs_server::build_router(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sections"], 20);
    assert!(json["version"].as_str().is_some());
}
