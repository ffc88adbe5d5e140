use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use sponow::{
    api,
    config::Credential,
    server::{ProxyState, proxy_router},
};
use tower::ServiceExt;

// Helper function to build a proxy app with a dummy credential; none of the
// routes exercised here reach the network.
fn test_app() -> Router {
    let credential = Credential {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "refresh".to_string(),
    };
    proxy_router(Arc::new(ProxyState { credential }))
}

async fn request_status(method: Method, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    response.status()
}

#[tokio::test]
async fn test_non_get_methods_are_rejected() {
    // the proxy surface is read-only; everything but GET gets 405
    assert_eq!(
        request_status(Method::POST, "/now-playing").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        request_status(Method::PUT, "/now-playing").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        request_status(Method::POST, "/queue").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        request_status(Method::DELETE, "/queue").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    assert_eq!(
        request_status(Method::GET, "/nope").await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_health_reports_ok() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cache_control_directive() {
    let response = api::with_cache_control(Json(json!({ "isPlaying": false })));

    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("s-maxage=1, stale-while-revalidate")
    );
}
