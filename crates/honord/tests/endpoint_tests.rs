//! End-to-end tests for the command endpoints, driven through the router.
//!
//! Each test opens its own store in a temp dir; routers built on the same
//! dir share state through the backing store, exactly like separate
//! requests against a running daemon.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use honor_common::config::{StoreBackend, StoreConfig};
use honor_common::HonorStore;
use honord::server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

fn store_config(dir: &TempDir, backend: StoreBackend) -> StoreConfig {
    StoreConfig {
        backend,
        db_path: dir.path().join("honor.db"),
        file_path: dir.path().join("honor.json"),
        busy_timeout_ms: 500,
    }
}

fn test_router(dir: &TempDir) -> axum::Router {
    let store = HonorStore::open(&store_config(dir, StoreBackend::File)).unwrap();
    router(Arc::new(AppState::new(store)), Duration::from_secs(5))
}

fn command_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_honor_classifies_with_fallback() {
    let dir = TempDir::new().unwrap();

    // md5("worf") ends in 'd', so the fallback calls Worf dishonorable.
    let response = test_router(&dir)
        .oneshot(command_request("/honor", "text=Worf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["response_type"], "in_channel");
    assert_eq!(body["text"], "Worf is without honor.");
}

#[tokio::test]
async fn test_honor_uses_plural_verbs_for_plural_phrases() {
    let dir = TempDir::new().unwrap();

    // md5("bloodwine rituals") ends in '3': honorable, plural verb form.
    let response = test_router(&dir)
        .oneshot(command_request("/honor", "text=bloodwine+rituals"))
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["text"], "bloodwine rituals have honor.");
}

#[tokio::test]
async fn test_set_honor_overrides_fallback() {
    let dir = TempDir::new().unwrap();

    let response = test_router(&dir)
        .oneshot(command_request("/sethonor", "text=Worf:true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["response_type"], "ephemeral");
    assert_eq!(body["text"], "Worf will be remembered as honorable.");

    // Lookup is case-insensitive; display keeps the caller's casing.
    let response = test_router(&dir)
        .oneshot(command_request("/honor", "text=WORF"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["text"], "WORF has honor.");
}

#[tokio::test]
async fn test_set_honor_rejects_malformed_payload_without_mutation() {
    let dir = TempDir::new().unwrap();

    for payload in ["text=worf:maybe", "text=worf"] {
        let response = test_router(&dir)
            .oneshot(command_request("/sethonor", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {:?}", payload);
    }

    let store = HonorStore::open(&store_config(&dir, StoreBackend::File)).unwrap();
    assert_eq!(store.load().unwrap(), Default::default());
}

#[tokio::test]
async fn test_missing_text_is_a_client_error() {
    let dir = TempDir::new().unwrap();

    for path in ["/honor", "/sethonor", "/removehonor"] {
        let response = test_router(&dir)
            .oneshot(command_request(path, "token=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "path {}", path);
    }
}

#[tokio::test]
async fn test_remove_honor_round_trip() {
    let dir = TempDir::new().unwrap();

    test_router(&dir)
        .oneshot(command_request("/sethonor", "text=tribbles:false"))
        .await
        .unwrap();

    let response = test_router(&dir)
        .oneshot(command_request("/removehonor", "text=tribbles"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["response_type"], "ephemeral");
    assert_eq!(body["text"], "tribbles have been forgotten.");

    // Removing again finds nothing; still a 200 so Slack shows the text.
    let response = test_router(&dir)
        .oneshot(command_request("/removehonor", "text=tribbles"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["text"], "tribbles were not found");
}

#[tokio::test]
async fn test_slash_command_noise_fields_are_ignored() {
    let dir = TempDir::new().unwrap();

    // md5("targ") ends in '0': honorable.
    let body = "token=x&team_id=T1&channel_id=C1&text=targ";
    let response = test_router(&dir)
        .oneshot(command_request("/honor", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["text"], "targ has honor.");
}

#[tokio::test]
async fn test_endpoints_work_on_sqlite_backend() {
    let dir = TempDir::new().unwrap();
    let store = HonorStore::open(&store_config(&dir, StoreBackend::Sqlite)).unwrap();
    let app = router(Arc::new(AppState::new(store)), Duration::from_secs(5));

    let response = app
        .clone()
        .oneshot(command_request("/sethonor", "text=gagh:true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(command_request("/honor", "text=gagh"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["text"], "gagh has honor.");
}

#[tokio::test]
async fn test_health_reports_backend() {
    let dir = TempDir::new().unwrap();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = test_router(&dir).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "file");
}
