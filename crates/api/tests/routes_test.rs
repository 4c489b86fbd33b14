use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tidyslot_api::{apply_layers, build_router, config::ApiConfig, ApiState};
use tidyslot_core::models::WeekSchedule;
use tidyslot_db::mock::repositories::MockBookingStore;
use tidyslot_db::{BookingStore, MemoryBookingStore};
use tracing::Level;

fn server_with(store: Arc<dyn BookingStore>, playground: bool) -> TestServer {
    let state = Arc::new(ApiState::new(store, playground));
    TestServer::new(build_router(state)).unwrap()
}

fn memory_server() -> TestServer {
    server_with(Arc::new(MemoryBookingStore::new()), true)
}

fn test_config(cors_origins: Option<Vec<String>>) -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 3000,
        database_url: "postgres://localhost/tidyslot".to_string(),
        log_level: Level::INFO,
        cors_origins,
        request_timeout: 30,
        graphql_playground: false,
    }
}

#[tokio::test]
async fn test_health_reports_ok() {
    let server = memory_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "store": "ok" }));
}

#[tokio::test]
async fn test_health_reports_degraded_store() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_bookings()
        .returning(|| Err(eyre::eyre!("connection refused")));
    let server = server_with(Arc::new(store), true);

    let response = server.get("/health").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["status"], "degraded");
}

#[tokio::test]
async fn test_version() {
    let server = memory_server();

    let body = server.get("/version").await.json::<Value>();

    assert_eq!(body["name"], "tidyslot-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_graphql_post_fetches_week() {
    let server = memory_server();

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": "query($date: String!) { fetchWeek(date: $date) { date days { monday { eightTen openSlots } } } }",
            "variables": { "date": "2021-03-01" },
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["fetchWeek"]["date"], "2021-03-01");
    assert_eq!(body["data"]["fetchWeek"]["days"]["monday"]["eightTen"], false);
    assert_eq!(body["data"]["fetchWeek"]["days"]["monday"]["openSlots"], 5);
}

#[tokio::test]
async fn test_graphql_playground_enabled() {
    let server = memory_server();

    let response = server.get("/graphql").await;

    response.assert_status_ok();
    assert!(response.text().to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_graphql_playground_disabled() {
    let server = server_with(Arc::new(MemoryBookingStore::new()), false);

    let response = server.get("/graphql").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_week_lookup_creates_week_once() {
    let store = Arc::new(MemoryBookingStore::new());
    let server = server_with(store.clone(), true);

    let first = server.get("/api/weeks/2021-03-01").await.json::<Vec<WeekSchedule>>();
    let second = server.get("/api/weeks/2021-03-01").await.json::<Vec<WeekSchedule>>();

    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
    assert_eq!(first[0].week.date, "2021-03-01");
    assert_eq!(first[0].booked_count(), 0);
    assert_eq!(store.list_weeks(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rest_week_lookup_rejects_blank_date() {
    let server = memory_server();

    let response = server.get("/api/weeks/%20").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Anchor date must not be empty"));
}

#[test]
fn test_apply_layers_rejects_invalid_origin() {
    let app = build_router(Arc::new(ApiState::new(
        Arc::new(MemoryBookingStore::new()),
        false,
    )));

    let result = apply_layers(app, &test_config(Some(vec!["bad\norigin".to_string()])));

    assert!(result.is_err());
}

#[tokio::test]
async fn test_apply_layers_keeps_routes() {
    let app = build_router(Arc::new(ApiState::new(
        Arc::new(MemoryBookingStore::new()),
        false,
    )));
    let app = apply_layers(
        app,
        &test_config(Some(vec!["http://localhost:5173".to_string()])),
    )
    .unwrap();
    let server = TestServer::new(app).unwrap();

    server.get("/health").await.assert_status_ok();
}
