use company_api::api::routes::create_router;
use company_api::config::AppConfig;
use company_api::seed::load_seed_data;
use company_api::store::{CompanyStore, SqliteStore};
use company_api::{open_store, serve_app, Company, CompanyResponse, Response};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(&format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

/// Serve the router over a store on an ephemeral port
async fn spawn_server(store: SqliteStore) -> TestClient {
    let app = create_router().with_state(Arc::new(store));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve_app(listener, app).await.unwrap();
    });

    TestClient::new(format!("http://{}", address))
}

async fn seeded_server() -> TestClient {
    let store = SqliteStore::in_memory().await.unwrap();
    store.migrate().await.unwrap();
    load_seed_data(&store).await.unwrap();
    spawn_server(store).await
}

fn seed_projection() -> Value {
    json!([{
        "id": 1,
        "name": "JetBrains",
        "employees": [{ "id": 1, "name": "Khalid Abuhakmeh" }]
    }])
}

#[tokio::test]
async fn test_health_check() {
    let client = seeded_server().await;

    let response = client.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_oops_fails_on_cycle() {
    let client = seeded_server().await;

    let response = client.get("/oops").await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("object cycle was detected"), "{}", error);
    assert!(error.contains("$[0].employees[0].company"), "{}", error);
}

#[tokio::test]
async fn test_oops_succeeds_without_employees() {
    let store = SqliteStore::in_memory().await.unwrap();
    store.migrate().await.unwrap();
    store
        .insert_company_if_missing(Company::new(1, "JetBrains"))
        .await
        .unwrap();
    let client = spawn_server(store).await;

    let response = client.get("/oops").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([{ "id": 1, "name": "JetBrains", "employees": [] }]));
}

#[tokio::test]
async fn test_projection_anon() {
    let client = seeded_server().await;

    let response = client.get("/projection-anon").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, seed_projection());
}

#[tokio::test]
async fn test_projection_anon_wrapper() {
    let client = seeded_server().await;

    let response = client.get("/projection-anon-wrapper").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "results": seed_projection() }));
}

#[tokio::test]
async fn test_projection_type_wrapper() {
    let client = seeded_server().await;

    let response = client.get("/projection-type-wrapper").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "results": seed_projection() }));

    let typed: Response<CompanyResponse> = serde_json::from_value(body).unwrap();
    assert_eq!(typed.results.len(), 1);
    assert_eq!(typed.results[0].name, "JetBrains");
    assert_eq!(typed.results[0].employees[0].id, 1);
    assert_eq!(typed.results[0].employees[0].name, "Khalid Abuhakmeh");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let client = seeded_server().await;

    let response = client.get("/companies").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_configured_in_memory_store_serves_concurrent_requests() {
    let mut config = AppConfig::default();
    config.database.connection_string = Some("sqlite::memory:".to_string());
    config.database.max_connections = Some(5);

    let store = open_store(&config).await.unwrap();
    let client = spawn_server(store).await;

    let (a, b, c, d) = tokio::join!(
        client.get("/projection-anon"),
        client.get("/projection-anon-wrapper"),
        client.get("/projection-type-wrapper"),
        client.get("/projection-anon"),
    );

    for response in [a, b, c, d] {
        let response = response.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        let companies = body.get("results").unwrap_or(&body).clone();
        assert_eq!(companies, seed_projection());
    }
}
