use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod over a fresh in-memory store, on an ephemeral port.
        let app = productos_api::app::build_in_memory_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/productos{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create(client: &reqwest::Client, srv: &TestServer, body: Value) -> reqwest::Response {
    client.post(srv.url("")).json(&body).send().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_store_lists_nothing_and_counts_zero() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));

    let res = client.get(srv.url("/count")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!(0));
}

#[tokio::test]
async fn create_then_get_returns_same_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create(&client, &srv, json!({"name": "Widget", "price": 9.99})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created, json!({"id": 1, "name": "Widget", "price": 9.99}));

    let res = client.get(srv.url("/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create(&client, &srv, json!({"id": 42, "name": "Widget", "price": 1.0})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], json!(1));

    let res = client.get(srv.url("/42")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejected_by_store_is_400_with_empty_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create(&client, &srv, json!({"price": 1.0})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().is_empty());

    let res = create(&client, &srv, json!({"name": "   ", "price": 1.0})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(srv.url("/count")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!(0));
}

#[tokio::test]
async fn update_overwrites_name_and_price_but_not_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &srv, json!({"name": "Widget", "price": 9.99})).await;

    let res = client
        .put(srv.url("/1"))
        .json(&json!({"id": 7, "name": "Widget2", "price": 5.00}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"id": 1, "name": "Widget2", "price": 5.0}));

    let res = client.get(srv.url("/1")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], json!("Widget2"));

    let res = client.get(srv.url("/7")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_is_404_with_empty_body() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/999"))
        .json(&json!({"name": "Widget2", "price": 5.00}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_save_failure_is_500() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &srv, json!({"name": "Widget", "price": 9.99})).await;

    let res = client
        .put(srv.url("/1"))
        .json(&json!({"price": 5.00}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!("store_error"));
}

#[tokio::test]
async fn delete_existing_then_get_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &srv, json!({"name": "Widget", "price": 9.99})).await;

    let res = client.delete(srv.url("/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.text().await.unwrap().is_empty());

    let res = client.get(srv.url("/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_is_always_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let res = client.delete(srv.url("/123")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn count_follows_creates_and_deletes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (name, price) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
        create(&client, &srv, json!({"name": name, "price": price})).await;
    }
    client.delete(srv.url("/2")).send().await.unwrap();

    let listed: Vec<Value> = client.get(srv.url("")).send().await.unwrap().json().await.unwrap();
    let count: u64 = client
        .get(srv.url("/count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(listed.len() as u64, count);
    let ids: Vec<i64> = listed.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn non_integer_id_is_a_client_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_an_empty_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url(""))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn wrong_typed_field_on_create_is_an_empty_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create(&client, &srv, json!({"name": "W", "price": "abc"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().is_empty());

    let count: u64 = client
        .get(srv.url("/count"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn wrong_typed_field_on_update_is_an_empty_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &srv, json!({"name": "Widget", "price": 9.99})).await;

    let res = client
        .put(srv.url("/1"))
        .json(&json!({"name": "W", "price": "abc"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().is_empty());

    let stored: Value = client.get(srv.url("/1")).send().await.unwrap().json().await.unwrap();
    assert_eq!(stored, json!({"id": 1, "name": "Widget", "price": 9.99}));
}
