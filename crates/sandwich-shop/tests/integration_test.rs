use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use resource_actor::FrameworkError;
use sandwich_shop::api::create_app;
use sandwich_shop::config::Config;
use sandwich_shop::lifecycle::{LifecycleError, ShopSystem};
use sandwich_shop::storage;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Full system over a private in-memory database.
async fn start_shop() -> (Router, ShopSystem) {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        ..Config::default()
    };
    let system = ShopSystem::from_config(&config).await.unwrap();
    (create_app(&system), system)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn count(app: &Router, resource: &str) -> usize {
    let (status, body) = send(app, Method::GET, &format!("/{resource}/"), None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().len()
}

#[tokio::test]
async fn test_order_lifecycle_over_http() {
    let (app, _system) = start_shop().await;

    // 1. Create
    let (status, created) = send(
        &app,
        Method::POST,
        "/orders/",
        Some(json!({"customer_name": "Ada", "description": "2 x BLT"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["customer_name"], "Ada");
    assert!(created["order_date"].is_string());

    // 2. Read back the same record
    let (status, fetched) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // 3. Update
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/orders/1",
        Some(json!({"customer_name": "Grace", "description": "1 x Club"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["customer_name"], "Grace");
    assert_eq!(updated["description"], "1 x Club");
    assert_eq!(updated["order_date"], created["order_date"]);

    // 4. Delete returns the record as it was
    let (status, deleted) = send(&app, Method::DELETE, "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, updated);

    // 5. Gone
    let (status, body) = send(&app, Method::GET, "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Order not found"}));
}

#[tokio::test]
async fn test_every_resource_reports_missing_ids() {
    let (app, _system) = start_shop().await;

    let resources = [
        ("orders", "Order"),
        ("sandwiches", "Sandwich"),
        ("resources", "Resource"),
        ("recipes", "Recipe"),
        ("order_details", "OrderDetail"),
    ];

    for (path, entity) in resources {
        let expected = json!({ "detail": format!("{entity} not found") });

        let (status, body) = send(&app, Method::GET, &format!("/{path}/999"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET /{path}/999");
        assert_eq!(body, expected);

        let (status, body) =
            send(&app, Method::PUT, &format!("/{path}/999"), Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT /{path}/999");
        assert_eq!(body, expected);

        let (status, body) = send(&app, Method::DELETE, &format!("/{path}/999"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE /{path}/999");
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn test_list_grows_and_shrinks_by_one() {
    let (app, _system) = start_shop().await;
    assert_eq!(count(&app, "sandwiches").await, 0);

    let (status, blt) = send(
        &app,
        Method::POST,
        "/sandwiches",
        Some(json!({"sandwich_name": "BLT", "price": 6.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&app, "sandwiches").await, 1);

    // Both collection paths serve the same list.
    let (status, listed) = send(&app, Method::GET, "/sandwiches", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([blt]));

    let id = blt["id"].as_i64().unwrap();
    let (status, _) = send(&app, Method::DELETE, &format!("/sandwiches/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&app, "sandwiches").await, 0);
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() {
    let (app, _system) = start_shop().await;

    let (_, bread) = send(
        &app,
        Method::POST,
        "/resources/",
        Some(json!({"item": "Bread", "amount": 40})),
    )
    .await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/resources/{}", bread["id"]),
        Some(json!({"amount": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": bread["id"], "item": "Bread", "amount": 12}));
}

#[tokio::test]
async fn test_rejected_mutations_change_nothing() {
    let (app, _system) = start_shop().await;

    let (_, club) = send(
        &app,
        Method::POST,
        "/sandwiches/",
        Some(json!({"sandwich_name": "Club", "price": 8.0})),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/sandwiches/42",
        Some(json!({"sandwich_name": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/sandwiches/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, Method::GET, "/sandwiches/", None).await;
    assert_eq!(all, json!([club]));
}

#[tokio::test]
async fn test_recipes_and_order_details_link_existing_records() {
    let (app, _system) = start_shop().await;

    let (_, sandwich) = send(
        &app,
        Method::POST,
        "/sandwiches/",
        Some(json!({"sandwich_name": "Ham & Cheese", "price": 5.0})),
    )
    .await;
    let (_, ham) = send(
        &app,
        Method::POST,
        "/resources/",
        Some(json!({"item": "Ham", "amount": 10})),
    )
    .await;
    let (_, order) = send(
        &app,
        Method::POST,
        "/orders/",
        Some(json!({"customer_name": "Linus", "description": "lunch"})),
    )
    .await;

    let (status, recipe) = send(
        &app,
        Method::POST,
        "/recipes/",
        Some(json!({"sandwich_id": sandwich["id"], "resource_id": ham["id"], "amount": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recipe["sandwich_id"], sandwich["id"]);
    assert_eq!(recipe["resource_id"], ham["id"]);

    let (status, detail) = send(
        &app,
        Method::POST,
        "/order_details/",
        Some(json!({"order_id": order["id"], "sandwich_id": sandwich["id"], "amount": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["amount"], 3);

    let (status, fetched) = send(
        &app,
        Method::GET,
        &format!("/order_details/{}", detail["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, detail);
}

#[tokio::test]
async fn test_malformed_requests_are_unprocessable() {
    let (app, _system) = start_shop().await;

    // Missing field
    let (status, body) = send(
        &app,
        Method::POST,
        "/orders/",
        Some(json!({"customer_name": "Ada"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    // Wrong field type
    let (status, _) = send(
        &app,
        Method::POST,
        "/sandwiches/",
        Some(json!({"sandwich_name": "BLT", "price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Non-integer path id
    let (status, _) = send(&app, Method::GET, "/orders/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Not JSON at all
    let request = Request::builder()
        .method(Method::POST)
        .uri("/resources/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(count(&app, "orders").await, 0);
    assert_eq!(count(&app, "sandwiches").await, 0);
    assert_eq!(count(&app, "resources").await, 0);
}

#[tokio::test]
async fn test_cors_allows_any_origin_with_credentials() {
    let (app, _system) = start_shop().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/orders/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_shutdown_joins_every_actor() {
    let (app, system) = start_shop().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/sandwiches/",
        Some(json!({"sandwich_name": "BLT", "price": 6.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The router holds client clones; it has to go first.
    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_start_fails_when_tables_are_missing() {
    // Connected, but the schema was never created.
    let pool = storage::connect("sqlite::memory:", 1).await.unwrap();

    let result = ShopSystem::start(pool, 8).await;
    assert!(matches!(
        result,
        Err(LifecycleError::Actor(FrameworkError::Storage(_)))
    ));
}

#[tokio::test]
async fn test_start_succeeds_once_schema_exists() {
    let pool = storage::connect("sqlite::memory:", 1).await.unwrap();
    storage::ensure_schema(&pool).await.unwrap();

    let system = ShopSystem::start(pool, 8).await.unwrap();
    let sandwiches = system.sandwich_client.list().await.unwrap();
    assert!(sandwiches.is_empty());
    system.shutdown().await.unwrap();
}
