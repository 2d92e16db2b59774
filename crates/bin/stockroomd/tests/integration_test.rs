//! End-to-end smoke tests for the full stockroomd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use stockroom_adapter_http_axum::router;
use stockroom_adapter_http_axum::state::AppState;
use stockroom_adapter_storage_sqlite_sqlx::{Config, SqliteItemRepository};
use stockroom_app::services::item_service::ItemService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteItemRepository::new(db.pool().clone());
    let state = AppState::new(ItemService::new(repo));

    router::build(state, &["http://localhost:5173".to_string()])
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check and API root
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_describe_api_at_root() {
    let resp = app()
        .await
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Stockroom API");
    assert!(body["version"].is_string());
}

// ---------------------------------------------------------------------------
// Dashboard (SSR) pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_home_page() {
    let resp = app()
        .await
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Dashboard"));
    assert!(body.contains("Total Items"));
}

#[tokio::test]
async fn should_render_empty_inventory_page() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/inventory")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("0 items found"));
    assert!(body.contains("Get started by adding your first item."));
}

#[tokio::test]
async fn should_create_from_form_then_list_on_inventory_page() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/inventory")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Toner+cartridge&type=part&status=available&location=Copy+room\
                     &quantity=2&low_stock_threshold=3&notes=",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/inventory");

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/inventory?type=part")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(resp).await;
    assert!(body.contains("1 item found"));
    assert!(body.contains("Toner cartridge"));
    assert!(body.contains("Low Stock!"));
}

// ---------------------------------------------------------------------------
// API: full CRUD cycle for items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_item_crud_cycle() {
    let app = app().await;

    // Create item
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/items",
            r#"{"name":"Chromebook Charger","type":"part","quantity":2,"location":"IT Closet"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let item_id = body["id"].as_i64().unwrap();
    assert_eq!(body["low_stock_threshold"], 5);

    // Dashboard sees it as low stock
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let stats = body_json(resp).await;
    assert_eq!(stats["total_items"], 1);
    assert_eq!(stats["total_parts"], 1);
    assert_eq!(stats["low_stock_items"][0]["id"], item_id);

    // Update item
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/items/{item_id}"),
            r#"{"quantity":40}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["quantity"], 40);
    assert_eq!(body["location"], "IT Closet");

    // Locations
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/locations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_json(resp).await, serde_json::json!(["IT Closet"]));

    // Delete item
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/items/{item_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    // Verify gone
    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/items/{item_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"detail": "Item not found"})
    );
}

#[tokio::test]
async fn should_search_across_name_location_and_notes() {
    let app = app().await;
    for body in [
        r#"{"name":"HDMI cable","location":"Closet"}"#,
        r#"{"name":"Projector","location":"Auditorium","notes":"needs an hdmi adapter"}"#,
        r#"{"name":"Laptop","location":"Room 101"}"#,
    ] {
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/api/items", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/items?search=HDMI")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_reject_invalid_payload_with_detail() {
    let resp = app()
        .await
        .oneshot(json_request("POST", "/api/items", r#"{"name":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["detail"].is_string());
}
