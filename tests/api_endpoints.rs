//! Router-level tests for every public endpoint.

mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};

use common::{add_pizza, create_test_app, create_test_app_with, get, post};
use pizza_orders::api::ConnectionSettings;

fn order_body(items: Value) -> Value {
    json!({
        "customer_name": "Ada",
        "phone": "555-0100",
        "address": "1 Main St",
        "items": items,
    })
}

// =============================================================================
// GET /
// =============================================================================

#[tokio::test]
async fn root_reports_running() {
    let app = create_test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Pizza API is running" }));
}

// =============================================================================
// /api/menu
// =============================================================================

#[tokio::test]
async fn empty_menu_is_an_empty_list() {
    let app = create_test_app();
    let (status, body) = get(&app, "/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_pizza_appears_in_menu_with_all_fields() {
    let app = create_test_app();
    let id = add_pizza(
        &app,
        json!({
            "name": "Diavola",
            "description": "Salami and chilli",
            "price": 11.0,
            "image": "https://example.com/diavola.png",
            "vegetarian": false,
            "spicy": true
        }),
    )
    .await;

    let (status, body) = get(&app, "/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": id,
            "name": "Diavola",
            "description": "Salami and chilli",
            "price": 11.0,
            "image": "https://example.com/diavola.png",
            "vegetarian": false,
            "spicy": true
        }])
    );
}

#[tokio::test]
async fn menu_defaults_optional_fields() {
    let app = create_test_app();
    add_pizza(&app, json!({ "name": "Margherita", "price": 9.5 })).await;

    let (_, body) = get(&app, "/api/menu").await;
    assert_eq!(body[0]["description"], Value::Null);
    assert_eq!(body[0]["vegetarian"], false);
    assert_eq!(body[0]["spicy"], false);
    assert_eq!(body[0]["id"].as_str().map(str::len), Some(24));
}

#[tokio::test]
async fn negative_price_is_unprocessable() {
    let app = create_test_app();
    let (status, body) = post(&app, "/api/menu", json!({ "name": "Refund", "price": -1 })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"][0]["field"], "price");

    let (_, menu) = get(&app, "/api/menu").await;
    assert_eq!(menu, json!([]));
}

#[rstest]
#[case(json!({ "price": 9.5 }))]
#[case(json!({ "name": "Margherita" }))]
#[case(json!({ "name": "Margherita", "price": "cheap" }))]
#[tokio::test]
async fn malformed_pizza_is_rejected(#[case] body: Value) {
    let app = create_test_app();
    let (status, _) = post(&app, "/api/menu", body).await;
    assert!(status.is_client_error(), "got {status}");
}

// =============================================================================
// /api/orders
// =============================================================================

#[tokio::test]
async fn order_total_uses_menu_price() {
    let app = create_test_app();
    let id = add_pizza(&app, json!({ "name": "Margherita", "price": 9.5 })).await;

    let (status, body) = post(&app, "/api/orders", order_body(json!([{ "pizza_id": id, "quantity": 2 }]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 19.0);
    let order_id = body["id"].as_str().unwrap().to_string();

    let (status, orders) = get(&app, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    let order = &orders[0];
    assert_eq!(order["id"], order_id);
    assert_eq!(order["status"], "received");
    assert_eq!(order["total"], 19.0);
    assert_eq!(
        order["items"],
        json!([{ "pizza_id": id, "name": "Margherita", "price": 9.5, "quantity": 2 }])
    );
    assert!(order["created_at"].is_string());
}

#[rstest]
#[case(0)]
#[case(-4)]
#[tokio::test]
async fn non_positive_quantity_counts_as_one(#[case] quantity: i64) {
    let app = create_test_app();
    let id = add_pizza(&app, json!({ "name": "Margherita", "price": 9.5 })).await;

    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(json!([{ "pizza_id": id, "quantity": quantity }])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 9.5);
}

#[rstest]
#[case(json!(2.0), 19.0)]
#[case(json!(5_000_000_000_i64), 47_500_000_000.0)]
#[tokio::test]
async fn quantity_is_taken_as_requested(#[case] quantity: Value, #[case] total: f64) {
    let app = create_test_app();
    let id = add_pizza(&app, json!({ "name": "Margherita", "price": 9.5 })).await;

    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(json!([{ "pizza_id": id, "quantity": quantity }])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], total);

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders[0]["items"][0]["quantity"].as_f64(), quantity.as_f64());
}

#[rstest]
#[case("not-an-id")]
#[case("+5a1f0c2e4b0a1b2c3d4e5f6")]
#[tokio::test]
async fn invalid_pizza_id_is_bad_request_and_persists_nothing(#[case] pizza_id: &str) {
    let app = create_test_app();
    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(json!([{ "pizza_id": pizza_id, "quantity": 1 }])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], format!("Invalid pizza_id: {pizza_id}"));

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn unknown_pizza_is_not_found_and_persists_nothing() {
    let app = create_test_app();
    let missing = "65a1f0c2e4b0a1b2c3d4e5f6";

    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(json!([{ "pizza_id": missing, "quantity": 1 }])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Pizza not found: {missing}"));

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn empty_order_is_unprocessable() {
    let app = create_test_app();
    let (status, body) = post(&app, "/api/orders", order_body(json!([]))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "items");
}

#[tokio::test]
async fn order_keeps_snapshot_when_menu_grows() {
    let app = create_test_app();
    let id = add_pizza(&app, json!({ "name": "Margherita", "price": 9.5 })).await;
    post(&app, "/api/orders", order_body(json!([{ "pizza_id": id, "quantity": 1 }]))).await;

    // A second Margherita at a new price does not touch the first order
    let repriced = add_pizza(&app, json!({ "name": "Margherita", "price": 12.0 })).await;
    post(&app, "/api/orders", order_body(json!([{ "pizza_id": repriced, "quantity": 1 }]))).await;

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders[0]["total"], 9.5);
    assert_eq!(orders[0]["items"][0]["price"], 9.5);
    assert_eq!(orders[1]["total"], 12.0);
}

// =============================================================================
// GET /schema
// =============================================================================

#[tokio::test]
async fn schema_lists_every_collection() {
    let app = create_test_app();
    let (status, body) = get(&app, "/schema").await;

    assert_eq!(status, StatusCode::OK);
    for collection in ["pizza", "order", "user", "product"] {
        assert!(body[collection].is_object(), "missing schema for {collection}");
    }
    assert_eq!(body["pizza"]["title"], "Pizza");
}

// =============================================================================
// GET /test
// =============================================================================

#[tokio::test]
async fn diagnostics_report_working_store() {
    let app = create_test_app();
    add_pizza(&app, json!({ "name": "Margherita", "price": 9.5 })).await;

    let (status, body) = get(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["pizza"]));
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
}

#[tokio::test]
async fn diagnostics_report_configured_settings() {
    let app = create_test_app_with(ConnectionSettings {
        database_url_set: true,
        database_name_set: true,
    });

    let (_, body) = get(&app, "/test").await;
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
}
