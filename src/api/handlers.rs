//! Menu, order and schema handlers.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use schemars::{schema_for, Schema};
use tracing::{info, instrument};

use super::dto::{CreatedResponse, MenuItemResponse, MessageResponse, OrderCreatedResponse};
use super::error::ApiErrorResponse;
use super::AppState;
use crate::actor_framework::{Document, StoredDocument};
use crate::domain::{Order, OrderRequest, Pizza, Product, User};

/// `GET /`
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Pizza API is running".to_string(),
    })
}

/// `GET /api/menu`: the whole menu, unpaginated, in insertion order.
#[instrument(skip(state))]
pub async fn get_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItemResponse>>, ApiErrorResponse> {
    let menu = state.menu.list_menu().await?;
    Ok(Json(menu.into_iter().map(MenuItemResponse::from).collect()))
}

/// `POST /api/menu`
#[instrument(skip(state, pizza), fields(pizza_name = %pizza.name))]
pub async fn add_pizza(
    State(state): State<AppState>,
    Json(pizza): Json<Pizza>,
) -> Result<Json<CreatedResponse>, ApiErrorResponse> {
    let id = state.menu.add_pizza(pizza).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// `POST /api/orders`
#[instrument(skip(state, request))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderCreatedResponse>, ApiErrorResponse> {
    let placed = state.orders.create_order(request).await?;
    info!(order_id = %placed.id, total = placed.total, "Order placed");
    Ok(Json(placed.into()))
}

/// `GET /api/orders`: every order with its id and timestamps.
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredDocument<Order>>>, ApiErrorResponse> {
    Ok(Json(state.orders.list_orders().await?))
}

/// `GET /schema`: JSON Schema of every collection, keyed by collection name.
pub async fn get_schema() -> Json<BTreeMap<&'static str, Schema>> {
    Json(BTreeMap::from([
        (Pizza::COLLECTION, schema_for!(Pizza)),
        (Order::COLLECTION, schema_for!(Order)),
        (User::COLLECTION, schema_for!(User)),
        (Product::COLLECTION, schema_for!(Product)),
    ]))
}
