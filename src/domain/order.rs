use schemars::JsonSchema;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::actor_framework::Document;

pub const ORDER_STATUS_RECEIVED: &str = "received";
pub const ORDER_STATUS_PREPARING: &str = "preparing";
pub const ORDER_STATUS_READY: &str = "ready";
pub const ORDER_STATUS_DELIVERED: &str = "delivered";

/// Status values used by the kitchen, in fulfilment order. The stored status
/// is free text and no transitions are enforced.
pub const KNOWN_ORDER_STATUSES: [&str; 4] = [
    ORDER_STATUS_RECEIVED,
    ORDER_STATUS_PREPARING,
    ORDER_STATUS_READY,
    ORDER_STATUS_DELIVERED,
];

fn default_status() -> String {
    ORDER_STATUS_RECEIVED.to_string()
}

/// A line of an order. Name and price are copied from the menu when the order
/// is placed, so later menu edits leave the order untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, JsonSchema)]
pub struct OrderItem {
    /// ID of the pizza
    pub pizza_id: String,
    /// Name snapshot at time of order
    pub name: String,
    /// Unit price at time of order
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Quantity ordered
    #[validate(range(min = 1))]
    pub quantity: u64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, JsonSchema)]
pub struct Order {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub notes: Option<String>,
    #[validate(range(min = 0.0))]
    pub total: f64,
    /// received | preparing | ready | delivered
    #[serde(default = "default_status")]
    pub status: String,
}

/// One requested line of a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub pizza_id: String,
    #[serde(deserialize_with = "whole_number")]
    pub quantity: i64,
}

/// Accepts integers and floats without a fractional part, so `2.0` reads as
/// `2`.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Integer(value) => Ok(value),
        Number::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Number::Float(value) => Err(D::Error::custom(format!("expected a whole number, got {value}"))),
    }
}

impl OrderLineRequest {
    pub fn new(pizza_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            pizza_id: pizza_id.into(),
            quantity,
        }
    }

    /// Requested quantity, raised to at least one.
    pub fn effective_quantity(&self) -> u64 {
        self.quantity.max(1).unsigned_abs()
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderLineRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Document for Order {
    const COLLECTION: &'static str = "order";
}
