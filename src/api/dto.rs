//! Response bodies.

use serde::{Deserialize, Serialize};

use crate::actor_framework::StoredDocument;
use crate::clients::PlacedOrder;
use crate::domain::Pizza;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub id: String,
    pub total: f64,
}

impl From<PlacedOrder> for OrderCreatedResponse {
    fn from(placed: PlacedOrder) -> Self {
        Self {
            id: placed.id.to_string(),
            total: placed.total,
        }
    }
}

/// A menu entry: the pizza's fields plus its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub id: String,
    #[serde(flatten)]
    pub pizza: Pizza,
}

impl From<StoredDocument<Pizza>> for MenuItemResponse {
    fn from(document: StoredDocument<Pizza>) -> Self {
        Self {
            id: document.id.to_string(),
            pizza: document.body,
        }
    }
}
