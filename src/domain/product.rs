use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::actor_framework::Document;

fn default_in_stock() -> bool {
    true
}

/// Represents a product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, JsonSchema)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Price in dollars
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether product is in stock
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Document for Product {
    const COLLECTION: &'static str = "product";
}
