use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::actor_framework::Document;

/// A pizza on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, JsonSchema)]
pub struct Pizza {
    /// Pizza name
    pub name: String,
    /// Short description of the pizza
    #[serde(default)]
    pub description: Option<String>,
    /// Price in dollars
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Public image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Is vegetarian friendly
    #[serde(default)]
    pub vegetarian: bool,
    /// Is spicy
    #[serde(default)]
    pub spicy: bool,
}

impl Pizza {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            image: None,
            vegetarian: false,
            spicy: false,
        }
    }
}

impl Document for Pizza {
    const COLLECTION: &'static str = "pizza";
}
