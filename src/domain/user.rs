use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::actor_framework::Document;

fn default_active() -> bool {
    true
}

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, JsonSchema)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    pub age: Option<i32>,
    /// Whether user is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl User {
    /// Creates a new active user with no recorded age.
    pub fn new(name: impl Into<String>, email: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            age: None,
            is_active: true,
        }
    }
}

impl Document for User {
    const COLLECTION: &'static str = "user";
}
