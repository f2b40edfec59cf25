//! Collection schemas and their validation rules.

pub mod order;
pub mod pizza;
pub mod product;
pub mod user;

pub use order::*;
pub use pizza::*;
pub use product::*;
pub use user::*;

/// Rounds a currency amount to two decimal places.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
