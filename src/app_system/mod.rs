//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod pizza_system;
pub mod tracing;

pub use config::*;
pub use pizza_system::*;
pub use self::tracing::*;
