//! # Pizza Orders
//!
//! Order-taking API for a pizza restaurant: a menu, order placement with
//! prices copied from the menu at order time, and order listing, all kept in
//! a document store.
//!
//! ## Layout
//!
//! - **Document store** - an actor owning every collection, reached through
//!   a cloneable handle → [`StoreClient`], [`DocumentStoreActor`]
//!     - **Ids** - 24 hex character identifiers → [`DocumentId`]
//!     - **Backends** - memory or a JSON snapshot file → [`StoreBackend`]
//! - **Schemas** - validated collection types → [`Pizza`], [`Order`], [`OrderItem`], [`User`], [`Product`]
//! - **Clients** - typed collection access and order placement → [`MenuClient`], [`OrderClient`]
//! - **System** - configuration, startup and shutdown → [`Config`], [`PizzaSystem`], [`setup_tracing`]
//! - **HTTP** - axum router and handlers → [`api::router`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use pizza_orders::{OrderLineRequest, OrderRequest, Pizza, PizzaSystem};
//!
//! let system = PizzaSystem::in_memory();
//! let id = system.menu_client.add_pizza(Pizza::new("Margherita", 9.5)).await?;
//!
//! let placed = system
//!     .order_client
//!     .create_order(OrderRequest {
//!         customer_name: "Ada".into(),
//!         phone: "555-0100".into(),
//!         address: "1 Main St".into(),
//!         items: vec![OrderLineRequest::new(id.to_string(), 2)],
//!         notes: None,
//!     })
//!     .await?;
//! assert_eq!(placed.total, 19.0);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod api;
pub mod app_system;
pub mod clients;
pub mod document_id;
pub mod domain;
pub mod error;
pub mod messages;
pub mod persistence;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Document, DocumentStoreActor, RawDocument, StoreClient, StoredDocument};
pub use app_system::{setup_tracing, Config, PizzaSystem};
pub use clients::{MenuClient, OrderClient, PlacedOrder};
pub use document_id::DocumentId;
pub use domain::*;
pub use error::{ConfigurationError, MenuError, OrderError, StoreError};
pub use persistence::StoreBackend;
