//! HTTP surface.
//!
//! | route            | handler                          |
//! |------------------|----------------------------------|
//! | `GET /`          | [`read_root`]                    |
//! | `GET /api/menu`  | [`get_menu`]                     |
//! | `POST /api/menu` | [`add_pizza`]                    |
//! | `GET /api/orders`| [`list_orders`]                  |
//! | `POST /api/orders`| [`create_order`]                |
//! | `GET /schema`    | [`get_schema`]                   |
//! | `GET /test`      | [`diagnostics::test_database`]   |

pub mod diagnostics;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::actor_framework::StoreClient;
use crate::app_system::{Config, PizzaSystem};
use crate::clients::{MenuClient, OrderClient};

pub use error::{ApiError, ApiErrorResponse, FieldError};
pub use handlers::*;

/// Which connection settings were supplied, reported by `GET /test`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl From<&Config> for ConnectionSettings {
    fn from(config: &Config) -> Self {
        Self {
            database_url_set: config.database_url.is_some(),
            database_name_set: config.database_name.is_some(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
    pub menu: MenuClient,
    pub orders: OrderClient,
    pub settings: ConnectionSettings,
}

impl AppState {
    pub fn new(system: &PizzaSystem, settings: ConnectionSettings) -> Self {
        Self {
            store: system.store_client.clone(),
            menu: system.menu_client.clone(),
            orders: system.order_client.clone(),
            settings,
        }
    }
}

/// Builds the application router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(read_root))
        .route("/api/menu", get(get_menu).post(add_pizza))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/schema", get(get_schema))
        .route("/test", get(diagnostics::test_database))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
