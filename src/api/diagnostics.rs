//! `GET /test`: best-effort report on the document store. Never fails.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AppState;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

fn set_or_not(configured: bool) -> String {
    let label = if configured { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    debug!("Inspecting document store");
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_or_not(state.settings.database_url_set),
        database_name: set_or_not(state.settings.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.store_name().await {
        Ok(_) => {
            response.database = "✅ Available".to_string();
            response.connection_status = "Connected".to_string();

            match state.store.list_collections().await {
                Ok(mut collections) => {
                    collections.truncate(MAX_COLLECTIONS);
                    response.collections = collections;
                    response.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    warn!(error = %e, "Collection listing failed");
                    response.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "Document store unreachable");
            response.database = format!("❌ Error: {}", truncate(&e.to_string()));
        }
    }

    Json(response)
}
