use tokio::sync::oneshot;

use crate::actor_framework::RawDocument;
use crate::document_id::DocumentId;
use crate::error::StoreError;

/// Generic type aliases for store communication
pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type StoreResponse<T> = oneshot::Sender<StoreResult<T>>;

/// Typed messages accepted by the document store actor. Each variant carries a
/// oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    Insert {
        collection: String,
        document: serde_json::Map<String, serde_json::Value>,
        respond_to: StoreResponse<DocumentId>,
    },
    FindAll {
        collection: String,
        respond_to: StoreResponse<Vec<RawDocument>>,
    },
    FindOne {
        collection: String,
        id: DocumentId,
        respond_to: StoreResponse<Option<RawDocument>>,
    },
    ListCollections {
        respond_to: StoreResponse<Vec<String>>,
    },
    StoreName {
        respond_to: StoreResponse<String>,
    },
}
