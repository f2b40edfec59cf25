use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument, warn};

use crate::document_id::DocumentId;
use crate::error::StoreError;
use crate::messages::{StoreRequest, StoreResponse, StoreResult};
use crate::persistence::SnapshotFile;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any schema type must implement to be kept in the document store.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection holding documents of this type.
    const COLLECTION: &'static str;
}

/// Keys owned by the store. They are stripped from incoming documents.
pub const RESERVED_KEYS: [&str; 4] = ["_id", "id", "created_at", "updated_at"];

/// A document as the store keeps it: metadata plus a schema-free body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl RawDocument {
    /// Decodes the body into a schema type.
    pub fn decode<T: DeserializeOwned>(self) -> StoreResult<StoredDocument<T>> {
        let body = serde_json::from_value(Value::Object(self.body))?;
        Ok(StoredDocument {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            body,
        })
    }
}

/// A typed document with its store-assigned id rendered as a string field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument<T> {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<RawDocument>,
    positions: HashMap<DocumentId, usize>,
}

impl Collection {
    fn from_documents(documents: Vec<RawDocument>) -> Self {
        let positions = documents
            .iter()
            .enumerate()
            .map(|(position, document)| (document.id, position))
            .collect();
        Self { documents, positions }
    }

    fn push(&mut self, document: RawDocument) {
        self.positions.insert(document.id, self.documents.len());
        self.documents.push(document);
    }

    fn pop(&mut self) {
        if let Some(document) = self.documents.pop() {
            self.positions.remove(&document.id);
        }
    }

    fn get(&self, id: &DocumentId) -> Option<&RawDocument> {
        self.positions.get(id).map(|&position| &self.documents[position])
    }
}

// =============================================================================
// 2. THE ACTOR SERVER
// =============================================================================

/// Owns every collection. Requests are served one at a time in arrival order.
pub struct DocumentStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    name: String,
    collections: BTreeMap<String, Collection>,
    snapshot: Option<SnapshotFile>,
}

impl DocumentStoreActor {
    pub fn new(
        buffer_size: usize,
        name: impl Into<String>,
        initial: BTreeMap<String, Vec<RawDocument>>,
        snapshot: Option<SnapshotFile>,
    ) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let collections = initial
            .into_iter()
            .map(|(name, documents)| (name, Collection::from_documents(documents)))
            .collect();
        let actor = Self {
            receiver,
            name: name.into(),
            collections,
            snapshot,
        };
        (actor, StoreClient::new(sender))
    }

    /// Memory-only store with no documents.
    pub fn in_memory(buffer_size: usize, name: impl Into<String>) -> (Self, StoreClient) {
        Self::new(buffer_size, name, BTreeMap::new(), None)
    }

    #[instrument(name = "document_store", skip(self))]
    pub async fn run(mut self) {
        info!(store = %self.name, collections = self.collections.len(), "Document store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { collection, document, respond_to } => {
                    self.handle_insert(collection, document, respond_to).await;
                }
                StoreRequest::FindAll { collection, respond_to } => {
                    self.handle_find_all(collection, respond_to);
                }
                StoreRequest::FindOne { collection, id, respond_to } => {
                    self.handle_find_one(collection, id, respond_to);
                }
                StoreRequest::ListCollections { respond_to } => {
                    let names = self.collections.keys().cloned().collect();
                    let _ = respond_to.send(Ok(names));
                }
                StoreRequest::StoreName { respond_to } => {
                    let _ = respond_to.send(Ok(self.name.clone()));
                }
            }
        }
        info!("Document store stopped");
    }

    #[instrument(skip(self, document, respond_to))]
    async fn handle_insert(
        &mut self,
        collection: String,
        mut document: Map<String, Value>,
        respond_to: StoreResponse<DocumentId>,
    ) {
        debug!("Processing insert request");
        for key in RESERVED_KEYS {
            document.remove(key);
        }

        let now = Utc::now();
        let id = DocumentId::generate();
        self.collections
            .entry(collection.clone())
            .or_default()
            .push(RawDocument {
                id,
                created_at: now,
                updated_at: now,
                body: document,
            });

        if let Err(e) = self.persist().await {
            error!(error = %e, "Snapshot write failed, rolling back insert");
            if let Some(entries) = self.collections.get_mut(&collection) {
                entries.pop();
                if entries.documents.is_empty() {
                    self.collections.remove(&collection);
                }
            }
            let _ = respond_to.send(Err(e));
            return;
        }

        info!(document_id = %id, "Document inserted");
        let _ = respond_to.send(Ok(id));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_find_all(&self, collection: String, respond_to: StoreResponse<Vec<RawDocument>>) {
        debug!("Processing find_all request");
        let documents = self
            .collections
            .get(&collection)
            .map(|entries| entries.documents.clone())
            .unwrap_or_default();
        let _ = respond_to.send(Ok(documents));
    }

    #[instrument(fields(document_id = %id), skip(self, respond_to))]
    fn handle_find_one(
        &self,
        collection: String,
        id: DocumentId,
        respond_to: StoreResponse<Option<RawDocument>>,
    ) {
        debug!("Processing find_one request");
        let document = self
            .collections
            .get(&collection)
            .and_then(|entries| entries.get(&id))
            .cloned();
        if document.is_none() {
            debug!("Document not found");
        }
        let _ = respond_to.send(Ok(document));
    }

    async fn persist(&self) -> StoreResult<()> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        let view: BTreeMap<&str, &[RawDocument]> = self
            .collections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.documents.as_slice()))
            .collect();
        snapshot.save(&view).await.inspect_err(|e| {
            warn!(path = %snapshot.path().display(), error = %e, "Failed to write snapshot");
        })
    }
}

// =============================================================================
// 3. THE CLIENT
// =============================================================================

/// Cloneable handle to the document store actor.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(&self, make: impl FnOnce(StoreResponse<T>) -> StoreRequest) -> StoreResult<T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| StoreError::Unavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::Unavailable("Actor dropped".to_string()))?
    }

    /// Inserts `document` into `collection` and returns the assigned id.
    #[instrument(skip(self, document))]
    pub async fn create_document<T: Serialize>(&self, collection: &str, document: &T) -> StoreResult<DocumentId> {
        debug!("Sending request");
        let document = match serde_json::to_value(document)? {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Serialization(format!(
                    "documents must be JSON objects, got {other}"
                )))
            }
        };
        let collection = collection.to_string();
        self.request(|respond_to| StoreRequest::Insert { collection, document, respond_to })
            .await
    }

    /// Every document of `collection` in insertion order.
    #[instrument(skip(self))]
    pub async fn get_documents(&self, collection: &str) -> StoreResult<Vec<RawDocument>> {
        debug!("Sending request");
        let collection = collection.to_string();
        self.request(|respond_to| StoreRequest::FindAll { collection, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_document(&self, collection: &str, id: DocumentId) -> StoreResult<Option<RawDocument>> {
        debug!("Sending request");
        let collection = collection.to_string();
        self.request(|respond_to| StoreRequest::FindOne { collection, id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::ListCollections { respond_to })
            .await
    }

    pub async fn store_name(&self) -> StoreResult<String> {
        self.request(|respond_to| StoreRequest::StoreName { respond_to })
            .await
    }

    // --- Typed access ---

    pub async fn insert<T: Document>(&self, document: &T) -> StoreResult<DocumentId> {
        self.create_document(T::COLLECTION, document).await
    }

    pub async fn all<T: Document>(&self) -> StoreResult<Vec<StoredDocument<T>>> {
        self.get_documents(T::COLLECTION)
            .await?
            .into_iter()
            .map(RawDocument::decode)
            .collect()
    }

    pub async fn find<T: Document>(&self, id: DocumentId) -> StoreResult<Option<StoredDocument<T>>> {
        self.find_document(T::COLLECTION, id)
            .await?
            .map(RawDocument::decode)
            .transpose()
    }
}
