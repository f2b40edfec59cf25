//! # Mock Framework
//!
//! Utilities for testing clients without a running store.
//!
//! [`create_mock_store`] hands out a [`StoreClient`] whose requests land on a
//! receiver owned by the test. Helpers such as [`expect_find_one`] and
//! [`expect_insert`] pop the next request and return its reply channel, so a
//! test decides exactly what the store answers and in which order.

use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::actor_framework::{RawDocument, StoreClient};
use crate::document_id::DocumentId;
use crate::messages::{StoreRequest, StoreResponse};

pub fn create_mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next message, if it is an insert.
pub async fn expect_insert(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, Map<String, Value>, StoreResponse<DocumentId>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { collection, document, respond_to }) => Some((collection, document, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a point lookup.
pub async fn expect_find_one(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, DocumentId, StoreResponse<Option<RawDocument>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindOne { collection, id, respond_to }) => Some((collection, id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a collection listing.
pub async fn expect_find_all(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, StoreResponse<Vec<RawDocument>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindAll { collection, respond_to }) => Some((collection, respond_to)),
        _ => None,
    }
}

/// Builds a stored document around a JSON object body.
pub fn raw_document(id: DocumentId, body: Value) -> RawDocument {
    let now = chrono::Utc::now();
    RawDocument {
        id,
        created_at: now,
        updated_at: now,
        body: match body {
            Value::Object(map) => map,
            _ => Map::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_store() {
        let (client, mut receiver) = create_mock_store(10);

        let insert_task = tokio::spawn(async move {
            client.create_document("pizza", &json!({ "name": "Test" })).await
        });

        let (collection, document, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(collection, "pizza");
        assert_eq!(document["name"], "Test");
        let id = DocumentId::generate();
        responder.send(Ok(id)).unwrap();

        let result = insert_task.await.unwrap();
        assert_eq!(result, Ok(id));
    }
}
