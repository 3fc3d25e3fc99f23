//! Operation handlers, one per contract.
//!
//! A handler is a plain async function from validated input and the store to
//! a JSON value or an [`OperationError`]. Handlers compose persistence
//! operations into the business behavior of one endpoint; any underlying
//! failure is caught at this boundary and re-labeled with an
//! operation-specific message.

use serde_json::{Map, Value};

use notes_core::contract;
use notes_store::Store;

use crate::error::OperationError;

/// Confirmation string returned by the delete-all operation.
pub const ALL_NOTES_DELETED: &str = "All notes deleted";

/// Confirmation string returned by the delete-by-id operation.
pub const NOTE_DELETED: &str = "Note deleted";

/// Validated input assembled by the dispatcher.
///
/// `body` is the normalized request body when the contract declares one;
/// `params` holds path parameters already normalized to their typed form.
#[derive(Debug, Default)]
pub struct OperationInput {
    pub body: Option<Value>,
    pub params: Map<String, Value>,
}

impl OperationInput {
    /// Read an integer path parameter.
    pub fn param_i64(&self, name: &str) -> Option<i64> {
        self.params.get(name).and_then(Value::as_i64)
    }

    /// Read a string field out of the request body.
    fn body_str(&self, field: &str) -> Option<&str> {
        self.body.as_ref()?.get(field)?.as_str()
    }
}

/// Result of one operation handler.
pub type HandlerResult = Result<Value, OperationError>;

/// Invoke the handler bound to `operation`.
///
/// The dispatcher only passes names present in the contract table, so the
/// final arm is unreachable through the HTTP surface.
pub async fn run(operation: &str, store: &Store, input: OperationInput) -> HandlerResult {
    match operation {
        contract::CREATE_NOTE => create_note(store, input).await,
        contract::GET_NOTES => get_notes(store).await,
        contract::DELETE_NOTES => delete_notes(store).await,
        contract::GET_NOTE => get_note(store, input).await,
        contract::DELETE_NOTE => delete_note(store, input).await,
        other => Err(OperationError::new("Unknown operation", other)),
    }
}

/// Insert a note, then return the full updated collection.
///
/// Callers always receive current state after a mutation, not just the
/// inserted row.
async fn create_note(store: &Store, input: OperationInput) -> HandlerResult {
    let label = "Error creating note";

    let content = input
        .body_str("content")
        .ok_or_else(|| OperationError::new(label, "request body missing content"))?;

    let note = store
        .insert_note(content)
        .await
        .map_err(|e| OperationError::new(label, e))?;
    tracing::info!(note.id = note.id, "Note created");

    let all = store
        .list_notes()
        .await
        .map_err(|e| OperationError::new(label, e))?;
    serde_json::to_value(all).map_err(|e| OperationError::new(label, e))
}

/// Return the full notes collection.
async fn get_notes(store: &Store) -> HandlerResult {
    let label = "Error getting notes";

    let all = store
        .list_notes()
        .await
        .map_err(|e| OperationError::new(label, e))?;
    serde_json::to_value(all).map_err(|e| OperationError::new(label, e))
}

/// Delete every note and confirm.
async fn delete_notes(store: &Store) -> HandlerResult {
    let removed = store
        .delete_all_notes()
        .await
        .map_err(|e| OperationError::new("Error deleting notes", e))?;
    tracing::debug!(removed, "Cleared notes table");

    Ok(Value::String(ALL_NOTES_DELETED.to_string()))
}

/// Return a single note by id.
///
/// A missing note surfaces through the same failure path as any other store
/// error; the client sees a uniform 500.
async fn get_note(store: &Store, input: OperationInput) -> HandlerResult {
    let label = "Error getting note";

    let id = input
        .param_i64("id")
        .ok_or_else(|| OperationError::new(label, "missing id path parameter"))?;

    let note = store
        .get_note(id)
        .await
        .map_err(|e| OperationError::new(label, e))?;
    serde_json::to_value(note).map_err(|e| OperationError::new(label, e))
}

/// Delete a note by id and confirm. Deleting an absent id is a no-op.
async fn delete_note(store: &Store, input: OperationInput) -> HandlerResult {
    let label = "Error deleting note";

    let id = input
        .param_i64("id")
        .ok_or_else(|| OperationError::new(label, "missing id path parameter"))?;

    let removed = store
        .delete_note(id)
        .await
        .map_err(|e| OperationError::new(label, e))?;
    tracing::debug!(note.id = id, removed, "Note delete executed");

    Ok(Value::String(NOTE_DELETED.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_store::StoreConfig;
    use serde_json::json;

    async fn store() -> Store {
        Store::connect(StoreConfig::in_memory()).await.unwrap()
    }

    fn input_with_body(body: Value) -> OperationInput {
        OperationInput {
            body: Some(body),
            params: Map::new(),
        }
    }

    fn input_with_id(id: i64) -> OperationInput {
        let mut params = Map::new();
        params.insert("id".to_string(), Value::from(id));
        OperationInput { body: None, params }
    }

    #[tokio::test]
    async fn create_note_returns_updated_collection() {
        let store = store().await;

        let out = run(
            contract::CREATE_NOTE,
            &store,
            input_with_body(json!({"content": "x"})),
        )
        .await
        .unwrap();

        let notes = out.as_array().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["content"], "x");
        assert!(notes[0]["id"].is_i64());
    }

    #[tokio::test]
    async fn duplicate_create_labels_store_error() {
        let store = store().await;
        let body = json!({"content": "dup"});

        run(contract::CREATE_NOTE, &store, input_with_body(body.clone()))
            .await
            .unwrap();
        let err = run(contract::CREATE_NOTE, &store, input_with_body(body))
            .await
            .unwrap_err();

        assert_eq!(err.message, "Error creating note");
        assert!(!err.details.is_empty());
    }

    #[tokio::test]
    async fn delete_notes_confirms_even_when_empty() {
        let store = store().await;
        let out = run(contract::DELETE_NOTES, &store, OperationInput::default())
            .await
            .unwrap();
        assert_eq!(out, Value::String(ALL_NOTES_DELETED.to_string()));
    }

    #[tokio::test]
    async fn delete_note_is_a_noop_for_absent_id() {
        let store = store().await;
        let out = run(contract::DELETE_NOTE, &store, input_with_id(404))
            .await
            .unwrap();
        assert_eq!(out, Value::String(NOTE_DELETED.to_string()));
    }

    #[tokio::test]
    async fn get_note_missing_id_fails_uniformly() {
        let store = store().await;
        let err = run(contract::GET_NOTE, &store, input_with_id(999))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Error getting note");
        assert!(err.details.contains("not found"));
    }
}
