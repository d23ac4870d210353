pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryRecordStore;
pub use sqlite_store::SqliteRecordStore;

use crate::types::SignatureRequest;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Signature request not found: {0}")]
    NotFound(u64),
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("System clock is outside the representable timestamp range")]
    Clock,
}

impl StoreError {
    /// Errors caused by the caller rather than by the store itself
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::InvalidArgument(_))
    }
}

/// Owns the signature request collection and the id counter.
///
/// Implementations serialize mutation internally, so a single instance can be
/// shared across concurrently running request handlers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a new unsigned request and return its id
    async fn add_signature_request(
        &self,
        name: &str,
        notes: Option<&str>,
        link: &str,
    ) -> Result<u64, StoreError>;

    /// Every request, in insertion order
    async fn get_signature_requests(&self) -> Result<Vec<SignatureRequest>, StoreError>;

    async fn update_signature_status(&self, id: u64, signed: bool) -> Result<(), StoreError>;

    /// Release backend resources on shutdown
    async fn close(&self) {}
}

/// Reject blank `name` or `link` before any id is allocated
pub(crate) fn validate_new_request(name: &str, link: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::InvalidArgument("name"));
    }
    if link.trim().is_empty() {
        return Err(StoreError::InvalidArgument("link"));
    }
    Ok(())
}

/// Current time in nanoseconds since the Unix epoch
pub(crate) fn now_nanos() -> Result<i64, StoreError> {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .ok_or(StoreError::Clock)
}

/// Behaviour every backend must share, run against each one from its own tests
#[cfg(test)]
pub(crate) mod conformance {
    use super::*;

    pub async fn ids_strictly_increase(store: &dyn RecordStore) {
        let mut previous = None;
        for i in 0..10 {
            let id = store
                .add_signature_request(&format!("signer {i}"), None, "http://doc")
                .await
                .unwrap();
            if let Some(prev) = previous {
                assert!(id > prev, "id {id} not greater than {prev}");
            }
            previous = Some(id);
        }
    }

    pub async fn lists_in_insertion_order(store: &dyn RecordStore) {
        let names = ["Carol", "Alice", "Bob"];
        for name in names {
            store
                .add_signature_request(name, Some("note"), "http://doc")
                .await
                .unwrap();
        }

        let listed = store.get_signature_requests().await.unwrap();
        assert_eq!(listed.len(), names.len());
        let listed_names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(listed_names, names);
    }

    pub async fn alice_scenario(store: &dyn RecordStore) {
        let id = store
            .add_signature_request("Alice", None, "http://doc/1")
            .await
            .unwrap();
        assert_eq!(id, 0);

        let listed = store.get_signature_requests().await.unwrap();
        assert_eq!(listed.len(), 1);
        let created = listed[0].clone();
        assert_eq!(created.id, id);
        assert_eq!(created.name, "Alice");
        assert_eq!(created.link, "http://doc/1");
        assert_eq!(created.notes, None);
        assert!(!created.signed);
        assert!(created.created_at > 0);

        store.update_signature_status(id, true).await.unwrap();
        let listed = store.get_signature_requests().await.unwrap();
        assert_eq!(
            listed,
            vec![SignatureRequest {
                signed: true,
                ..created.clone()
            }]
        );

        store.update_signature_status(id, false).await.unwrap();
        let listed = store.get_signature_requests().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    pub async fn update_is_idempotent_and_keeps_created_at(store: &dyn RecordStore) {
        let id = store
            .add_signature_request("Dana", Some("by friday"), "http://doc/2")
            .await
            .unwrap();
        let before = store.get_signature_requests().await.unwrap();

        for _ in 0..3 {
            store.update_signature_status(id, true).await.unwrap();
        }
        let after = store.get_signature_requests().await.unwrap();
        assert_eq!(after.len(), 1);
        assert!(after[0].signed);
        assert_eq!(after[0].created_at, before[0].created_at);
        assert_eq!(after[0].notes.as_deref(), Some("by friday"));
    }

    pub async fn missing_id_leaves_store_unchanged(store: &dyn RecordStore) {
        let err = store.update_signature_status(999, true).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
        assert!(store.get_signature_requests().await.unwrap().is_empty());

        store
            .add_signature_request("Erin", None, "http://doc/3")
            .await
            .unwrap();
        let before = store.get_signature_requests().await.unwrap();
        let err = store.update_signature_status(999, true).await.unwrap_err();
        assert_eq!(err.to_string(), "Signature request not found: 999");
        assert_eq!(store.get_signature_requests().await.unwrap(), before);
    }

    pub async fn blank_fields_rejected_without_consuming_id(store: &dyn RecordStore) {
        let err = store
            .add_signature_request("", None, "http://doc")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument("name")));

        let err = store
            .add_signature_request("Frank", None, "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument("link")));

        let id = store
            .add_signature_request("Frank", None, "http://doc")
            .await
            .unwrap();
        assert_eq!(id, 0);
        assert_eq!(store.get_signature_requests().await.unwrap().len(), 1);
    }
}
