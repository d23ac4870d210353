use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{now_nanos, validate_new_request, RecordStore, StoreError};
use crate::types::SignatureRequest;

#[derive(Default)]
struct Inner {
    requests: Vec<SignatureRequest>,
    next_id: u64,
}

/// Volatile store; contents are lost when the process exits
#[derive(Default)]
pub struct MemoryRecordStore {
    inner: Mutex<Inner>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn add_signature_request(
        &self,
        name: &str,
        notes: Option<&str>,
        link: &str,
    ) -> Result<u64, StoreError> {
        validate_new_request(name, link)?;
        let created_at = now_nanos()?;

        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.requests.push(SignatureRequest {
            id,
            name: name.to_string(),
            link: link.to_string(),
            created_at,
            notes: notes.map(str::to_string),
            signed: false,
        });
        inner.next_id += 1;
        Ok(id)
    }

    async fn get_signature_requests(&self) -> Result<Vec<SignatureRequest>, StoreError> {
        Ok(self.inner.lock().await.requests.clone())
    }

    async fn update_signature_status(&self, id: u64, signed: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let request = inner
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        request.signed = signed;
        Ok(())
    }
}
