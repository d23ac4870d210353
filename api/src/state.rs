use once_cell::sync::OnceCell;
use signtrack_core::store::RecordStore;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Record store not initialized")]
    StoreNotInitialized,
}

pub struct SigntrackState {
    pub store: Arc<dyn RecordStore>,
}

impl SigntrackState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

pub static SIGNTRACK_STATE: OnceCell<Arc<SigntrackState>> = OnceCell::new();

pub fn get_store() -> Result<&'static dyn RecordStore, StateError> {
    SIGNTRACK_STATE
        .get()
        .map(|state| state.store.as_ref())
        .ok_or(StateError::StoreNotInitialized)
}
