// ABOUTME: Two-variant result envelope returned by every RPC method
// ABOUTME: Serializes as {"ok": value} or {"err": message}, never as a transport error

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use signtrack_core::store::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcResult<T> {
    Ok(T),
    Err(String),
}

impl<T> From<Result<T, StoreError>> for RpcResult<T> {
    fn from(result: Result<T, StoreError>) -> Self {
        match result {
            Ok(value) => RpcResult::Ok(value),
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!("Rejected RPC call: {}", e);
                } else {
                    tracing::error!("Record store failure: {}", e);
                }
                RpcResult::Err(e.to_string())
            }
        }
    }
}

impl<T: Serialize> IntoResponse for RpcResult<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
