// ABOUTME: RPC handlers mapping HTTP calls onto the record store
// ABOUTME: No business logic here, only argument marshaling and error text

use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::envelope::RpcResult;
use crate::state::SigntrackState;

#[derive(Debug, Deserialize)]
pub struct AddSignatureRequestBody {
    pub name: String,
    pub notes: Option<String>,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSignatureStatusBody {
    pub id: u64,
    pub signed: bool,
}

/// POST /api/addSignatureRequest
pub async fn add_signature_request(
    State(state): State<Arc<SigntrackState>>,
    Json(body): Json<AddSignatureRequestBody>,
) -> RpcResult<u64> {
    state
        .store
        .add_signature_request(&body.name, body.notes.as_deref(), &body.link)
        .await
        .into()
}

/// GET|POST /api/getSignatureRequests
///
/// Answers with the bare record array. A store failure is still reported
/// through the `err` variant rather than as an HTTP error.
pub async fn get_signature_requests(State(state): State<Arc<SigntrackState>>) -> Response {
    match state.store.get_signature_requests().await {
        Ok(requests) => Json(requests).into_response(),
        Err(e) => RpcResult::<()>::from(Err(e)).into_response(),
    }
}

/// POST /api/updateSignatureStatus
pub async fn update_signature_status(
    State(state): State<Arc<SigntrackState>>,
    Json(body): Json<UpdateSignatureStatusBody>,
) -> RpcResult<()> {
    state
        .store
        .update_signature_status(body.id, body.signed)
        .await
        .into()
}
