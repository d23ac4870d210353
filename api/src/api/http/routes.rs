use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::http::rpc;
use crate::state::SigntrackState;

async fn landing_page() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html>
<head>
    <title>Signtrack</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
               max-width: 800px; margin: 50px auto; padding: 20px; }
        code { background: #eee; padding: 2px 6px; border-radius: 3px; }
        .endpoint { background: #f6f6f6; padding: 10px; margin: 10px 0; border-radius: 5px; }
        .method { font-weight: bold; }
    </style>
</head>
<body>
    <h1>Signtrack</h1>
    <p>Signature request tracker</p>

    <div class="endpoint">
        <span class="method">POST</span> <code>/api/addSignatureRequest</code><br>
        <code>{"name", "notes", "link"}</code> &rarr; <code>{"ok": id}</code> or <code>{"err": text}</code>
    </div>
    <div class="endpoint">
        <span class="method">GET</span> <code>/api/getSignatureRequests</code><br>
        Every request, in the order it was added
    </div>
    <div class="endpoint">
        <span class="method">POST</span> <code>/api/updateSignatureStatus</code><br>
        <code>{"id", "signed"}</code> &rarr; <code>{"ok": null}</code> or <code>{"err": text}</code>
    </div>
</body>
</html>
    "#)
}

/// RPC routes, relative to wherever they get nested
pub fn routes(state: Arc<SigntrackState>) -> Router {
    tracing::debug!("Building routes");

    let rpc_routes = Router::new()
        .route("/addSignatureRequest", post(rpc::add_signature_request))
        .route(
            "/getSignatureRequests",
            get(rpc::get_signature_requests).post(rpc::get_signature_requests),
        )
        .route("/updateSignatureStatus", post(rpc::update_signature_status))
        .with_state(state);

    Router::new()
        .route("/", get(landing_page))
        .merge(rpc_routes)
}

/// Full service: health check, RPC under `/api`, tracing and permissive CORS
/// so a browser front end served elsewhere can call in
pub fn app(state: Arc<SigntrackState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
