use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode, response::Response};
use serde_json::json;

use crate::{api, server::ProxyState, spotify, warning};

/// `GET /queue` - the normalized upcoming queue, zero or one entries.
///
/// Composes the token broker and the queue adapter. Unlike `/now-playing`,
/// this endpoint fails closed: a failed token exchange or a transport
/// failure on the queue call answers 500 with an error body. Upstream empty
/// and error statuses still produce an empty queue with 200.
pub async fn queue(Extension(state): Extension<Arc<ProxyState>>) -> Response {
    let token = match spotify::auth::fetch_access_token(&state.credential).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return queue_error();
        }
    };

    match spotify::player::get_queue(&token).await {
        Ok(entries) => api::with_cache_control(Json(json!({ "queue": entries }))),
        Err(e) => {
            warning!("Queue fetch failed: {}", e);
            queue_error()
        }
    }
}

fn queue_error() -> Response {
    api::with_cache_control((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Error fetching queue data" })),
    ))
}
