use std::sync::Arc;

use axum::{Extension, Json, response::Response};

use crate::{
    api, server::ProxyState, spotify, types::PlaybackSnapshot, warning,
};

/// `GET /now-playing` - the normalized currently-playing snapshot.
///
/// Composes the token broker and the now-playing adapter. This endpoint
/// fails open: a failed token exchange degrades to the not-playing snapshot
/// just like any upstream failure, and the status is always 200.
pub async fn now_playing(Extension(state): Extension<Arc<ProxyState>>) -> Response {
    let snapshot = match spotify::auth::fetch_access_token(&state.credential).await {
        Ok(token) => spotify::player::get_snapshot(&token).await,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            PlaybackSnapshot::not_playing()
        }
    };

    api::with_cache_control(Json(snapshot))
}
