use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::AuthorizationGrant, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthorizationGrant>>>>,
) -> Html<String> {
    let Some(code) = params.get("code") else {
        return Html("<h4>No code provided. Start again with <code>sponow auth</code>.</h4>".to_string());
    };

    match spotify::auth::exchange_code(code).await {
        Ok(grant) => {
            let page = format!(
                "<h2>Authorization successful.</h2>\
                 <p>Add this token to your environment as <code>SPOTIFY_REFRESH_TOKEN</code>:</p>\
                 <code>{}</code>",
                grant.refresh_token
            );
            let mut state = shared_state.lock().await;
            *state = Some(grant);
            Html(page)
        }
        Err(e) => {
            warning!("Code exchange failed: {}", e);
            Html("<h4>Authorization failed.</h4>".to_string())
        }
    }
}
