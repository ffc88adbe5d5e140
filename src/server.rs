use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, info, types::AuthorizationGrant};

/// Immutable state shared by the proxy handlers. Only the credential lives
/// here; everything else is request-scoped.
pub struct ProxyState {
    pub credential: config::Credential,
}

/// Builds the proxy router: the two player endpoints plus a health check.
/// All routes are GET-only; other methods get 405 from the method router.
pub fn proxy_router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/now-playing", get(api::now_playing))
        .route("/queue", get(api::queue))
        .layer(Extension(state))
}

pub async fn start_proxy_server(credential: config::Credential) {
    let state = Arc::new(ProxyState { credential });
    let app = proxy_router(state);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Proxy listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Runs the callback server for the one-time authorization flow. The
/// exchanged grant is deposited into `state` for the waiting CLI command.
pub async fn start_callback_server(state: Arc<Mutex<Option<AuthorizationGrant>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
