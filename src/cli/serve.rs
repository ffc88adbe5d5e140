use crate::{config, error, server};

/// Runs the now-playing proxy server.
///
/// The credential triple is constructed from the environment once, here, and
/// handed to the server; a missing variable is fatal before anything binds.
pub async fn serve() {
    let credential = match config::Credential::from_env() {
        Ok(credential) => credential,
        Err(e) => error!("{}", e),
    };

    server::start_proxy_server(credential).await;
}
