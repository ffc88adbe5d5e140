use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error, info, server, spotify, success, types::AuthorizationGrant, warning,
};

/// Runs the one-time authorization flow against Spotify.
///
/// This flow is how the operator obtains the long-lived refresh token the
/// proxy exchanges on every request:
///
/// 1. Start the local callback server.
/// 2. Open the Spotify consent page in the user's browser.
/// 3. The callback handler exchanges the authorization code and deposits the
///    grant into the shared state.
/// 4. Print the refresh token with instructions for storing it.
///
/// Browser launch failures degrade to a warning with the URL for manual
/// navigation. A missing grant after the timeout terminates with an error.
pub async fn auth(shared_state: Arc<Mutex<Option<AuthorizationGrant>>>) {
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        server::start_callback_server(server_state).await;
    });

    let auth_url = spotify::auth::authorize_url();

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_grant(shared_state).await {
        Some(grant) => {
            success!("Authorization successful!");
            info!(
                "Add this to your environment (or .env) as {}:",
                config::REFRESH_TOKEN_VAR
            );
            println!("{}", grant.refresh_token);
        }
        None => {
            error!("Authorization failed or timed out.");
        }
    }
}

/// Waits for the callback handler to deposit a grant.
///
/// Polls the shared state once per second for up to 60 seconds, concurrently
/// with the callback server task.
async fn wait_for_grant(
    shared_state: Arc<Mutex<Option<AuthorizationGrant>>>,
) -> Option<AuthorizationGrant> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(grant) = lock.as_ref() {
            return Some(grant.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
