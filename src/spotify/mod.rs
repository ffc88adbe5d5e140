//! # Spotify Integration Module
//!
//! This module is the integration layer between the proxy and the Spotify
//! Web API. It handles the per-request token exchange, the player endpoint
//! calls, and the classification of Spotify's inconsistent empty/failure
//! responses into an explicit [`Upstream`] result the adapters pattern-match
//! over.
//!
//! ## Core Modules
//!
//! - [`auth`] - Token broker (refresh-token exchange) and the one-time
//!   authorization-code exchange used by `sponow auth`
//! - [`player`] - Currently-playing and queue adapters with their
//!   normalization rules
//!
//! ## Failure Policy
//!
//! The two player adapters intentionally differ:
//!
//! - The now-playing path fails open: any auth, transport or decode failure
//!   degrades to a "nothing playing" snapshot and is never surfaced to the
//!   polling client.
//! - The queue path fails closed: transport and decode failures propagate as
//!   [`UpstreamError`] and become an HTTP 500 at the endpoint.
//!
//! Upstream statuses are classified uniformly for both: 204 and anything at
//! or above 400 never carry a payload.
//!
//! ## Error Types
//!
//! - [`AuthError`] - token endpoint returned a non-success status or a
//!   payload without the expected token field
//! - [`UpstreamError`] - player endpoint call failed in transport or decode

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::AccessToken;

pub mod auth;
pub mod player;

/// Spotify token endpoint, used for both grant types.
pub const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";
/// Spotify authorization endpoint for the one-time consent redirect.
pub const AUTHORIZE_ENDPOINT: &str = "https://accounts.spotify.com/authorize";
/// Player endpoint reporting the currently playing track.
pub const NOW_PLAYING_ENDPOINT: &str = "https://api.spotify.com/v1/me/player/currently-playing";
/// Player endpoint reporting the upcoming queue.
pub const QUEUE_ENDPOINT: &str = "https://api.spotify.com/v1/me/player/queue";
/// Scopes required to read playback state.
pub const AUTH_SCOPE: &str = "user-read-currently-playing user-read-playback-state";

/// Token exchange failure.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token endpoint returned {0}")]
    TokenEndpointStatus(StatusCode),
    #[error("token response did not contain an access token")]
    MissingAccessToken,
    #[error("token response did not contain a refresh token")]
    MissingRefreshToken,
    #[error("authorization was rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Player endpoint failure in transport or decode.
///
/// Status-level failures (4xx/5xx) are not errors; they classify as
/// [`Upstream::Failed`] and the adapters decide what to do with them.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Outcome of one player endpoint call.
///
/// Spotify reports "nothing playing" as 204 with no body, and errors as
/// regular JSON error statuses. Both are everyday states for a polling
/// proxy and are classified here; the adapters pattern-match instead of
/// branching on status codes.
#[derive(Debug, Clone)]
pub enum Upstream<T> {
    Payload(T),
    Empty,
    Failed(StatusCode),
}

impl<T> Upstream<T> {
    /// Classifies a response status that cannot carry a payload.
    ///
    /// 204 is `Empty`, anything at or above 400 is `Failed`. All other
    /// statuses return `None` and the body is expected to deserialize into
    /// the payload type.
    pub fn from_status(status: StatusCode) -> Option<Upstream<T>> {
        if status == StatusCode::NO_CONTENT {
            Some(Upstream::Empty)
        } else if status.as_u16() >= 400 {
            Some(Upstream::Failed(status))
        } else {
            None
        }
    }
}

/// Calls a player endpoint with a bearer token and classifies the response.
///
/// # Errors
///
/// Returns `Err` only for transport failures and payload decode failures.
/// Empty and error statuses are successful classifications, not errors.
pub async fn get_player_endpoint<T: DeserializeOwned>(
    url: &str,
    token: &AccessToken,
) -> Result<Upstream<T>, reqwest::Error> {
    let client = Client::new();
    let response = client.get(url).bearer_auth(&token.value).send().await?;

    if let Some(upstream) = Upstream::from_status(response.status()) {
        return Ok(upstream);
    }

    Ok(Upstream::Payload(response.json::<T>().await?))
}
