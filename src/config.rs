//! Configuration management for the now-playing proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. The
//! Spotify credential is constructed once at startup as an explicit
//! [`Credential`] value and passed into the token broker; nothing reads the
//! credential variables ambiently after startup.

use std::env;

/// Environment variable holding the Spotify application client ID.
pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable holding the Spotify application client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
/// Environment variable holding the long-lived refresh token.
pub const REFRESH_TOKEN_VAR: &str = "SPOTIFY_REFRESH_TOKEN";
/// Environment variable overriding the OAuth redirect URI.
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_REDIRECT_URI";
/// Environment variable overriding the listen address.
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/callback";

/// The immutable Spotify credential triple, sourced from the environment at
/// startup and held for the lifetime of the process.
///
/// The refresh token is the long-lived secret produced by the one-time
/// authorization flow (`sponow auth`); the broker exchanges it for a
/// short-lived access token on every proxy request.
#[derive(Debug, Clone)]
pub struct Credential {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credential {
    /// Constructs the credential from `SPOTIFY_CLIENT_ID`,
    /// `SPOTIFY_CLIENT_SECRET` and `SPOTIFY_REFRESH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first missing variable. Callers treat
    /// this as fatal at startup.
    ///
    /// # Example
    ///
    /// ```
    /// let credential = match Credential::from_env() {
    ///     Ok(c) => c,
    ///     Err(e) => error!("{}", e),
    /// };
    /// ```
    pub fn from_env() -> Result<Credential, String> {
        Ok(Credential {
            client_id: require_env(CLIENT_ID_VAR)?,
            client_secret: require_env(CLIENT_SECRET_VAR)?,
            refresh_token: require_env(REFRESH_TOKEN_VAR)?,
        })
    }
}

fn require_env(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("Missing required environment variable: {}", name))
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// The file is optional; variables already present in the environment take
/// priority. Missing required variables only become an error when the
/// credential is constructed.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:3000`.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:3000"
/// ```
pub fn server_addr() -> String {
    env::var(SERVER_ADDRESS_VAR).unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify application client ID for the authorization flow.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var(CLIENT_ID_VAR).expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify application client secret for the authorization flow.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var(CLIENT_SECRET_VAR).expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_REDIRECT_URI` environment variable, falling back to
/// `http://localhost:3000/callback`. The value must match the redirect URI
/// registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> String {
    env::var(REDIRECT_URI_VAR).unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string())
}
