use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};
use serde_json::Value;

use crate::{
    config,
    spotify::{AUTHORIZE_ENDPOINT, AUTH_SCOPE, AuthError, TOKEN_ENDPOINT},
    types::{AccessToken, AuthorizationGrant},
};

/// Exchanges the stored refresh token for a short-lived access token.
///
/// Performs exactly one POST to the Spotify token endpoint per invocation.
/// There is no caching and no retry: every proxy request performs a full
/// credential exchange, and the token is discarded after one use.
///
/// # Arguments
///
/// * `credential` - The immutable client id/secret/refresh-token triple
///   constructed at startup
///
/// # Returns
///
/// A fresh [`AccessToken`] to authorize one player endpoint call, discarded
/// after use.
///
/// # Errors
///
/// - [`AuthError::TokenEndpointStatus`] when the token endpoint answers with
///   a non-success status
/// - [`AuthError::MissingAccessToken`] when the payload lacks an
///   `access_token` string
/// - [`AuthError::Http`] for transport and decode failures
pub async fn fetch_access_token(
    credential: &config::Credential,
) -> Result<AccessToken, AuthError> {
    let client = Client::new();
    let response = client
        .post(TOKEN_ENDPOINT)
        .header(
            header::AUTHORIZATION,
            basic_authorization(&credential.client_id, &credential.client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credential.refresh_token.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AuthError::TokenEndpointStatus(response.status()));
    }

    let json: Value = response.json().await?;
    token_from_json(&json)
}

/// Parses a refresh-grant token response.
///
/// # Errors
///
/// Returns [`AuthError::MissingAccessToken`] when the payload has no
/// `access_token` string. A missing `expires_in` falls back to the standard
/// one-hour lifetime.
pub fn token_from_json(json: &Value) -> Result<AccessToken, AuthError> {
    match json["access_token"].as_str() {
        Some(value) => Ok(AccessToken {
            value: value.to_string(),
            expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        }),
        None => Err(AuthError::MissingAccessToken),
    }
}

/// Builds the authorization URL the user consents at during `sponow auth`.
///
/// Requests the playback-read scopes with the configured client id and
/// redirect URI. Parameters are percent-encoded.
pub fn authorize_url() -> String {
    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();

    reqwest::Url::parse_with_params(
        AUTHORIZE_ENDPOINT,
        &[
            ("response_type", "code"),
            ("client_id", client_id.as_str()),
            ("scope", AUTH_SCOPE),
            ("redirect_uri", redirect_uri.as_str()),
        ],
    )
    .expect("authorize endpoint must be a valid URL")
    .to_string()
}

/// Exchanges an authorization code for tokens during the one-time flow.
///
/// Completes the authorization-code grant: POSTs the code together with the
/// registered redirect URI, authenticated with the Basic client-credentials
/// header. The refresh token in the resulting grant is the value the
/// operator stores as `SPOTIFY_REFRESH_TOKEN`.
///
/// # Errors
///
/// - [`AuthError::Rejected`] when Spotify reports an `error` field
/// - [`AuthError::MissingRefreshToken`] when no refresh token is returned
/// - [`AuthError::Http`] for transport and decode failures
pub async fn exchange_code(code: &str) -> Result<AuthorizationGrant, AuthError> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let response = client
        .post(TOKEN_ENDPOINT)
        .header(
            header::AUTHORIZATION,
            basic_authorization(&client_id, &client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let json: Value = response.json().await?;
    grant_from_json(&json)
}

/// Parses an authorization-code token response into a grant.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] when the payload carries an `error`
/// field, or [`AuthError::MissingRefreshToken`] when no refresh token is
/// present.
pub fn grant_from_json(json: &Value) -> Result<AuthorizationGrant, AuthError> {
    if let Some(error) = json["error"].as_str() {
        let description = json["error_description"].as_str().unwrap_or("");
        return Err(AuthError::Rejected(format!("{} {}", error, description)));
    }

    let Some(refresh_token) = json["refresh_token"].as_str() else {
        return Err(AuthError::MissingRefreshToken);
    };

    Ok(AuthorizationGrant {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: refresh_token.to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
    })
}

fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    let basic = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", basic)
}
