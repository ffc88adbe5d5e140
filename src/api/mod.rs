//! # API Module
//!
//! This module provides the HTTP endpoints served by the proxy and by the
//! one-time authorization callback server.
//!
//! ## Endpoints
//!
//! ### Proxy
//!
//! - [`now_playing`] - Normalized currently-playing snapshot. Always answers
//!   200; every failure degrades to the not-playing shape so the polling
//!   frontend never special-cases errors.
//! - [`queue`] - Normalized upcoming queue, capped at one entry. Transport
//!   failures surface as 500 so operators can detect a malfunction.
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server, exchanges the code and surfaces the refresh token to the
//!   operator.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check returning application status and version.
//!
//! ## Caching
//!
//! Both proxy endpoints answer with
//! `Cache-Control: s-maxage=1, stale-while-revalidate`: a shared cache may
//! serve the response for one second and revalidate in the background, which
//! matches the frontend's one-second polling interval. The header is applied
//! uniformly, error responses included.
//!
//! ## Method Handling
//!
//! All routes are registered as GET-only; axum's method routing answers 405
//! for any other verb.

use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

mod callback;
mod health;
mod now_playing;
mod queue;

pub use callback::callback;
pub use health::health;
pub use now_playing::now_playing;
pub use queue::queue;

/// Cache directive for the proxy endpoints: one second of shared-cache
/// freshness with background revalidation.
pub const CACHE_DIRECTIVE: &str = "s-maxage=1, stale-while-revalidate";

/// Wraps a response with the proxy cache-control header.
pub fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_DIRECTIVE));
    response
}
