//! # CLI Module
//!
//! This module provides the command implementations behind the `sponow`
//! binary. It coordinates the configuration, server and Spotify layers; the
//! argument parsing itself lives in `main.rs`.
//!
//! ## Commands
//!
//! ### Serving
//!
//! - [`serve`] - Constructs the credential from the environment (fatal when
//!   incomplete) and runs the proxy server until terminated.
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the one-time authorization flow: starts the local
//!   callback server, sends the user's browser to Spotify's consent page and
//!   prints the resulting refresh token for the operator to store.
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Server Layer (axum routers and handlers)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Fatal conditions (missing credential variables, unparsable listen
//! address) terminate through the `error!` macro with a clear message;
//! everything request-scoped is handled inside the endpoint handlers and
//! never tears down the server.

mod auth;
mod serve;

pub use auth::auth;
pub use serve::serve;
