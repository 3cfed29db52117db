//! # Spotify Integration Module
//!
//! This module is the integration layer between the bridge and Spotify's
//! services. It implements the interactive OAuth 2.0 authorization-code
//! flow and a small Web API client for the playback and search operations
//! the bridge exposes.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code grant:
//! - **Complete Auth Flow**: From starting the local callback server to the
//!   persisted token pair
//! - **Browser Integration**: Automatic browser launch for user authorization,
//!   with a manual-URL fallback
//! - **Code Exchange**: Server-to-server POST authenticated with HTTP Basic
//!   auth built from the client credentials
//! - **Token Renewal**: Refresh-token exchange used when the API rejects an
//!   access token
//!
//! ### Client Module
//!
//! [`client`] - The Web API client bound to the obtained tokens:
//! - `POST /me/player/next` and `POST /me/player/previous` for track skips
//! - `GET /search` for track search
//! - `PUT /me/player/play` for URI playback
//!
//! ## Authentication Strategy
//!
//! The bridge is a confidential client: it holds a client secret supplied
//! by the user, so the classic authorization-code grant applies.
//!
//! 1. **Login Redirect**: `/login` on the local server redirects to the
//!    Spotify authorize endpoint with a random `state` parameter
//! 2. **Local Callback**: `/callback` receives the authorization code and
//!    verifies the `state` round-trip
//! 3. **Token Exchange**: Code and redirect URI are posted to the token
//!    endpoint under Basic auth
//! 4. **Token Storage**: The pair is persisted for later launches
//! 5. **Self-Termination**: The local server shuts down once the flow
//!    resolves
//!
//! ## Error Handling Philosophy
//!
//! All functions return typed errors ([`auth::AuthError`],
//! [`client::ApiError`]). Playback and search calls are never retried; a
//! rejected access token is renewed once via the refresh token and the
//! call repeated. Everything else is surfaced to the dispatcher, which
//! logs and swallows it at the outer command surface.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **axum** - local callback server (see [`crate::server`])
//! - **serde_json** - JSON serialization and deserialization
//! - **tokio** - async runtime, channels and synchronization

pub mod auth;
pub mod client;
