//! # API Module
//!
//! HTTP endpoints served by the short-lived local callback server during
//! the OAuth authorization flow.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`index`] - Static login page at the listener root; links to `/login`
//!   and renders the success/error fragment after the round-trip.
//! - [`login`] - Redirects the user agent to the Spotify authorization
//!   endpoint with the client ID, scope, redirect URI and a random `state`.
//! - [`callback`] - Receives the authorization code, exchanges it for a
//!   token pair and redirects back to the page with a status fragment.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version, useful to check
//!   whether the listener is (still) up.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework. The handlers
//! share a [`crate::spotify::auth::PendingAuth`] via an axum `Extension`;
//! the callback handler resolves the flow's completion signal on the first
//! successful exchange, after which the server is shut down and none of
//! these routes are reachable anymore.

mod callback;
mod health;
mod index;
mod login;

pub use callback::callback;
pub use health::health;
pub use index::index;
pub use login::login;
