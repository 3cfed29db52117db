//! # CLI Module
//!
//! The command layer of the bridge binary. Each function here corresponds
//! to one invocable command of the editor-facing surface and coordinates
//! between the [`crate::management::Session`] dispatcher and the user.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Explicitly initializes the session, running the OAuth
//!   authorization flow when no stored tokens exist. Idempotent.
//!
//! ### Playback
//!
//! - [`next_track`] / [`previous_track`] - Skip within the active player
//! - [`play`] - Start playback of one or more Spotify URIs
//!
//! ### Search
//!
//! - [`search`] - Query tracks by artist and/or title, rendered as a table
//!
//! ## Error Handling Philosophy
//!
//! Nothing in this layer propagates an error to the host: every failure
//! terminates in a log line carrying the operation and its relevant
//! argument, and the process stays usable. The underlying session returns
//! typed [`crate::management::CommandError`] values, so programmatic
//! callers of the library can still distinguish failure kinds.

mod auth;
mod playback;
mod search;

pub use auth::auth;
pub use playback::next_track;
pub use playback::play;
pub use playback::previous_track;
pub use search::search;

use crate::warning;

/// Printed whenever a command would need the authorization flow but no
/// client credentials are configured.
pub(crate) fn missing_credentials() {
    warning!(
        "Client credentials are not configured. Set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET (see the .env.example in your data directory)."
    );
}
