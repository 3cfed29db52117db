//! Configuration for the Spotify editor bridge.
//!
//! This module holds the fixed Spotify endpoints together with the values a
//! user supplies: the client credentials of their Spotify application and
//! the path where obtained tokens are stored.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (token file path)
//!
//! Credentials are deliberately optional at this level. Commands that only
//! replay stored tokens work without them; the authorization flow checks
//! for their presence before it starts.

use std::{env, path::PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};

/// Spotify OAuth authorization endpoint users are redirected to.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify OAuth endpoint for code and refresh-token exchanges.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Scope requested during authorization.
pub const SPOTIFY_SCOPE: &str = "user-modify-playback-state";

/// Address the local callback server binds to.
pub const SERVER_ADDR: &str = "127.0.0.1:8888";

/// Redirect URI registered with the Spotify application.
pub const REDIRECT_URI: &str = "http://localhost:8888/callback";

/// Local URL that starts the authorization round-trip.
pub const LOGIN_URL: &str = "http://localhost:8888/login";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotify-nvim/.env`. A missing file is not an
/// error; already-set environment variables always win.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotify-nvim/.env`
/// - macOS: `~/Library/Application Support/spotify-nvim/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-nvim/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-nvim/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Client credentials of the user's Spotify application.
///
/// Supplied once via `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` and held
/// in process memory only; they are never written to disk by this crate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Reads both credential variables, treating empty values as unset.
    pub fn from_env() -> Option<Self> {
        let client_id = env::var("SPOTIFY_CLIENT_ID")
            .ok()
            .filter(|v| !v.is_empty())?;
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Credentials {
            client_id,
            client_secret,
        })
    }

    /// HTTP Basic authorization header value for the token endpoint,
    /// `base64(client_id:client_secret)`.
    pub fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Everything the bridge needs to construct a [`Session`].
///
/// [`Session`]: crate::management::Session
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Option<Credentials>,
    pub token_file: PathBuf,
}

impl Config {
    /// Builds a configuration from the current environment.
    ///
    /// The token file path comes from `SPOTIFY_TOKEN_FILE` and falls back
    /// to [`default_token_file`]. It is read once here and fixed for the
    /// lifetime of the process.
    pub fn from_env() -> Self {
        let token_file = env::var("SPOTIFY_TOKEN_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_token_file);

        Config {
            credentials: Credentials::from_env(),
            token_file,
        }
    }
}

/// Default token file location, `$HOME/.spotify_nvim_tokens.json`.
pub fn default_token_file() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".spotify_nvim_tokens.json");
    path
}
