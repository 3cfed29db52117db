use std::{fmt, sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tokio::sync::{Mutex, oneshot};

use crate::{
    config::{self, Credentials},
    management::TokenStore,
    server::start_auth_server,
    success,
    types::TokenPair,
    utils, warning,
};

#[derive(Debug)]
pub enum AuthError {
    /// The flow refuses to start without client credentials.
    MissingCredentials,
    /// The token endpoint answered with a non-200 status.
    Exchange(StatusCode),
    /// Network or protocol failure talking to the token endpoint.
    Http(reqwest::Error),
    /// The callback server went away before a token was obtained.
    FlowInterrupted,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "client credentials are not configured"),
            AuthError::Exchange(status) => write!(f, "token endpoint returned {}", status),
            AuthError::Http(e) => write!(f, "token request failed: {}", e),
            AuthError::FlowInterrupted => {
                write!(f, "authorization flow ended before a token was obtained")
            }
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// State shared between the authorization flow and the callback handlers.
///
/// `done` carries the completion signal: the callback handler takes the
/// sender out on the first successful exchange, so a failed attempt leaves
/// the flow waiting and the user can retry via `/login`.
pub struct PendingAuth {
    pub credentials: Credentials,
    pub state: String,
    pub store: TokenStore,
    pub done: Option<oneshot::Sender<TokenPair>>,
}

pub type SharedAuth = Arc<Mutex<PendingAuth>>;

/// Runs the interactive OAuth2 authorization-code flow to completion.
///
/// Starts the local callback server, opens the login URL in the user's
/// browser and suspends until the callback handler has exchanged an
/// authorization code for a token pair. The obtained pair is persisted by
/// the callback handler before the completion signal fires; the server is
/// shut down as soon as the flow resolves.
///
/// There is deliberately no timeout: the flow waits for the browser
/// round-trip for as long as the process lives.
pub async fn authorize(credentials: Credentials, store: TokenStore) -> Result<TokenPair, AuthError> {
    let (done_tx, done_rx) = oneshot::channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let shared: SharedAuth = Arc::new(Mutex::new(PendingAuth {
        credentials,
        state: utils::generate_state(),
        store,
        done: Some(done_tx),
    }));

    let server_state = Arc::clone(&shared);
    tokio::spawn(async move {
        if let Err(e) = start_auth_server(server_state, shutdown_rx).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    // Open the login page in the default browser
    if webbrowser::open(config::LOGIN_URL).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            config::LOGIN_URL
        )
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in your browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = done_rx.await;
    pb.finish_and_clear();

    // One successful use, then the listener goes away
    let _ = shutdown_tx.send(());

    match result {
        Ok(pair) => {
            success!("Authorization successful!");
            Ok(pair)
        }
        Err(_) => Err(AuthError::FlowInterrupted),
    }
}

/// Exchanges an authorization code for a token pair.
///
/// Authenticates against the token endpoint with HTTP Basic auth built
/// from the client credentials and form-encodes the code, the redirect
/// URI and `grant_type=authorization_code`.
pub async fn exchange_code(credentials: &Credentials, code: &str) -> Result<TokenPair, AuthError> {
    let client = Client::new();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .header(AUTHORIZATION, credentials.basic_auth())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config::REDIRECT_URI),
        ])
        .send()
        .await?;

    if res.status() != StatusCode::OK {
        return Err(AuthError::Exchange(res.status()));
    }

    let json: Value = res.json().await?;

    Ok(TokenPair {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
    })
}

/// Exchanges a refresh token for a fresh token pair.
///
/// Spotify may omit the refresh token in the renewal response; the old
/// one stays valid and is carried over in that case.
pub async fn refresh(
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<TokenPair, AuthError> {
    let client = Client::new();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .header(AUTHORIZATION, credentials.basic_auth())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    if res.status() != StatusCode::OK {
        return Err(AuthError::Exchange(res.status()));
    }

    let json: Value = res.json().await?;

    Ok(TokenPair {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or(refresh_token)
            .to_string(),
    })
}
