use std::fmt;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::sync::Mutex;

use crate::{
    config::{self, Credentials},
    management::TokenStore,
    spotify::auth,
    types::{PlayRequest, SearchTracksResponse, TokenPair, Track},
    warning,
};

#[derive(Debug)]
pub enum ApiError {
    /// Network or protocol failure.
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Status(StatusCode),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "request failed: {}", e),
            ApiError::Status(status) => write!(f, "Spotify API returned {}", status),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Status(_) => None,
        }
    }
}

/// Web API client bound to the current token pair.
///
/// Calls are single-shot: a failed playback or search request is reported
/// to the caller, never retried. The one exception is a rejected access
/// token: a 401 triggers one refresh-token exchange, and the original
/// request is repeated with the fresh token.
pub struct SpotifyClient {
    http: Client,
    credentials: Option<Credentials>,
    store: TokenStore,
    tokens: Mutex<TokenPair>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenPair, credentials: Option<Credentials>, store: TokenStore) -> Self {
        SpotifyClient {
            http: Client::new(),
            credentials,
            store,
            tokens: Mutex::new(tokens),
        }
    }

    pub async fn skip_to_next(&self) -> Result<(), ApiError> {
        self.send_with(|http, token| {
            http.post(format!("{}/me/player/next", config::SPOTIFY_API_URL))
                .bearer_auth(token)
        })
        .await
        .map(|_| ())
    }

    pub async fn skip_to_previous(&self) -> Result<(), ApiError> {
        self.send_with(|http, token| {
            http.post(format!("{}/me/player/previous", config::SPOTIFY_API_URL))
                .bearer_auth(token)
        })
        .await
        .map(|_| ())
    }

    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>, ApiError> {
        let response = self
            .send_with(|http, token| {
                http.get(format!("{}/search", config::SPOTIFY_API_URL))
                    .query(&[("q", query), ("type", "track"), ("limit", "50")])
                    .bearer_auth(token)
            })
            .await?;

        let res = response.json::<SearchTracksResponse>().await?;
        Ok(res.tracks.items)
    }

    pub async fn play(&self, uris: &[String]) -> Result<(), ApiError> {
        let body = PlayRequest {
            uris: uris.to_vec(),
        };
        self.send_with(|http, token| {
            http.put(format!("{}/me/player/play", config::SPOTIFY_API_URL))
                .bearer_auth(token)
                .json(&body)
        })
        .await
        .map(|_| ())
    }

    /// Sends a request built with the current access token, refreshing it
    /// once if the API rejects it.
    async fn send_with<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn(&Client, &str) -> RequestBuilder,
    {
        let token = self.tokens.lock().await.access_token.clone();
        let response = build(&self.http, &token).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response);
        }

        let token = match self.refresh_access_token().await {
            Some(token) => token,
            None => return Err(ApiError::Status(StatusCode::UNAUTHORIZED)),
        };

        let response = build(&self.http, &token).send().await?;
        check_status(response)
    }

    /// Renews the access token via the stored refresh token and persists
    /// the new pair. Returns `None` when renewal is impossible; the caller
    /// then surfaces the original 401.
    async fn refresh_access_token(&self) -> Option<String> {
        let Some(credentials) = &self.credentials else {
            warning!("Access token rejected and no client credentials configured for refresh");
            return None;
        };

        let mut tokens = self.tokens.lock().await;
        let refreshed = match auth::refresh(credentials, &tokens.refresh_token).await {
            Ok(pair) => pair,
            Err(e) => {
                warning!("Token refresh failed: {}", e);
                return None;
            }
        };

        *tokens = refreshed;
        if let Err(e) = self.store.persist(&tokens).await {
            warning!(
                "Failed to save refreshed tokens to {}: {}",
                self.store.path().display(),
                e
            );
        }

        Some(tokens.access_token.clone())
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}
