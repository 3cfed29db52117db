use std::fmt;

use tokio::sync::OnceCell;

use crate::{
    config::Config,
    info,
    management::TokenStore,
    spotify::{
        self,
        auth::AuthError,
        client::{ApiError, SpotifyClient},
    },
    types::{Track, UriSelection},
    utils,
};

/// Outcome of a dispatched command, distinguishable by callers.
#[derive(Debug)]
pub enum CommandError {
    /// Search was invoked without any filter fields.
    EmptyQuery,
    /// Initialization (token load or authorization flow) failed.
    Auth(AuthError),
    /// The delegated Web API call failed.
    Api(ApiError),
}

impl From<AuthError> for CommandError {
    fn from(err: AuthError) -> Self {
        CommandError::Auth(err)
    }
}

impl From<ApiError> for CommandError {
    fn from(err: ApiError) -> Self {
        CommandError::Api(err)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::EmptyQuery => write!(f, "no search filters given"),
            CommandError::Auth(e) => write!(f, "{}", e),
            CommandError::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::EmptyQuery => None,
            CommandError::Auth(e) => Some(e),
            CommandError::Api(e) => Some(e),
        }
    }
}

/// Per-process context owning configuration, the token store and the
/// lazily constructed Web API client.
///
/// Every command entry point goes through [`Session::client`], so the
/// first invocation of any command triggers initialization and later
/// invocations reuse the same client. The cell is set exactly once per
/// process and never cleared; a failed initialization leaves it empty so
/// a later invocation can retry.
pub struct Session {
    config: Config,
    store: TokenStore,
    client: OnceCell<SpotifyClient>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let store = TokenStore::new(config.token_file.clone());
        Session {
            config,
            store,
            client: OnceCell::new(),
        }
    }

    /// Returns the initialized Web API client, constructing it on first use.
    ///
    /// Looks for stored tokens first and only falls back to the interactive
    /// authorization flow when none are found. Concurrent callers await the
    /// same in-flight initialization; at most one authorization flow and
    /// one client construction ever run.
    pub async fn client(&self) -> Result<&SpotifyClient, AuthError> {
        self.client
            .get_or_try_init(|| async {
                let pair = match self.store.load().await {
                    Some(pair) => pair,
                    None => {
                        info!("No stored tokens found, starting authorization");
                        let credentials = self
                            .config
                            .credentials
                            .clone()
                            .ok_or(AuthError::MissingCredentials)?;
                        spotify::auth::authorize(credentials, self.store.clone()).await?
                    }
                };

                Ok(SpotifyClient::new(
                    pair,
                    self.config.credentials.clone(),
                    self.store.clone(),
                ))
            })
            .await
    }

    /// Explicit initialization trigger; idempotent.
    pub async fn init(&self) -> Result<(), AuthError> {
        self.client().await.map(|_| ())
    }

    pub async fn next_track(&self) -> Result<(), CommandError> {
        let client = self.client().await?;
        client.skip_to_next().await?;
        Ok(())
    }

    pub async fn previous_track(&self) -> Result<(), CommandError> {
        let client = self.client().await?;
        client.skip_to_previous().await?;
        Ok(())
    }

    /// Searches tracks by artist and/or title.
    ///
    /// The query is validated before initialization, so an empty search
    /// neither starts the authorization flow nor issues a request.
    pub async fn search_tracks(
        &self,
        artist: Option<&str>,
        track: Option<&str>,
    ) -> Result<Vec<Track>, CommandError> {
        let query = utils::build_search_query(artist, track).ok_or(CommandError::EmptyQuery)?;

        let client = self.client().await?;
        Ok(client.search_tracks(&query).await?)
    }

    pub async fn play(&self, selection: UriSelection) -> Result<(), CommandError> {
        let uris = selection.into_uris();
        let client = self.client().await?;
        client.play(&uris).await?;
        Ok(())
    }
}
