use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access/refresh token pair obtained from Spotify.
///
/// Persisted as a JSON document with exactly the two fields `accessToken`
/// and `refreshToken`; a stored pair from an earlier run is reusable as
/// long as both fields parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// One or many Spotify URIs handed to playback.
///
/// A bare string and a one-element list are equivalent; both reach the
/// player endpoint as a single-element URI list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UriSelection {
    One(String),
    Many(Vec<String>),
}

impl UriSelection {
    pub fn into_uris(self) -> Vec<String> {
        match self {
            UriSelection::One(uri) => vec![uri],
            UriSelection::Many(uris) => uris,
        }
    }
}

impl From<String> for UriSelection {
    fn from(uri: String) -> Self {
        UriSelection::One(uri)
    }
}

impl From<Vec<String>> for UriSelection {
    fn from(uris: Vec<String>) -> Self {
        UriSelection::Many(uris)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    pub uris: Vec<String>,
}
