use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{types::TokenPair, warning};

#[derive(Debug)]
pub enum TokenStoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl From<std::io::Error> for TokenStoreError {
    fn from(err: std::io::Error) -> Self {
        TokenStoreError::Io(err)
    }
}

impl From<serde_json::Error> for TokenStoreError {
    fn from(err: serde_json::Error) -> Self {
        TokenStoreError::Serde(err)
    }
}

impl fmt::Display for TokenStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStoreError::Io(e) => write!(f, "token file I/O failed: {}", e),
            TokenStoreError::Serde(e) => write!(f, "token serialization failed: {}", e),
        }
    }
}

impl std::error::Error for TokenStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TokenStoreError::Io(e) => Some(e),
            TokenStoreError::Serde(e) => Some(e),
        }
    }
}

/// Reads and writes the persisted token pair at a fixed path.
///
/// A load failure of any kind means "no stored tokens"; the caller then
/// runs the authorization flow. A persist failure is reported to the
/// caller but never invalidates the in-memory pair.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        TokenStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn persist(&self, pair: &TokenPair) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(pair)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub async fn load(&self) -> Option<TokenPair> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warning!("Cannot read token file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<TokenPair>(&content) {
            Ok(pair) => Some(pair),
            Err(e) => {
                warning!(
                    "Ignoring malformed token file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}
