use std::path::PathBuf;

use spotify_nvim::config::Config;
use spotify_nvim::management::{CommandError, Session, TokenStore};
use spotify_nvim::spotify::auth::AuthError;
use spotify_nvim::types::TokenPair;

fn temp_token_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "spotify-nvim-session-{}-{}",
        name,
        std::process::id()
    ));
    path.push("tokens.json");
    path
}

fn cleanup(path: &PathBuf) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

async fn seed_tokens(path: &PathBuf) {
    let store = TokenStore::new(path.clone());
    store
        .persist(&TokenPair {
            access_token: "BQCstored".to_string(),
            refresh_token: "AQCstored".to_string(),
        })
        .await
        .unwrap();
}

// With a stored token pair, initialization must not need credentials or
// any network round-trip, so these tests run fully offline.

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_use_builds_exactly_one_client() {
    let path = temp_token_file("concurrent");
    seed_tokens(&path).await;

    let session = Session::new(Config {
        credentials: None,
        token_file: path.clone(),
    });

    let (a, b, c) = tokio::join!(session.client(), session.client(), session.client());
    let a = a.unwrap();
    let b = b.unwrap();
    let c = c.unwrap();

    // All callers must observe the same client instance
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(b, c));

    cleanup(&path);
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let path = temp_token_file("idempotent");
    seed_tokens(&path).await;

    let session = Session::new(Config {
        credentials: None,
        token_file: path.clone(),
    });

    session.init().await.unwrap();
    session.init().await.unwrap();

    cleanup(&path);
}

#[tokio::test]
async fn test_init_without_credentials_or_tokens_fails() {
    let path = temp_token_file("no-creds");

    let session = Session::new(Config {
        credentials: None,
        token_file: path,
    });

    let err = session.init().await.unwrap_err();
    assert!(matches!(err, AuthError::MissingCredentials));
}

#[tokio::test]
async fn test_empty_search_fails_before_initialization() {
    let path = temp_token_file("empty-search");

    // No stored tokens and no credentials: if the empty query were
    // checked after initialization, this would fail with
    // MissingCredentials instead of EmptyQuery.
    let session = Session::new(Config {
        credentials: None,
        token_file: path,
    });

    let err = session.search_tracks(None, None).await.unwrap_err();
    assert!(matches!(err, CommandError::EmptyQuery));

    let err = session
        .search_tracks(Some(""), Some(""))
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::EmptyQuery));
}
