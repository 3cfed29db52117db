use std::path::PathBuf;

use spotify_nvim::management::TokenStore;
use spotify_nvim::types::TokenPair;

// Helper to build a unique token file path per test
fn temp_token_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("spotify-nvim-test-{}-{}", name, std::process::id()));
    path.push("tokens.json");
    path
}

fn cleanup(path: &PathBuf) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

fn sample_pair() -> TokenPair {
    TokenPair {
        access_token: "BQCaccess".to_string(),
        refresh_token: "AQCrefresh".to_string(),
    }
}

#[tokio::test]
async fn test_persist_then_load_round_trips() {
    let path = temp_token_file("round-trip");
    let store = TokenStore::new(path.clone());

    let pair = sample_pair();
    store.persist(&pair).await.unwrap();

    let loaded = store.load().await;
    assert_eq!(loaded, Some(pair));

    cleanup(&path);
}

#[tokio::test]
async fn test_load_missing_file_is_absent() {
    let path = temp_token_file("missing");
    let store = TokenStore::new(path.clone());

    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn test_load_malformed_json_is_absent() {
    let path = temp_token_file("malformed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "this is not json").unwrap();

    let store = TokenStore::new(path.clone());
    assert_eq!(store.load().await, None);

    cleanup(&path);
}

#[tokio::test]
async fn test_load_with_missing_field_is_absent() {
    let path = temp_token_file("missing-field");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"accessToken": "BQConly"}"#).unwrap();

    let store = TokenStore::new(path.clone());
    assert_eq!(store.load().await, None);

    cleanup(&path);
}

#[tokio::test]
async fn test_persisted_file_uses_wire_field_names() {
    let path = temp_token_file("field-names");
    let store = TokenStore::new(path.clone());

    store.persist(&sample_pair()).await.unwrap();

    // The on-disk document must carry exactly the camelCase field names
    // that earlier versions of the bridge wrote, or stored tokens would
    // stop being readable across upgrades.
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"accessToken\""));
    assert!(raw.contains("\"refreshToken\""));
    assert!(!raw.contains("\"access_token\""));

    cleanup(&path);
}

#[tokio::test]
async fn test_persist_overwrites_previous_pair() {
    let path = temp_token_file("overwrite");
    let store = TokenStore::new(path.clone());

    store.persist(&sample_pair()).await.unwrap();

    let newer = TokenPair {
        access_token: "BQCnewer".to_string(),
        refresh_token: "AQCnewer".to_string(),
    };
    store.persist(&newer).await.unwrap();

    assert_eq!(store.load().await, Some(newer));

    cleanup(&path);
}
