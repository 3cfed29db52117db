use spotify_nvim::types::UriSelection;
use spotify_nvim::utils::{build_search_query, generate_state};

#[test]
fn test_build_search_query_artist_only() {
    let query = build_search_query(Some("Radiohead"), None);
    assert_eq!(query.as_deref(), Some("artist:Radiohead "));
}

#[test]
fn test_build_search_query_track_only() {
    let query = build_search_query(None, Some("Karma Police"));
    assert_eq!(query.as_deref(), Some("track:Karma Police "));
}

#[test]
fn test_build_search_query_both_fields() {
    let query = build_search_query(Some("Radiohead"), Some("Karma Police"));
    assert_eq!(query.as_deref(), Some("artist:Radiohead track:Karma Police "));
}

#[test]
fn test_build_search_query_without_fields_is_none() {
    assert_eq!(build_search_query(None, None), None);

    // Empty strings count as absent filters
    assert_eq!(build_search_query(Some(""), None), None);
    assert_eq!(build_search_query(Some(""), Some("")), None);
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 16 characters
    assert_eq!(state.len(), 16);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_single_uri_equals_one_element_list() {
    let single = UriSelection::One("spotify:track:123".to_string());
    let list = UriSelection::Many(vec!["spotify:track:123".to_string()]);

    assert_eq!(single.into_uris(), list.into_uris());
}

#[test]
fn test_uri_selection_preserves_order() {
    let uris = vec![
        "spotify:track:123".to_string(),
        "spotify:track:456".to_string(),
    ];
    assert_eq!(UriSelection::Many(uris.clone()).into_uris(), uris);
}

#[test]
fn test_uri_selection_deserializes_untagged() {
    let single: UriSelection = serde_json::from_str(r#""spotify:track:123""#).unwrap();
    assert_eq!(single, UriSelection::One("spotify:track:123".to_string()));

    let many: UriSelection = serde_json::from_str(r#"["spotify:track:123"]"#).unwrap();
    assert_eq!(
        many,
        UriSelection::Many(vec!["spotify:track:123".to_string()])
    );

    // Both shapes end up as the same URI list downstream
    assert_eq!(
        serde_json::from_str::<UriSelection>(r#""spotify:track:123""#)
            .unwrap()
            .into_uris(),
        serde_json::from_str::<UriSelection>(r#"["spotify:track:123"]"#)
            .unwrap()
            .into_uris(),
    );
}
