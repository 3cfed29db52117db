use rand::{Rng, distr::Alphanumeric};

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Builds the `field:value` search query from the provided filters.
/// Returns `None` when both filters are absent or empty; the trailing
/// space after the last token is accepted by the search endpoint.
pub fn build_search_query(artist: Option<&str>, track: Option<&str>) -> Option<String> {
    let mut query = String::new();

    if let Some(artist) = artist.filter(|a| !a.is_empty()) {
        query.push_str(&format!("artist:{} ", artist));
    }
    if let Some(track) = track.filter(|t| !t.is_empty()) {
        query.push_str(&format!("track:{} ", track));
    }

    if query.is_empty() { None } else { Some(query) }
}
