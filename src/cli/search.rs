use tabled::Table;

use crate::{
    info,
    management::{CommandError, Session},
    spotify::auth::AuthError,
    types::TrackTableRow,
    warning,
};

pub async fn search(session: &Session, artist: Option<String>, track: Option<String>) {
    match session
        .search_tracks(artist.as_deref(), track.as_deref())
        .await
    {
        Ok(tracks) => {
            if tracks.is_empty() {
                info!("No tracks found");
                return;
            }

            let table_rows: Vec<TrackTableRow> = tracks
                .into_iter()
                .map(|t| TrackTableRow {
                    name: t.name,
                    artists: t
                        .artists
                        .iter()
                        .map(|a| a.name.clone())
                        .collect::<Vec<_>>()
                        .join(", "),
                    uri: t.uri,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(CommandError::EmptyQuery) => {
            warning!("No search filters given. Pass --artist and/or --track.")
        }
        Err(CommandError::Auth(AuthError::MissingCredentials)) => super::missing_credentials(),
        Err(e) => warning!(
            "Error searching for artist={:?} track={:?}: {}",
            artist,
            track,
            e
        ),
    }
}
