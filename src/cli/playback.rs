use crate::{
    info,
    management::{CommandError, Session},
    spotify::auth::AuthError,
    types::UriSelection,
    warning,
};

pub async fn next_track(session: &Session) {
    info!("Going to next track");
    match session.next_track().await {
        Ok(()) => {}
        Err(CommandError::Auth(AuthError::MissingCredentials)) => super::missing_credentials(),
        Err(e) => warning!("Error going to next track: {}", e),
    }
}

pub async fn previous_track(session: &Session) {
    info!("Going to previous track");
    match session.previous_track().await {
        Ok(()) => {}
        Err(CommandError::Auth(AuthError::MissingCredentials)) => super::missing_credentials(),
        Err(e) => warning!("Error going to previous track: {}", e),
    }
}

pub async fn play(session: &Session, uris: Vec<String>) {
    match session.play(UriSelection::Many(uris.clone())).await {
        Ok(()) => {}
        Err(CommandError::Auth(AuthError::MissingCredentials)) => super::missing_credentials(),
        Err(e) => warning!("Error playing {:?}: {}", uris, e),
    }
}
