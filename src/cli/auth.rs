use crate::{
    management::Session,
    spotify::auth::AuthError,
    success, warning,
};

pub async fn auth(session: &Session) {
    match session.init().await {
        Ok(()) => success!("Spotify session initialized!"),
        Err(AuthError::MissingCredentials) => super::missing_credentials(),
        Err(e) => warning!("Initialization failed: {}", e),
    }
}
