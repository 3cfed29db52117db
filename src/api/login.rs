use axum::{Extension, response::Redirect};

use crate::{config, spotify::auth::SharedAuth};

pub async fn login(Extension(shared): Extension<SharedAuth>) -> Redirect {
    let auth = shared.lock().await;

    let auth_url = format!(
        "{spotify_auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}&state={state}",
        spotify_auth_url = config::SPOTIFY_AUTH_URL,
        client_id = auth.credentials.client_id,
        scope = config::SPOTIFY_SCOPE,
        redirect_uri = config::REDIRECT_URI,
        state = auth.state,
    );

    Redirect::temporary(&auth_url)
}
