use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Redirect};

use crate::{
    spotify::auth::{self, SharedAuth},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared): Extension<SharedAuth>,
) -> Redirect {
    let Some(code) = params.get("code") else {
        return Redirect::temporary("/#error=missing_code");
    };

    let mut auth = shared.lock().await;
    if params.get("state") != Some(&auth.state) {
        warning!("Callback hit with an unexpected state parameter");
        return Redirect::temporary("/#error=state_mismatch");
    }

    match auth::exchange_code(&auth.credentials, code).await {
        Ok(pair) => {
            // The in-memory pair stays valid even if this fails
            if let Err(e) = auth.store.persist(&pair).await {
                warning!(
                    "Failed to save tokens to {}: {}",
                    auth.store.path().display(),
                    e
                );
            }

            // First successful exchange resolves the flow; later hits
            // only redirect to the success fragment
            if let Some(done) = auth.done.take() {
                let _ = done.send(pair);
            }

            Redirect::temporary("/#success=authorized")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Redirect::temporary("/#error=invalid_token")
        }
    }
}
