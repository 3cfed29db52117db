use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::oneshot;

use crate::{Res, api, config, spotify::auth::SharedAuth};

/// Serves the login page and the OAuth routes until `shutdown` fires.
/// The flow signals shutdown right after the completion signal resolves,
/// so the listener handles exactly one successful authorization.
pub async fn start_auth_server(state: SharedAuth, shutdown: oneshot::Receiver<()>) -> Res<()> {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/login", get(api::login).layer(Extension(Arc::clone(&state))))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = SocketAddr::from_str(config::SERVER_ADDR)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.await;
        })
        .await?;
    Ok(())
}
