//! HTTP layer exposing the comment form and a JSON submission endpoint.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::submission::Submitter;

#[derive(Clone)]
pub struct AppState {
    pub submitter: Submitter,
}

/// Routes without a bound listener, for serving and for in-process tests.
pub fn router(submitter: Submitter) -> Router {
    let state = AppState { submitter };
    Router::new()
        .route("/", get(routes::index).post(routes::submit_form))
        .route("/api/comments", post(routes::submit_json))
        .route("/healthz", get(routes::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(submitter: Submitter, host: String, port: u16) -> Result<()> {
    let router = router(submitter);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving comment-rater");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "could not listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
