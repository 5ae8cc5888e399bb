//! hackair-server
//!
//! HTTP adapter exposing hackAIR data through the JSON dashboard protocol:
//! `/` for health checks, `POST /search` for the target list, and `POST /query`
//! for sensor tables and pollutant series.
#![warn(missing_docs)]

/// Command-line and environment settings.
pub mod cli;
/// Mapping of query errors to HTTP responses.
pub mod error;
/// Dashboard protocol bodies.
pub mod protocol;
mod routes;

use std::sync::Arc;

use hackair::Hackair;

pub use crate::cli::Args;
pub use crate::routes::router;

/// Bind, serve until Ctrl-C, then drain.
///
/// # Errors
/// Returns an error if the client or orchestrator cannot be built, or the
/// listener cannot bind.
pub async fn run(args: Args) -> anyhow::Result<()> {
    let hackair = Hackair::builder()
        .with_provider(Arc::new(args.client()?))
        .config(args.hackair_config())
        .build()?;

    let addr = args.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        location = %args.location,
        base_url = %args.base_url,
        "hackair adapter listening"
    );

    axum::serve(listener, router(hackair))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hackair adapter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
