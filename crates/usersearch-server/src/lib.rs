//! usersearch-server — axum front end for the query engine.

pub mod error;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use usersearch_core::config::ServerConfig;
use usersearch_core::Snapshot;

pub use error::{ApiError, ApiResult};
pub use routes::{router, AppState};

/// Load the dataset, bind, and serve until Ctrl-C.
///
/// A dataset that cannot be read or parsed aborts startup: there is nothing
/// to serve without it.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(&config.dataset)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;
    let records = snapshot.len();
    let state = AppState::new(snapshot, config.access_token.clone())
        .with_filter_policy(config.filter_policy);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        records,
        filter_policy = ?config.filter_policy,
        "usersearch listening"
    );

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("usersearch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
