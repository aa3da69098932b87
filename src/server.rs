//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound clients and services, then runs the Axum server until
//! a shutdown signal arrives.

use crate::application::services::{ArticleService, TranslationService};
use crate::config::Config;
use crate::infrastructure::fetcher::HttpPageFetcher;
use crate::infrastructure::translator::build_translator;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Wires services from the configuration into shared state.
///
/// The translator variant is fixed here for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if an HTTP client or the extraction rules cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let translator =
        build_translator(config.azure_settings()).context("Failed to create translator")?;
    tracing::info!("Translator: {}", translator.describe());

    let fetcher = HttpPageFetcher::new(&config.fetch_user_agent, config.fetch_timeout())
        .context("Failed to create page fetcher")?;

    let translation_service = Arc::new(TranslationService::new(translator));
    let article_service = Arc::new(ArticleService::new(
        Arc::new(fetcher),
        translation_service.clone(),
        config.extraction_rules()?,
    ));

    Ok(AppState::new(translation_service, article_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Client construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
