use axum::http::Uri;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::core::extenso::translate;
use crate::domain::model::ExtensoResponse;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ExtensoError, Result};
use crate::utils::validation::parse_path;

/// Every path, whatever the method, is treated as a number to spell.
pub fn router() -> Router {
    Router::new()
        .fallback(extenso_handler)
        .layer(TraceLayer::new_for_http())
}

async fn extenso_handler(uri: Uri) -> std::result::Result<Json<ExtensoResponse>, ExtensoError> {
    let path = uri.path();

    match parse_path(path).and_then(translate) {
        Ok(extenso) => {
            tracing::info!("Request: {}, Response: {}", path, extenso);
            Ok(Json(ExtensoResponse { extenso }))
        }
        Err(e) => {
            tracing::warn!("Rejected {}: {}", path, e.detail());
            Err(e)
        }
    }
}

/// Turns a Go-style `:port` address into one that listens on all interfaces.
pub fn listen_address(address: &str) -> String {
    if address.starts_with(':') {
        format!("0.0.0.0{}", address)
    } else {
        address.to_string()
    }
}

pub struct ExtensoServer<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ExtensoServer<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let address = listen_address(self.config.address());
        let listener = TcpListener::bind(address.as_str()).await?;

        tracing::info!("Starting server at address '{}'", self.config.address());
        tracing::debug!("Bound to {}", listener.local_addr()?);

        serve(listener).await
    }
}

/// Serves on an already bound listener until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

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
