//! HTTP API server for the command relay

pub mod command;
pub mod health;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::relay::CommandRelay;
use crate::Result;

/// Information about the configured completion model
#[derive(Clone, Debug, serde::Serialize)]
pub struct ModelInfo {
    /// Model identifier
    pub model: String,
    /// Whether the completion upstream has credentials
    pub configured: bool,
}

/// Shared state for API handlers
pub struct ApiState {
    /// The command relay
    pub relay: CommandRelay,
    /// Reported by `/health`
    pub model_info: ModelInfo,
}

/// API server
pub struct ApiServer {
    state: Arc<ApiState>,
    port: u16,
}

impl ApiServer {
    /// Create an API server
    #[must_use]
    pub fn new(relay: CommandRelay, model_info: ModelInfo, port: u16) -> Self {
        Self {
            state: Arc::new(ApiState { relay, model_info }),
            port,
        }
    }

    /// Build the router with all routes
    #[must_use]
    pub fn router(state: Arc<ApiState>) -> Router {
        // CORS so a browser UI on another origin can call the relay
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(command::router(state.clone()))
            .merge(health::router(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the API server
    ///
    /// # Errors
    ///
    /// Returns error if the server fails to bind or serve
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Config(format!("failed to bind API server: {e}")))?;

        tracing::info!(
            port = self.port,
            model = %self.state.model_info.model,
            "command relay listening"
        );

        axum::serve(listener, Self::router(self.state))
            .await
            .map_err(|e| crate::Error::Config(format!("API server error: {e}")))?;

        Ok(())
    }

    /// Run the API server in a background task
    #[must_use]
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
