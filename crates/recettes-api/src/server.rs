//! Router assembly and server lifecycle.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use recettes_core::Calculator;
use recettes_export::DocumentStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::routes;
use crate::Result;

/// Read-only state shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    calculator: Arc<Calculator>,
    documents: Arc<DocumentStore>,
}

impl AppState {
    /// Create state from its parts.
    pub fn new(calculator: Calculator, documents: DocumentStore) -> Self {
        Self {
            calculator: Arc::new(calculator),
            documents: Arc::new(documents),
        }
    }

    /// The quantity calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The recipe document store.
    pub fn documents(&self) -> &Arc<DocumentStore> {
        &self.documents
    }
}

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/form", get(routes::form))
        .route("/submit", post(routes::submit))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Recettes HTTP server
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a server over the built-in catalog and coefficient table.
    pub fn new(config: ServerConfig) -> Self {
        let documents = DocumentStore::new(config.documents_dir.clone());
        Self {
            state: AppState::new(Calculator::builtin(), documents),
            config,
        }
    }

    /// The application router.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        self.check_documents();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }

    /// Warn about recipes whose document is missing; they will answer 404.
    fn check_documents(&self) {
        let documents = self.state.documents();
        if !documents.root().is_dir() {
            tracing::warn!(
                dir = %documents.root().display(),
                "documents directory not found; every submission will answer 404"
            );
            return;
        }
        for name in self.state.calculator().catalog().names() {
            if !documents.contains(name) {
                tracing::warn!(
                    recipe = name,
                    path = %documents.document_path(name).display(),
                    "recipe document missing"
                );
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
