//! Error types for recettes-api, and their HTTP rendering.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for recettes-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recettes-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The submitted form could not be turned into a request.
    #[error(transparent)]
    Input(#[from] recettes_core::Error),

    /// Building the download failed.
    #[error(transparent)]
    Export(#[from] recettes_export::Error),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Socket or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A response could not be assembled.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Input(_) => StatusCode::BAD_REQUEST,
            Error::Export(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client.
    pub fn client_message(&self) -> String {
        match self {
            Error::Input(e) => format!("Requête invalide : {e}"),
            Error::Export(e) if e.is_not_found() => e.to_string(),
            _ => "Erreur interne du serveur.".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "request rejected");
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.client_message(),
        )
            .into_response()
    }
}
