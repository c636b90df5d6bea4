//! Error types for recettes-export

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for recettes-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the download bundle
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The recipe's static document is not on disk.
    #[error("Erreur : le fichier {} est introuvable.", .path.display())]
    DocumentNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Workbook generation failed.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// A quantity could not be written as a spreadsheet number.
    #[error("Quantity error: {0}")]
    Quantity(#[from] rust_decimal::Error),

    /// Archive writing failed.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Reading the document failed for a reason other than absence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a document-not-found error.
    pub fn document_not_found(path: impl Into<PathBuf>) -> Self {
        Error::DocumentNotFound { path: path.into() }
    }

    /// Whether this error means the recipe document is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DocumentNotFound { .. })
    }
}
