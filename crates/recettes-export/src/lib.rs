//! # recettes-export
//!
//! Turns computed ingredient rows into the downloadable bundle:
//! - [`spreadsheet`]: a single-sheet XLSX workbook built in memory
//! - [`archive`]: a ZIP holding that workbook and the recipe's static document

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod error;
pub mod spreadsheet;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{
    archive_file_name, document_entry_name, pack, spreadsheet_entry_name, DocumentStore,
    DOCUMENT_EXTENSION,
};
pub use error::{Error, Result};
pub use spreadsheet::{export, HEADERS, SHEET_NAME};
