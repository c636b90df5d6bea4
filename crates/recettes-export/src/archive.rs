//! ZIP packaging of the spreadsheet and the recipe's static document.
//!
//! Every name derived from a recipe goes through
//! [`normalize_name`](recettes_core::normalize_name), so the document on disk,
//! the archive entries, and the download name always agree:
//!
//! | what               | name                              |
//! |--------------------|-----------------------------------|
//! | document on disk   | `<root>/<normalized>.pdf`         |
//! | spreadsheet entry  | `ingredients_<normalized>.xlsx`   |
//! | document entry     | `<normalized>.pdf`                |
//! | downloaded archive | `<normalized>_recette.zip`        |

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use recettes_core::normalize_name;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::{Error, Result};

/// Extension of the static recipe documents.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Archive entry name for the spreadsheet.
pub fn spreadsheet_entry_name(recipe_name: &str) -> String {
    format!("ingredients_{}.xlsx", normalize_name(recipe_name))
}

/// Archive entry name for the recipe document.
pub fn document_entry_name(recipe_name: &str) -> String {
    format!("{}.{DOCUMENT_EXTENSION}", normalize_name(recipe_name))
}

/// File name offered to the browser for the archive.
pub fn archive_file_name(recipe_name: &str) -> String {
    format!("{}_recette.zip", normalize_name(recipe_name))
}

/// Bundle a spreadsheet and a document into a ZIP archive.
///
/// The document is opened before anything is written; if it does not exist
/// (or is not a regular file) the call fails with
/// [`Error::DocumentNotFound`]. The file handle is released as soon as its
/// bytes are copied into the archive.
pub fn pack(spreadsheet: &[u8], document_path: &Path, recipe_name: &str) -> Result<Vec<u8>> {
    let mut document = match File::open(document_path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::document_not_found(document_path));
        }
        Err(e) => return Err(e.into()),
    };
    if !document.metadata()?.is_file() {
        return Err(Error::document_not_found(document_path));
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    writer.start_file(spreadsheet_entry_name(recipe_name), options)?;
    writer.write_all(spreadsheet)?;

    writer.start_file(document_entry_name(recipe_name), options)?;
    let copied = io::copy(&mut document, &mut writer)?;
    drop(document);

    let bytes = writer.finish()?.into_inner();
    tracing::debug!(
        recipe = recipe_name,
        document = %document_path.display(),
        document_bytes = copied,
        archive_bytes = bytes.len(),
        "packed archive"
    );
    Ok(bytes)
}

/// Directory holding one static document per recipe.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory documents are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the document for `recipe_name` is expected on disk.
    pub fn document_path(&self, recipe_name: &str) -> PathBuf {
        self.root.join(document_entry_name(recipe_name))
    }

    /// Whether the document for `recipe_name` is present.
    pub fn contains(&self, recipe_name: &str) -> bool {
        is_plain_stem(&normalize_name(recipe_name)) && self.document_path(recipe_name).is_file()
    }

    /// Pack `spreadsheet` with the document for `recipe_name`.
    ///
    /// Names that would resolve outside the store's root are reported as
    /// not found without touching the file system.
    pub fn pack_recipe(&self, spreadsheet: &[u8], recipe_name: &str) -> Result<Vec<u8>> {
        let path = self.document_path(recipe_name);
        if !is_plain_stem(&normalize_name(recipe_name)) {
            tracing::warn!(recipe = recipe_name, "rejected document name");
            return Err(Error::document_not_found(path));
        }
        pack(spreadsheet, &path, recipe_name)
    }
}

/// A stem is plain when it names a single file directly inside the root.
fn is_plain_stem(stem: &str) -> bool {
    !stem.is_empty()
        && !stem.contains("..")
        && !stem.contains(['/', '\\', '\0'])
}
