//! XLSX rendering of ingredient rows.
//!
//! ```text
//! Sheet: Ingrédients
//! | Ingrédient          | Quantité totale |
//! |---------------------|-----------------|
//! | Semoule (g)         | 270             |
//! | Huile d'olive (cl)  | 6               |
//! ```

use recettes_core::IngredientRow;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::Result;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Ingrédients";

/// Header row, in column order.
pub const HEADERS: [&str; 2] = ["Ingrédient", "Quantité totale"];

/// Render rows into an XLSX workbook held entirely in memory.
///
/// The header row is always written, so an empty slice yields a
/// header-only sheet.
pub fn export(rows: &[IngredientRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(1, 16)?;

    for (col, title) in (0u16..).zip(HEADERS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        sheet.write_string(r, 0, &row.label)?;
        sheet.write_number(r, 1, f64::try_from(row.quantity)?)?;
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(rows = rows.len(), bytes = bytes.len(), "rendered spreadsheet");
    Ok(bytes)
}
