//! Helpers for inspecting generated workbooks and archives in tests.

#![allow(clippy::unwrap_used)]

use std::io::{Cursor, Read};

use zip::ZipArchive;

/// Names of all entries in a ZIP container, in archive order.
pub fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect::<Vec<_>>()
}

/// Raw bytes of one entry of a ZIP container.
pub fn entry_bytes(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    out
}

/// One XML part of an XLSX workbook, as text.
pub fn xlsx_part(bytes: &[u8], part: &str) -> String {
    String::from_utf8(entry_bytes(bytes, part)).unwrap()
}

/// Number of rows written to the first worksheet.
pub fn xlsx_row_count(bytes: &[u8]) -> usize {
    xlsx_part(bytes, "xl/worksheets/sheet1.xml")
        .matches("<row ")
        .count()
}
