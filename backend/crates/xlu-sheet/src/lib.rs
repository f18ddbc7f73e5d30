//! Spreadsheet codec
//!
//! Converts between xlsx workbook bytes and [`SheetRow`](xlu_core::SheetRow)
//! sequences using a fixed positional column layout.

pub mod column;
pub mod decoder;
pub mod encoder;
pub mod error;

#[cfg(test)]
mod tests;

pub use column::{Column, ColumnLayout, USER_LAYOUT};
pub use decoder::{DecodedRows, decode};
pub use encoder::encode;
pub use error::{Result, SheetError};

/// Media type a client must declare for uploads.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Worksheet name used when encoding.
pub const USERS_SHEET_NAME: &str = "Users";
