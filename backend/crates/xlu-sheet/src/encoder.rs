//! Write user rows to xlsx bytes

use crate::{Column, ColumnLayout, Result, USERS_SHEET_NAME};

use log::debug;
use rust_xlsxwriter::{Workbook, Worksheet};
use xlu_core::SheetRow;

/// Encode rows as a single-sheet workbook.
///
/// Row 0 holds the layout headers; ids are written as numeric cells and
/// empty text fields are left as blank cells.
pub fn encode<I>(rows: I, layout: ColumnLayout) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = SheetRow>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(USERS_SHEET_NAME)?;

    for (col, header) in layout.headers().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    let mut written = 0u32;
    for row in rows {
        written += 1;
        write_row(worksheet, written, &row, layout)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!("Encoded {} rows into {} bytes", written, bytes.len());

    Ok(bytes)
}

fn write_row(ws: &mut Worksheet, row: u32, values: &SheetRow, layout: ColumnLayout) -> Result<()> {
    for (col, column) in layout.columns() {
        match column {
            Column::Id => {
                if let Some(id) = values.id {
                    ws.write_number(row, col, id as f64)?;
                }
            }
            Column::Username => write_text(ws, row, col, &values.username)?,
            Column::City => write_text(ws, row, col, &values.city)?,
            Column::Email => write_text(ws, row, col, &values.email)?,
        }
    }
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<()> {
    if !value.is_empty() {
        ws.write_string(row, col, value)?;
    }
    Ok(())
}
