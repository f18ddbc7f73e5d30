//! Read user rows from xlsx bytes

use crate::{Column, ColumnLayout, Result, SheetError};

use std::io::Cursor;
use std::panic::Location;

use calamine::{Data, ExcelDateTime, Range, Reader, Xlsx};
use error_location::ErrorLocation;
use log::debug;
use xlu_core::SheetRow;

/// Open the first worksheet of an xlsx workbook.
///
/// Fails if the bytes are not a readable xlsx workbook or it has no sheets.
/// The returned iterator yields one item per data row, skipping the header.
pub fn decode(bytes: &[u8], layout: ColumnLayout) -> Result<DecodedRows> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::decode("Workbook has no worksheets"))??;

    let last_row = range.end().map(|(row, _)| row);
    debug!("Decoding worksheet with last row index {:?}", last_row);

    Ok(DecodedRows {
        range,
        layout,
        next_row: 1,
        last_row,
    })
}

/// Lazy, one-pass sequence of decoded data rows.
///
/// Rows with no cell in any layout column are skipped. A malformed cell
/// yields an `Err` item for that row.
pub struct DecodedRows {
    range: Range<Data>,
    layout: ColumnLayout,
    next_row: u32,
    last_row: Option<u32>,
}

impl DecodedRows {
    fn cell(&self, row: u32, col: u16) -> Option<&Data> {
        self.range.get_value((row, u32::from(col)))
    }

    fn is_blank(&self, row: u32) -> bool {
        self.layout
            .columns()
            .all(|(col, _)| is_empty_cell(self.cell(row, col)))
    }

    fn read_row(&self, row: u32) -> Result<SheetRow> {
        let mut decoded = SheetRow::default();

        for (col, column) in self.layout.columns() {
            let cell = self.cell(row, col);
            match column {
                Column::Id => decoded.id = read_id(cell, row, column)?,
                Column::Username => decoded.username = read_text(cell, row, column)?,
                Column::City => decoded.city = read_text(cell, row, column)?,
                Column::Email => decoded.email = read_text(cell, row, column)?,
            }
        }

        Ok(decoded)
    }
}

impl Iterator for DecodedRows {
    type Item = Result<SheetRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let last_row = self.last_row?;

        while self.next_row <= last_row {
            let row = self.next_row;
            self.next_row += 1;

            if self.is_blank(row) {
                debug!("Skipping empty row {}", row + 1);
                continue;
            }

            return Some(self.read_row(row));
        }

        None
    }
}

fn is_empty_cell(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Numeric ids are truncated; anything else means "no id".
fn read_id(cell: Option<&Data>, row: u32, column: Column) -> Result<Option<i64>> {
    match cell {
        Some(Data::Int(i)) => Ok(Some(*i)),
        Some(Data::Float(f)) if f.is_finite() => Ok(Some(f.trunc() as i64)),
        Some(Data::Error(e)) => Err(cell_error(row, column, e.to_string())),
        _ => Ok(None),
    }
}

fn read_text(cell: Option<&Data>, row: u32, column: Column) -> Result<String> {
    let text = match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => render_datetime(dt),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => s.clone(),
        Some(Data::Error(e)) => return Err(cell_error(row, column, e.to_string())),
    };

    Ok(text)
}

/// ISO 8601 text; midnight renders as a bare date. Durations keep their
/// serial value.
fn render_datetime(dt: &ExcelDateTime) -> String {
    if !dt.is_datetime() {
        return dt.as_f64().to_string();
    }

    let (year, month, day, hour, min, sec, _) = dt.to_ymd_hms_milli();
    if (hour, min, sec) == (0, 0, 0) {
        format!("{:04}-{:02}-{:02}", year, month, day)
    } else {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            year, month, day, hour, min, sec
        )
    }
}

#[track_caller]
fn cell_error(row: u32, column: Column, message: String) -> SheetError {
    SheetError::Cell {
        row: row + 1,
        column: column.name(),
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
