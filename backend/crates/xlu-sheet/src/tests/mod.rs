
use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook};

/// Cell value for hand-built fixtures.
pub(crate) enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    /// Date with a `yyyy-mm-dd` number format
    Date(u16, u8, u8),
    /// Formula with a cached error result such as `#DIV/0!`
    ErrorFormula(&'static str, &'static str),
}

/// Build an xlsx workbook whose first sheet holds each `(row, col, cell)`
/// triple in `cells`.
pub(crate) fn workbook_bytes(cells: &[(u32, u16, Cell)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, col, cell) in cells {
        match cell {
            Cell::Text(s) => {
                worksheet.write_string(*row, *col, *s).unwrap();
            }
            Cell::Number(n) => {
                worksheet.write_number(*row, *col, *n).unwrap();
            }
            Cell::Bool(b) => {
                worksheet.write_boolean(*row, *col, *b).unwrap();
            }
            Cell::Date(year, month, day) => {
                let date = ExcelDateTime::from_ymd(*year, *month, *day).unwrap();
                let format = Format::new().set_num_format("yyyy-mm-dd");
                worksheet
                    .write_datetime_with_format(*row, *col, &date, &format)
                    .unwrap();
            }
            Cell::ErrorFormula(formula, result) => {
                worksheet
                    .write_formula(*row, *col, Formula::new(*formula).set_result(*result))
                    .unwrap();
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

pub(crate) fn header_cells() -> Vec<(u32, u16, Cell)> {
    vec![
        (0, 0, Cell::Text("ID")),
        (0, 1, Cell::Text("Username")),
        (0, 2, Cell::Text("City")),
        (0, 3, Cell::Text("Email")),
    ]
}
