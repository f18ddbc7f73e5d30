use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use xlu_core::CoreError;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to read workbook: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid cell at row {row}, column {column}: {message} {location}")]
    Cell {
        row: u32,
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write workbook: {source} {location}")]
    Encode {
        source: rust_xlsxwriter::XlsxError,
        location: ErrorLocation,
    },
}

impl SheetError {
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        SheetError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<calamine::XlsxError> for SheetError {
    #[track_caller]
    fn from(source: calamine::XlsxError) -> Self {
        Self::Decode {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for SheetError {
    #[track_caller]
    fn from(source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SheetError> for CoreError {
    #[track_caller]
    fn from(e: SheetError) -> Self {
        let message = match e {
            SheetError::Decode { message, .. } => message,
            SheetError::Cell {
                row,
                column,
                message,
                ..
            } => format!("row {} column {}: {}", row, column, message),
            SheetError::Encode { source, .. } => source.to_string(),
        };
        CoreError::decode(message)
    }
}

pub type Result<T> = StdResult<T, SheetError>;
