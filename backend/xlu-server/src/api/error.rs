//! REST API error types
//!
//! Every error renders as a plain-text body with an HTTP status code.

use std::panic::Location;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;
use xlu_core::CoreError;

/// Body returned when the uploaded part is not an xlsx workbook.
pub const NOT_EXCEL_MESSAGE: &str = "Please upload an Excel file!";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload is not an Excel workbook (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Upload body over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Decode, store or encode failure (500)
    #[error("Processing failed: {message} {location}")]
    Processing {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_excel() -> Self {
        ApiError::Validation {
            message: NOT_EXCEL_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn processing<S: Into<String>>(message: S) -> Self {
        ApiError::Processing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::PayloadTooLarge { message, .. } => (StatusCode::PAYLOAD_TOO_LARGE, message),
            ApiError::Processing { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, body).into_response()
    }
}

/// Upload failures from decoding or the store
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::processing(format!("Error processing file: {}", e.message()))
    }
}

impl From<xlu_sheet::SheetError> for ApiError {
    #[track_caller]
    fn from(e: xlu_sheet::SheetError) -> Self {
        ApiError::from(CoreError::from(e))
    }
}

/// Broken multipart framing or a body over the upload limit
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                message: e.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::bad_request(format!("Invalid multipart body: {}", e.body_text()))
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
