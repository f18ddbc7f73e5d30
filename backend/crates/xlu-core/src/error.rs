use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        CoreError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message without the capture location, suitable for clients.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Decode { message, .. }
            | CoreError::Store { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
