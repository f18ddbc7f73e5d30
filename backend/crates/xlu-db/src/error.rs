use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use xlu_core::CoreError;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    NotFound { id: i64, location: ErrorLocation },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        let message = match e {
            DbError::Sqlx { source, .. } => format!("Database operation failed: {}", source),
            DbError::Migration { message, .. } => format!("Database migration error: {}", message),
            DbError::Initialization { message, .. } => {
                format!("Database initialization error: {}", message)
            }
            DbError::NotFound { id, .. } => format!("User {} not found", id),
        };
        CoreError::store(message)
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
