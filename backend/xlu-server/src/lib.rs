pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{download::download_users, upload::upload_users},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
