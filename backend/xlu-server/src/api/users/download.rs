use crate::AppState;
use crate::api::error::{ApiError, Result as ApiResult};

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::header;
use log::info;
use xlu_core::{CoreError, SheetRow, UserStore};
use xlu_sheet::USER_LAYOUT;

pub const DOWNLOAD_FILENAME: &str = "users.xlsx";

/// Export every user as an xlsx workbook (GET /download-users-excel)
pub async fn download_users(State(state): State<AppState>) -> ApiResult<Response> {
    let store = state.users();
    let users = UserStore::find_all(&store).await.map_err(generating_error)?;

    let count = users.len();
    let bytes = xlu_sheet::encode(users.into_iter().map(SheetRow::from), USER_LAYOUT)
        .map_err(|e| generating_error(CoreError::from(e)))?;

    info!("Exported {} users ({} bytes)", count, bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", DOWNLOAD_FILENAME),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[track_caller]
fn generating_error(e: CoreError) -> ApiError {
    ApiError::processing(format!("Error generating file: {}", e.message()))
}
