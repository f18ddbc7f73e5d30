use crate::AppState;
use crate::api::error::{ApiError, Result as ApiResult};

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use log::info;
use xlu_core::{CoreError, Reconciler};
use xlu_sheet::{USER_LAYOUT, XLSX_CONTENT_TYPE};

/// Name of the multipart field carrying the workbook.
pub const FILE_FIELD: &str = "file";

struct UploadedFile {
    file_name: Option<String>,
    bytes: Bytes,
}

/// Upsert users from an xlsx workbook (POST /upload)
///
/// Each data row updates the user with the same id, else the first user with
/// the same non-blank email, else creates a new user. Rows are applied in
/// order and there is no rollback when a later row fails.
pub async fn upload_users(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<String> {
    let upload = read_file_field(&mut multipart).await?;

    info!(
        "Processing upload {} ({} bytes)",
        upload.file_name.as_deref().unwrap_or("<unnamed>"),
        upload.bytes.len()
    );

    let rows = xlu_sheet::decode(&upload.bytes, USER_LAYOUT)?;

    let store = state.users();
    let summary = Reconciler::new(&store)
        .apply_all(rows.map(|row| row.map_err(CoreError::from)))
        .await?;

    Ok(summary.to_string())
}

/// Find the `file` part, rejecting anything not declared as xlsx before
/// reading its body.
async fn read_file_field(multipart: &mut Multipart) -> ApiResult<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if field.content_type() != Some(XLSX_CONTENT_TYPE) {
            return Err(ApiError::not_excel());
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(UploadedFile { file_name, bytes });
    }

    Err(ApiError::bad_request(format!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}
