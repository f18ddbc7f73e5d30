use crate::ApiError;
use crate::api::error::NOT_EXCEL_MESSAGE;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use http::StatusCode;
use http_body_util::BodyExt;
use xlu_core::CoreError;

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_not_excel_returns_400_with_plain_message() {
    let response = ApiError::not_excel().into_response();

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(body_text(response).await, eq(NOT_EXCEL_MESSAGE));
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Missing multipart field 'file'".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(body_text(response).await, contains_substring("'file'"));
}

#[tokio::test]
async fn test_processing_error_returns_500_without_location() {
    let response = ApiError::processing("Error processing file: boom").into_response();

    assert_that!(response.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body_text(response).await, eq("Error processing file: boom"));
}

#[tokio::test]
async fn test_core_decode_error_maps_to_processing() {
    let error = ApiError::from(CoreError::decode("row 3 column Email: #N/A"));
    let response = error.into_response();

    assert_that!(response.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(
        body_text(response).await,
        eq("Error processing file: row 3 column Email: #N/A")
    );
}

#[tokio::test]
async fn test_core_store_error_maps_to_processing() {
    let error = ApiError::from(CoreError::store("User 7 not found"));

    assert!(matches!(error, ApiError::Processing { .. }));
}

#[test]
fn test_sheet_error_maps_through_core_error() {
    let error = ApiError::from(xlu_sheet::SheetError::decode("not a zip"));

    match error {
        ApiError::Processing { message, .. } => {
            assert_that!(message, eq("Error processing file: not a zip"))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_payload_too_large_returns_413() {
    let error = ApiError::PayloadTooLarge {
        message: "length limit exceeded".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_that!(response.status(), eq(StatusCode::PAYLOAD_TOO_LARGE));
    assert_that!(body_text(response).await, eq("length limit exceeded"));
}
