#![allow(dead_code)]

//! Test infrastructure for xlu-server API tests

use xlu_config::UploadConfig;
use xlu_server::AppState;

use axum::body::Body;
use http::Request;
use http::header::CONTENT_TYPE;
use rust_xlsxwriter::{Formula, Workbook};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const BOUNDARY: &str = "xlu-test-boundary";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    xlu_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, UploadConfig::default())
}

/// Insert a user directly, bypassing the API
pub async fn create_test_user(pool: &SqlitePool, username: &str, city: &str, email: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, city, email) VALUES (?, ?, ?)")
        .bind(username)
        .bind(city)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to create test user")
        .last_insert_rowid()
}

/// All users as (id, username, city, email), ordered by id
pub async fn fetch_users(pool: &SqlitePool) -> Vec<(i64, String, String, String)> {
    sqlx::query_as("SELECT id, username, city, email FROM users ORDER BY id")
        .fetch_all(pool)
        .await
        .expect("Failed to fetch users")
}

/// Build an xlsx workbook with the standard header and the given data rows.
/// A `None` id leaves the id cell empty.
pub fn users_workbook(rows: &[(Option<i64>, &str, &str, &str)]) -> Vec<u8> {
    users_workbook_with_error_cell(rows, None)
}

/// Like [`users_workbook`], but replaces the cell at `(row, col)` with a
/// `=1/0` formula whose cached result is `#DIV/0!`.
pub fn users_workbook_with_error_cell(
    rows: &[(Option<i64>, &str, &str, &str)],
    error_cell: Option<(u32, u16)>,
) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in ["ID", "Username", "City", "Email"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, (id, username, city, email)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        if let Some(id) = id {
            sheet.write_number(row, 0, *id as f64).unwrap();
        }
        sheet.write_string(row, 1, *username).unwrap();
        sheet.write_string(row, 2, *city).unwrap();
        sheet.write_string(row, 3, *email).unwrap();
    }

    if let Some((row, col)) = error_cell {
        sheet
            .write_formula(row, col, Formula::new("=1/0").set_result("#DIV/0!"))
            .unwrap();
    }

    workbook.save_to_buffer().unwrap()
}

/// Multipart request to POST /upload with a single part
pub fn upload_request(field: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"users.xlsx\"\r\n",
            field
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    use http_body_util::BodyExt;

    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: axum::response::Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
