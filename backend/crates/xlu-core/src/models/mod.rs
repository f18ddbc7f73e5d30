pub mod sheet_row;
pub mod user_record;
