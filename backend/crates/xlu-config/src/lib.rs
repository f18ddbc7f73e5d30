mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

const CONFIG_DIR_ENV: &str = "XLU_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".xlu";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;
const MIN_UPLOAD_MAX_BYTES: usize = 1024;
const MAX_UPLOAD_MAX_BYTES: usize = 256 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
