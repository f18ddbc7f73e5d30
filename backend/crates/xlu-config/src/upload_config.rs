use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPLOAD_MAX_BYTES, MAX_UPLOAD_MAX_BYTES,
    MIN_UPLOAD_MAX_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted request body for `POST /upload`
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bytes < MIN_UPLOAD_MAX_BYTES || self.max_bytes > MAX_UPLOAD_MAX_BYTES {
            return Err(ConfigError::upload(format!(
                "upload.max_bytes must be {}-{}, got {}",
                MIN_UPLOAD_MAX_BYTES, MAX_UPLOAD_MAX_BYTES, self.max_bytes
            )));
        }

        Ok(())
    }
}
