//! Error types for honord.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HonorError {
    #[error("Required parameter `{0}` is missing")]
    MissingParameter(&'static str),

    #[error("Invalid request format: should be \"phrase:true\" or \"phrase:false\"")]
    InvalidSetFormat,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<rusqlite::Error> for HonorError {
    fn from(err: rusqlite::Error) -> Self {
        HonorError::StoreUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for HonorError {
    fn from(err: std::io::Error) -> Self {
        HonorError::StoreUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for HonorError {
    fn from(err: serde_json::Error) -> Self {
        HonorError::StoreUnavailable(err.to_string())
    }
}
