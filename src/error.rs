// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal import failures. Bad rows and a corrupt prior artifact never land here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
