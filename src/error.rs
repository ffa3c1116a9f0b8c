// src/error.rs
use thiserror::Error;
use crate::core::ConfigError;
use crate::generators::GenerationError;
use crate::words::WordListError;

// Everything the nzpass binary can fail with
#[derive(Debug, Error)]
pub enum PassgenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Word list error: {0}")]
    WordList(#[from] WordListError),

    #[error("Policy file error: {0}")]
    PolicyFile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PassgenError>;
