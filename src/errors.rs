use std::{io, result::Result as StdResult};

use genversion_config::ConfigError;
use thiserror::Error;

/// Recoverable failures of a generation run. Running out of memory while
/// rendering is not one of them: it aborts the process.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = StdResult<T, GenError>;
