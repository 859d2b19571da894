//! Registry-process error types

use shared::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Registry error")]
    Registry(#[from] RegistryError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ServerError {
    pub fn config(message: String) -> Self {
        ServerError::Config(message)
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
