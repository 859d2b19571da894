//! Domain error taxonomy for the engineer registry

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Engineer {id} not found")]
    NotFound { id: u64 },

    #[error("Engineer with email {email} already exists")]
    DuplicateEmail { email: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
