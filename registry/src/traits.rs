//! Store trait definition for dependency injection
//!
//! The storage backend is abstracted behind this trait so the service layer
//! can be tested against a mock and alternate backends can be swapped in at
//! construction time.

use async_trait::async_trait;

use shared::{Engineer, RegistryResult};

/// Engineer record storage contract
///
/// The store is the sole owner of record state and id assignment. Read
/// operations signal absence as `None`/empty, never as an error; `create`
/// and `update` are the only fallible operations.
#[mockall::automock]
#[async_trait]
pub trait EngineerStore: Send + Sync {
    /// Store a new engineer, assigning the next sequential id
    ///
    /// Any caller-supplied id is overwritten. Fails with `DuplicateEmail`
    /// when another record already holds the same email.
    async fn create(&self, engineer: Engineer) -> RegistryResult<Engineer>;

    /// Look up an engineer by id
    async fn get_by_id(&self, id: u64) -> Option<Engineer>;

    /// Look up an engineer by email
    async fn get_by_email(&self, email: &str) -> Option<Engineer>;

    /// Snapshot of all stored engineers in id-assignment order
    async fn get_all(&self) -> Vec<Engineer>;

    /// Replace a stored engineer wholesale
    ///
    /// Fails with `NotFound` when the id is not present.
    async fn update(&self, engineer: Engineer) -> RegistryResult<Engineer>;

    /// Remove an engineer, returning whether a removal occurred
    async fn delete(&self, id: u64) -> bool;

    /// All stored engineers currently marked available
    async fn find_available(&self) -> Vec<Engineer>;
}
