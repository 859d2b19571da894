//! Service implementations
//!
//! Real implementations of the store trait for production use

pub mod memory_store;

// Re-export service implementations
pub use memory_store::InMemoryStore;

#[cfg(test)]
pub mod tests;
