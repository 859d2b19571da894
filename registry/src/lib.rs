//! Engineer registry service
//!
//! This library provides an in-memory engineer record store behind a trait
//! seam, a service layer for the registry use cases, and an HTTP surface
//! for clients.

pub mod core;
pub mod error;
pub mod server_impl;
pub mod services;
pub mod traits;
pub mod web;

// Re-export main types
pub use core::EngineerService;
pub use error::{ServerError, ServerResult};
pub use server_impl::RegistryServer;

// Re-export trait definitions
pub use traits::EngineerStore;

// Re-export service implementations
pub use services::InMemoryStore;
