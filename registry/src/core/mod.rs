//! Core business logic
//!
//! The service layer translating registry use cases into store operations

pub mod service;

pub use service::EngineerService;
