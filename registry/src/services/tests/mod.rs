//! Service tests for the registry
//!
//! Store invariants and service-layer semantics against the real in-memory
//! implementation.

pub mod memory_store;
