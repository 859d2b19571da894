//! Shared types for the engineer registry
//!
//! Contains the domain model, the domain error taxonomy, and tracing setup.
//! HTTP request/response shapes are kept in the registry crate; only types
//! that describe engineers themselves live here.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::{
    CertificationLevel, CloudPlatform, Engineer, EngineerDraft, EngineerPatch, LevelBreakdown,
    RevenueReport, DEFAULT_HOURS_PER_MONTH,
};
