//! Test fixtures for registry integration tests

use std::sync::Arc;

use registry::{EngineerService, InMemoryStore};
use shared::{CertificationLevel, EngineerDraft};

/// Service over a fresh in-memory store
pub fn create_test_service() -> EngineerService<InMemoryStore> {
    EngineerService::new(Arc::new(InMemoryStore::new()))
}

/// Draft for a named engineer
pub fn engineer_draft(
    name: &str,
    email: &str,
    hourly_rate: f64,
    level: CertificationLevel,
) -> EngineerDraft {
    EngineerDraft {
        name: name.to_string(),
        email: email.to_string(),
        specialty: "Cloud".to_string(),
        hourly_rate,
        certification_level: level,
    }
}
