//! Engineer service layer
//!
//! Orchestrates store operations into the registry's use cases: lifecycle of
//! engineer records, certification management, platform matching, and the
//! revenue projection report. Holds no record state of its own; the store
//! owns every record and every id.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::traits::EngineerStore;
use shared::{
    CertificationLevel, CloudPlatform, Engineer, EngineerDraft, EngineerPatch, LevelBreakdown,
    RegistryError, RegistryResult, RevenueReport, DEFAULT_HOURS_PER_MONTH,
};

/// Service layer over an injected store
#[derive(Clone)]
pub struct EngineerService<S: EngineerStore> {
    store: Arc<S>,
    hours_per_month: u32,
}

impl<S: EngineerStore> EngineerService<S> {
    /// Create a service with the default billable-hours assumption
    pub fn new(store: Arc<S>) -> Self {
        Self::with_hours_per_month(store, DEFAULT_HOURS_PER_MONTH)
    }

    /// Create a service with a custom billable-hours assumption
    pub fn with_hours_per_month(store: Arc<S>, hours_per_month: u32) -> Self {
        Self {
            store,
            hours_per_month,
        }
    }

    /// Create a new engineer from validated input
    ///
    /// The store assigns the id; a `DuplicateEmail` conflict propagates
    /// unchanged.
    pub async fn create_engineer(&self, draft: EngineerDraft) -> RegistryResult<Engineer> {
        let engineer = self.store.create(draft.into_engineer()).await?;
        info!("✅ Created engineer {} ({})", engineer.id, engineer.name);
        Ok(engineer)
    }

    /// Get an engineer by id, failing with `NotFound` when absent
    pub async fn get_engineer(&self, id: u64) -> RegistryResult<Engineer> {
        self.store
            .get_by_id(id)
            .await
            .ok_or(RegistryError::NotFound { id })
    }

    /// All engineers currently in the store
    pub async fn list_engineers(&self) -> Vec<Engineer> {
        self.store.get_all().await
    }

    /// All engineers currently marked available
    pub async fn list_available(&self) -> Vec<Engineer> {
        self.store.find_available().await
    }

    /// Apply a partial update to an engineer
    ///
    /// Only fields present in the patch overwrite the stored record; the
    /// merged record then replaces the stored one wholesale.
    pub async fn update_engineer(&self, id: u64, patch: EngineerPatch) -> RegistryResult<Engineer> {
        let mut engineer = self.get_engineer(id).await?;
        patch.apply(&mut engineer);
        let engineer = self.store.update(engineer).await?;
        info!("✅ Updated engineer {}", engineer.id);
        Ok(engineer)
    }

    /// Delete an engineer, failing with `NotFound` when the id is absent
    ///
    /// The existence check happens before deletion, so the store's boolean
    /// result can no longer be false here and is not surfaced.
    pub async fn delete_engineer(&self, id: u64) -> RegistryResult<()> {
        self.get_engineer(id).await?;
        self.store.delete(id).await;
        info!("✅ Deleted engineer {}", id);
        Ok(())
    }

    /// Add a certification code to an engineer, ignoring duplicates
    pub async fn add_certification(&self, id: u64, cert_code: &str) -> RegistryResult<Engineer> {
        let mut engineer = self.get_engineer(id).await?;
        if engineer.add_certification(cert_code) {
            debug!("🎓 Engineer {} earned {}", id, cert_code);
        }
        self.store.update(engineer).await
    }

    /// Available engineers holding at least one certification for a platform
    pub async fn find_engineers_for_platform(&self, platform: CloudPlatform) -> Vec<Engineer> {
        self.store
            .get_all()
            .await
            .into_iter()
            .filter(|e| e.is_available && e.can_work_on(platform))
            .collect()
    }

    /// Projected monthly revenue over available engineers
    ///
    /// The per-level breakdown lists every certification tier, including
    /// tiers with no members.
    pub async fn revenue_report(&self) -> RevenueReport {
        let engineers = self.store.get_all().await;

        let mut by_level: BTreeMap<CertificationLevel, LevelBreakdown> = CertificationLevel::ALL
            .iter()
            .map(|level| {
                (
                    *level,
                    LevelBreakdown {
                        count: 0,
                        monthly_revenue: 0.0,
                    },
                )
            })
            .collect();

        let mut total_available = 0u32;
        let mut total_revenue = 0.0;

        for engineer in engineers.iter().filter(|e| e.is_available) {
            let revenue = engineer.monthly_revenue(self.hours_per_month);
            total_available += 1;
            total_revenue += revenue;

            let slot = by_level
                .entry(engineer.certification_level)
                .or_insert(LevelBreakdown {
                    count: 0,
                    monthly_revenue: 0.0,
                });
            slot.count += 1;
            slot.monthly_revenue += revenue;
        }

        RevenueReport {
            total_available_engineers: total_available,
            total_monthly_revenue: total_revenue,
            by_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockEngineerStore;

    #[tokio::test]
    async fn test_get_engineer_translates_absence_to_not_found() {
        let mut store = MockEngineerStore::new();
        store.expect_get_by_id().returning(|_| None);

        let service = EngineerService::new(Arc::new(store));

        let err = service.get_engineer(42).await.unwrap_err();
        assert_eq!(err, RegistryError::NotFound { id: 42 });
    }

    #[tokio::test]
    async fn test_delete_engineer_fails_before_touching_store() {
        let mut store = MockEngineerStore::new();
        store.expect_get_by_id().returning(|_| None);
        // delete must not be reached when the record is absent
        store.expect_delete().never();

        let service = EngineerService::new(Arc::new(store));

        let err = service.delete_engineer(7).await.unwrap_err();
        assert_eq!(err, RegistryError::NotFound { id: 7 });
    }

    #[tokio::test]
    async fn test_create_engineer_propagates_duplicate_email() {
        let mut store = MockEngineerStore::new();
        store.expect_create().returning(|engineer| {
            Err(RegistryError::DuplicateEmail {
                email: engineer.email,
            })
        });

        let service = EngineerService::new(Arc::new(store));
        let draft = EngineerDraft {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            specialty: "Cloud".to_string(),
            hourly_rate: 100.0,
            certification_level: CertificationLevel::Mid,
        };

        let err = service.create_engineer(draft).await.unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateEmail {
                email: "a@x.com".to_string()
            }
        );
    }
}
