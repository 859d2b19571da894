//! Tests for the in-memory store

use super::fixtures::*;
use crate::services::InMemoryStore;
use crate::traits::EngineerStore;
use shared::RegistryError;

mod in_memory_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_returns_records_in_assignment_order() {
        let store = InMemoryStore::new();

        for i in 0..5 {
            let engineer = draft(&format!("engineer{}@x.com", i)).into_engineer();
            store.create(engineer).await.unwrap();
        }

        let all = store.get_all().await;
        assert_eq!(all.len(), 5);
        let ids: Vec<u64> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_partial_record() {
        let store = InMemoryStore::new();

        store.create(draft("a@x.com").into_engineer()).await.unwrap();
        let err = store
            .create(draft("a@x.com").into_engineer())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateEmail {
                email: "a@x.com".to_string()
            }
        );
        assert_eq!(store.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none_not_error() {
        let store = InMemoryStore::new();
        assert!(store.get_by_id(1).await.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let store = InMemoryStore::new();
        let created = store.create(draft("a@x.com").into_engineer()).await.unwrap();

        let found = store.get_by_email("a@x.com").await.unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.get_by_email("missing@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reused() {
        let store = InMemoryStore::new();

        let first = store.create(draft("a@x.com").into_engineer()).await.unwrap();
        assert_eq!(first.id, 1);

        assert!(store.delete(first.id).await);
        assert!(store.get_by_id(first.id).await.is_none());

        let second = store.create(draft("b@x.com").into_engineer()).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = InMemoryStore::new();
        assert!(!store.delete(42).await);
    }

    #[tokio::test]
    async fn test_deleting_frees_the_email_for_reuse() {
        let store = InMemoryStore::new();

        let first = store.create(draft("a@x.com").into_engineer()).await.unwrap();
        store.delete(first.id).await;

        let second = store.create(draft("a@x.com").into_engineer()).await.unwrap();
        assert_eq!(second.email, "a@x.com");
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_update_replaces_record_wholesale() {
        let store = InMemoryStore::new();
        let mut engineer = store.create(draft("a@x.com").into_engineer()).await.unwrap();

        engineer.hourly_rate = 150.0;
        engineer.is_available = false;
        let updated = store.update(engineer.clone()).await.unwrap();

        assert_eq!(updated, engineer);
        assert_eq!(store.get_by_id(engineer.id).await.unwrap(), engineer);
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let store = InMemoryStore::new();

        let mut engineer = draft("a@x.com").into_engineer();
        engineer.id = 42;

        let err = store.update(engineer).await.unwrap_err();
        assert_eq!(err, RegistryError::NotFound { id: 42 });
    }

    #[tokio::test]
    async fn test_find_available_filters_unavailable() {
        let store = InMemoryStore::new();

        let available = store.create(draft("a@x.com").into_engineer()).await.unwrap();
        let mut benched = store.create(draft("b@x.com").into_engineer()).await.unwrap();
        benched.is_available = false;
        store.update(benched).await.unwrap();

        let found = store.find_available().await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, available.id);
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_email_store_one_record() {
        let store = InMemoryStore::new();

        let mut handles = vec![];
        for _ in 0..10 {
            let store_clone = store.clone();
            handles.push(tokio::spawn(async move {
                store_clone.create(draft("race@x.com").into_engineer()).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1, "exactly one concurrent create may win");
        assert_eq!(store.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_assign_distinct_ids() {
        let store = InMemoryStore::new();

        let mut handles = vec![];
        for i in 0..10 {
            let store_clone = store.clone();
            handles.push(tokio::spawn(async move {
                store_clone
                    .create(draft(&format!("engineer{}@x.com", i)).into_engineer())
                    .await
            }));
        }

        let mut ids = vec![];
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        ids.sort_unstable();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }
}
