//! In-memory draft store
//!
//! Reference semantics for the remote contract, used by tests and demos.
//! Unlike the engine, the store is shared across sessions, hence the lock.

use super::{DraftStore, StoreError, StoreResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{DraftReceipt, DraftRecord, LayoutSnapshot};
use shared::util::now_millis;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct FloorRecord {
    draft: Option<DraftRecord>,
    active: Option<DraftRecord>,
}

/// Draft store backed by a process-local map
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    floors: RwLock<HashMap<String, FloorRecord>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftStore for MemoryDraftStore {
    async fn load_draft(&self, floor_id: &str) -> StoreResult<Option<DraftRecord>> {
        let floors = self.floors.read();
        Ok(floors.get(floor_id).and_then(|f| f.draft.clone()))
    }

    async fn save_draft(
        &self,
        floor_id: &str,
        layout: &LayoutSnapshot,
        _version: i64,
    ) -> StoreResult<DraftReceipt> {
        let mut floors = self.floors.write();
        let floor = floors.entry(floor_id.to_string()).or_default();
        // Server-assigned version: one past the stored draft, whatever the
        // client believed its version was
        let version = floor.draft.as_ref().map(|d| d.version).unwrap_or(0) + 1;
        let updated_at = now_millis();
        floor.draft = Some(DraftRecord {
            layout: layout.clone(),
            version,
            updated_at,
        });
        tracing::debug!(floor_id = %floor_id, version, "Draft saved");
        Ok(DraftReceipt {
            version,
            updated_at,
        })
    }

    async fn activate(&self, floor_id: &str, expect_version: i64) -> StoreResult<()> {
        let mut floors = self.floors.write();
        let floor = floors
            .get_mut(floor_id)
            .ok_or_else(|| StoreError::NotFound(floor_id.to_string()))?;
        let draft = floor
            .draft
            .as_ref()
            .ok_or_else(|| StoreError::NotFound(floor_id.to_string()))?;
        if draft.version != expect_version {
            return Err(StoreError::VersionConflict {
                expected: expect_version,
                actual: draft.version,
            });
        }
        let mut active = draft.clone();
        active.updated_at = now_millis();
        floor.active = Some(active);
        tracing::info!(floor_id = %floor_id, version = expect_version, "Draft activated");
        Ok(())
    }

    async fn load_active(&self, floor_id: &str) -> StoreResult<Option<DraftRecord>> {
        let floors = self.floors.read();
        Ok(floors.get(floor_id).and_then(|f| f.active.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_draft() {
        let store = MemoryDraftStore::new();
        assert!(store.load_draft("floor-1").await.unwrap().is_none());
        assert!(store.load_active("floor-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_assigns_monotonic_versions() {
        let store = MemoryDraftStore::new();
        let layout = LayoutSnapshot::default();

        let first = store.save_draft("floor-1", &layout, 0).await.unwrap();
        assert_eq!(first.version, 1);

        // Client-claimed version is ignored
        let second = store.save_draft("floor-1", &layout, 99).await.unwrap();
        assert_eq!(second.version, 2);
    }

    #[tokio::test]
    async fn test_activate_promotes_draft() {
        let store = MemoryDraftStore::new();
        let layout = LayoutSnapshot::default();
        let receipt = store.save_draft("floor-1", &layout, 0).await.unwrap();

        store.activate("floor-1", receipt.version).await.unwrap();
        let active = store.load_active("floor-1").await.unwrap().unwrap();
        assert_eq!(active.version, receipt.version);
        assert_eq!(active.layout, layout);
    }

    #[tokio::test]
    async fn test_activate_rejects_stale_version() {
        let store = MemoryDraftStore::new();
        let layout = LayoutSnapshot::default();
        store.save_draft("floor-1", &layout, 0).await.unwrap();
        let receipt = store.save_draft("floor-1", &layout, 0).await.unwrap();

        let err = store.activate("floor-1", receipt.version - 1).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::VersionConflict {
                expected: 1,
                actual: 2
            }
        ));
        assert!(store.load_active("floor-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_activate_unknown_floor() {
        let store = MemoryDraftStore::new();
        let err = store.activate("floor-9", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
