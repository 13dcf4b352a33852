//! JSON-file draft store
//!
//! One document per floor under a base directory, holding the draft and
//! active records side by side. Writes go through a temp file and rename
//! so a crashed save never leaves a torn document behind.

use super::{DraftStore, StoreError, StoreResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{DraftReceipt, DraftRecord, LayoutSnapshot};
use shared::util::now_millis;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FloorDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    draft: Option<DraftRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<DraftRecord>,
}

/// Draft store persisting each floor as `<dir>/<floor_id>.json`
#[derive(Debug, Clone)]
pub struct JsonFileDraftStore {
    dir: PathBuf,
}

impl JsonFileDraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn floor_path(&self, floor_id: &str) -> PathBuf {
        self.dir.join(format!("{floor_id}.json"))
    }

    async fn read_document(&self, floor_id: &str) -> StoreResult<Option<FloorDocument>> {
        let path = self.floor_path(floor_id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, floor_id: &str, doc: &FloorDocument) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.floor_path(floor_id);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DraftStore for JsonFileDraftStore {
    async fn load_draft(&self, floor_id: &str) -> StoreResult<Option<DraftRecord>> {
        Ok(self
            .read_document(floor_id)
            .await?
            .and_then(|doc| doc.draft))
    }

    async fn save_draft(
        &self,
        floor_id: &str,
        layout: &LayoutSnapshot,
        _version: i64,
    ) -> StoreResult<DraftReceipt> {
        let mut doc = self.read_document(floor_id).await?.unwrap_or_default();
        let version = doc.draft.as_ref().map(|d| d.version).unwrap_or(0) + 1;
        let updated_at = now_millis();
        doc.draft = Some(DraftRecord {
            layout: layout.clone(),
            version,
            updated_at,
        });
        self.write_document(floor_id, &doc).await?;
        tracing::debug!(floor_id = %floor_id, version, path = %self.floor_path(floor_id).display(), "Draft saved");
        Ok(DraftReceipt {
            version,
            updated_at,
        })
    }

    async fn activate(&self, floor_id: &str, expect_version: i64) -> StoreResult<()> {
        let mut doc = self
            .read_document(floor_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(floor_id.to_string()))?;
        let draft = doc
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
        doc.active = Some(active);
        self.write_document(floor_id, &doc).await?;
        tracing::info!(floor_id = %floor_id, version = expect_version, "Draft activated");
        Ok(())
    }

    async fn load_active(&self, floor_id: &str) -> StoreResult<Option<DraftRecord>> {
        Ok(self
            .read_document(floor_id)
            .await?
            .and_then(|doc| doc.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{FloorTable, TableShape};

    fn layout_with_table() -> LayoutSnapshot {
        LayoutSnapshot {
            tables: vec![FloorTable {
                id: "T1".to_string(),
                x: 100.0,
                y: 100.0,
                w: 80.0,
                h: 80.0,
                rotation: 0.0,
                shape: TableShape::Round,
                capacity: 4,
                seats: 4,
                label: None,
                zone_id: None,
                child_ids: None,
                metadata: serde_json::Map::new(),
            }],
            zones: vec![],
        }
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileDraftStore::new(dir.path());
        let layout = layout_with_table();

        let receipt = store.save_draft("floor-1", &layout, 0).await.unwrap();
        assert_eq!(receipt.version, 1);

        let loaded = store.load_draft("floor-1").await.unwrap().unwrap();
        assert_eq!(loaded.layout, layout);
        assert_eq!(loaded.version, 1);
    }

    #[tokio::test]
    async fn test_versions_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let layout = layout_with_table();
        {
            let store = JsonFileDraftStore::new(dir.path());
            store.save_draft("floor-1", &layout, 0).await.unwrap();
        }
        let store = JsonFileDraftStore::new(dir.path());
        let receipt = store.save_draft("floor-1", &layout, 0).await.unwrap();
        assert_eq!(receipt.version, 2);
    }

    #[tokio::test]
    async fn test_activate_checks_version() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileDraftStore::new(dir.path());
        let layout = layout_with_table();
        let receipt = store.save_draft("floor-1", &layout, 0).await.unwrap();

        let err = store.activate("floor-1", receipt.version + 5).await.unwrap_err();
        assert!(matches!(err, StoreError::VersionConflict { .. }));

        store.activate("floor-1", receipt.version).await.unwrap();
        let active = store.load_active("floor-1").await.unwrap().unwrap();
        assert_eq!(active.layout, layout);
    }

    #[tokio::test]
    async fn test_activate_unknown_floor() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileDraftStore::new(dir.path());
        let err = store.activate("floor-9", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_corrupt_document_surfaces_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileDraftStore::new(dir.path());
        tokio::fs::create_dir_all(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("floor-1.json"), b"not json")
            .await
            .unwrap();

        let err = store.load_draft("floor-1").await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
