//! Engine error types
//!
//! Local interactive mistakes (overlap while dragging, a move that leaves
//! the canvas) are never errors: they are deferred to validation or
//! silently rejected. Hard errors are reserved for missing ids and the
//! publish path.

use crate::store::StoreError;
use crate::validation::LayoutViolation;
use thiserror::Error;

/// Editor errors
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("table {0} not found")]
    TableNotFound(String),

    #[error("zone {0} not found")]
    ZoneNotFound(String),

    #[error("no draft found for floor {0}")]
    DraftNotFound(String),

    #[error("layout failed validation with {} violation(s)", .0.len())]
    Validation(Vec<LayoutViolation>),

    #[error("draft version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: i64, actual: i64 },

    #[error("draft store error: {0}")]
    Store(String),
}

impl From<StoreError> for EditorError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(floor_id) => EditorError::DraftNotFound(floor_id),
            StoreError::VersionConflict { expected, actual } => {
                EditorError::VersionConflict { expected, actual }
            }
            StoreError::Serialization(e) => EditorError::Store(e.to_string()),
            StoreError::Io(e) => EditorError::Store(e.to_string()),
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
