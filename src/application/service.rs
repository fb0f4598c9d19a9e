//! Segment orchestration facade.

use std::sync::Arc;

use crate::domain::{
    Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentOptions, SegmentPatch,
    SegmentRule, SegmentationSnapshot,
};
use crate::error::Result;
use crate::port::SegmentRepository;

use super::cache::SnapshotCache;

/// Everything the CLI needs to work with segments, behind one object.
///
/// Owns the snapshot cache and a repository (normally the remote-then-local
/// fallback composition).
pub struct SegmentService {
    repository: Box<dyn SegmentRepository>,
    snapshots: Arc<SnapshotCache>,
}

impl SegmentService {
    pub fn new(repository: Box<dyn SegmentRepository>, snapshots: Arc<SnapshotCache>) -> Self {
        Self {
            repository,
            snapshots,
        }
    }

    /// List all segments.
    pub async fn list(&self) -> Result<Vec<Segment>> {
        self.repository.list().await
    }

    /// Get one segment by ID.
    pub async fn get(&self, id: &SegmentId) -> Result<Option<Segment>> {
        self.repository.get(id).await
    }

    /// Validate and create a segment.
    pub async fn create(&self, draft: SegmentDraft) -> Result<Segment> {
        draft.validate()?;
        self.repository.create(draft).await
    }

    /// Validate and apply a partial update.
    pub async fn update(&self, id: &SegmentId, patch: SegmentPatch) -> Result<Option<Segment>> {
        if let Some(rules) = &patch.rules {
            for rule in rules {
                rule.validate()?;
            }
        }
        self.repository.update(id, patch).await
    }

    /// Delete a segment. Returns true if it existed.
    pub async fn delete(&self, id: &SegmentId) -> Result<bool> {
        self.repository.delete(id).await
    }

    /// Flip a segment's active flag. Returns `None` for unknown ids.
    pub async fn toggle_active(&self, id: &SegmentId) -> Result<Option<Segment>> {
        let Some(segment) = self.repository.get(id).await? else {
            return Ok(None);
        };
        self.repository
            .update(id, SegmentPatch::set_active(!segment.is_active))
            .await
    }

    /// Estimate the audience size of a rule list.
    pub async fn preview(&self, rules: &[SegmentRule]) -> Result<SegmentEstimate> {
        self.repository.preview(rules).await
    }

    /// Current distribution snapshot, optionally forcing a refetch.
    pub async fn snapshot(&self, refresh: bool) -> SegmentationSnapshot {
        if refresh {
            self.snapshots.refresh().await
        } else {
            self.snapshots.get_or_load().await
        }
    }

    /// Rule-editor option lists derived from the current snapshot.
    pub async fn options(&self) -> SegmentOptions {
        SegmentOptions::from_snapshot(&self.snapshot(false).await)
    }
}
