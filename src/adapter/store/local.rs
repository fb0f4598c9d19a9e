//! Local segment repository: file-backed CRUD with client-side estimates.
//!
//! Used when the backend is unreachable. Sizes come from the estimator
//! against the cached snapshot, ids and timestamps are assigned here, and
//! persistence is best-effort: a failed save is logged while the in-memory
//! result is still returned, so the caller's view stays consistent within
//! the session.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::application::SnapshotCache;
use crate::domain::{
    Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentPatch, SegmentRule,
};
use crate::error::Result;
use crate::estimator;
use crate::port::{SegmentRepository, SegmentStore};

/// Repository over a [`SegmentStore`], estimating sizes locally.
pub struct LocalSegmentRepository<S> {
    store: S,
    snapshots: Arc<SnapshotCache>,
}

impl<S: SegmentStore> LocalSegmentRepository<S> {
    pub fn new(store: S, snapshots: Arc<SnapshotCache>) -> Self {
        Self { store, snapshots }
    }

    fn persist(&self, segments: &[Segment]) {
        if let Err(e) = self.store.save(segments) {
            warn!(error = %e, "failed to persist segments; keeping in-memory result");
        }
    }
}

#[async_trait]
impl<S: SegmentStore> SegmentRepository for LocalSegmentRepository<S> {
    async fn list(&self) -> Result<Vec<Segment>> {
        self.store.load()
    }

    async fn get(&self, id: &SegmentId) -> Result<Option<Segment>> {
        Ok(self.store.load()?.into_iter().find(|s| &s.id == id))
    }

    async fn create(&self, draft: SegmentDraft) -> Result<Segment> {
        let snapshot = self.snapshots.get_or_load().await;
        let estimate = estimator::estimate(&draft.rules, &snapshot);
        let segment = Segment::from_draft(draft, estimate);

        let mut segments = self.store.load()?;
        segments.push(segment.clone());
        self.persist(&segments);
        Ok(segment)
    }

    async fn update(&self, id: &SegmentId, patch: SegmentPatch) -> Result<Option<Segment>> {
        let mut segments = self.store.load()?;
        let Some(position) = segments.iter().position(|s| &s.id == id) else {
            return Ok(None);
        };

        let snapshot = self.snapshots.get_or_load().await;
        let rules: &[SegmentRule] = patch
            .rules
            .as_deref()
            .unwrap_or(&segments[position].rules);
        let estimate = estimator::estimate(rules, &snapshot);

        segments[position].apply(patch, estimate);
        let updated = segments[position].clone();
        self.persist(&segments);
        Ok(Some(updated))
    }

    async fn delete(&self, id: &SegmentId) -> Result<bool> {
        let mut segments = self.store.load()?;
        let before = segments.len();
        segments.retain(|s| &s.id != id);

        if segments.len() == before {
            return Ok(false);
        }
        self.persist(&segments);
        Ok(true)
    }

    async fn preview(&self, rules: &[SegmentRule]) -> Result<SegmentEstimate> {
        let snapshot = self.snapshots.get_or_load().await;
        Ok(estimator::estimate(rules, &snapshot))
    }
}
