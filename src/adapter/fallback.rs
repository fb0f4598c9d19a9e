//! Remote-then-local fallback composition.
//!
//! Every operation is tried against the primary repository first; any
//! error is logged and answered by the secondary instead. The two sides
//! share no transactional guarantee - state written locally while the
//! backend is down is not reconciled later.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{
    Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentPatch, SegmentRule,
};
use crate::error::Result;
use crate::port::SegmentRepository;

/// [`SegmentRepository`] that degrades from `primary` to `secondary`.
pub struct FallbackSegmentRepository {
    primary: Box<dyn SegmentRepository>,
    secondary: Box<dyn SegmentRepository>,
}

impl FallbackSegmentRepository {
    pub fn new(primary: Box<dyn SegmentRepository>, secondary: Box<dyn SegmentRepository>) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl SegmentRepository for FallbackSegmentRepository {
    async fn list(&self) -> Result<Vec<Segment>> {
        match self.primary.list().await {
            Ok(segments) => Ok(segments),
            Err(e) => {
                warn!(error = %e, "backend list failed; using local segments");
                self.secondary.list().await
            }
        }
    }

    async fn get(&self, id: &SegmentId) -> Result<Option<Segment>> {
        match self.primary.get(id).await {
            Ok(segment) => Ok(segment),
            Err(e) => {
                warn!(error = %e, segment = %id, "backend get failed; using local segments");
                self.secondary.get(id).await
            }
        }
    }

    async fn create(&self, draft: SegmentDraft) -> Result<Segment> {
        match self.primary.create(draft.clone()).await {
            Ok(segment) => Ok(segment),
            Err(e) => {
                warn!(error = %e, "backend create failed; storing segment locally");
                self.secondary.create(draft).await
            }
        }
    }

    async fn update(&self, id: &SegmentId, patch: SegmentPatch) -> Result<Option<Segment>> {
        match self.primary.update(id, patch.clone()).await {
            Ok(segment) => Ok(segment),
            Err(e) => {
                warn!(error = %e, segment = %id, "backend update failed; updating locally");
                self.secondary.update(id, patch).await
            }
        }
    }

    async fn delete(&self, id: &SegmentId) -> Result<bool> {
        match self.primary.delete(id).await {
            Ok(deleted) => Ok(deleted),
            Err(e) => {
                warn!(error = %e, segment = %id, "backend delete failed; deleting locally");
                self.secondary.delete(id).await
            }
        }
    }

    async fn preview(&self, rules: &[SegmentRule]) -> Result<SegmentEstimate> {
        match self.primary.preview(rules).await {
            Ok(estimate) => Ok(estimate),
            Err(e) => {
                warn!(error = %e, "backend preview failed; estimating locally");
                self.secondary.preview(rules).await
            }
        }
    }
}
