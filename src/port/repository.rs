//! Repository port for segment CRUD and size previews.
//!
//! The application layer talks to segments exclusively through this trait,
//! so the remote backend, the local file store, and the remote-then-local
//! fallback composition are interchangeable.

use async_trait::async_trait;

use crate::domain::{
    Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentPatch, SegmentRule,
};
use crate::error::Result;

/// CRUD and preview operations over a segment collection.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `update` and `delete` report missing ids as `Ok(None)` / `Ok(false)`,
///   not as errors
/// - There is no transactional guarantee across implementations; callers
///   composing two of them get last-write-wins semantics
#[async_trait]
pub trait SegmentRepository: Send + Sync {
    /// List all segments.
    async fn list(&self) -> Result<Vec<Segment>>;

    /// Get a segment by ID.
    async fn get(&self, id: &SegmentId) -> Result<Option<Segment>>;

    /// Create a segment from a draft, computing its size estimate.
    async fn create(&self, draft: SegmentDraft) -> Result<Segment>;

    /// Merge a patch into a segment and re-estimate its size.
    /// Returns `None` if the id is unknown.
    async fn update(&self, id: &SegmentId, patch: SegmentPatch) -> Result<Option<Segment>>;

    /// Delete a segment by ID. Returns true if the segment existed.
    async fn delete(&self, id: &SegmentId) -> Result<bool>;

    /// Estimate the audience size of a rule list without persisting anything.
    async fn preview(&self, rules: &[SegmentRule]) -> Result<SegmentEstimate>;
}
