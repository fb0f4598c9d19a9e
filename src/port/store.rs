//! Store port for whole-list segment persistence.

use crate::domain::Segment;
use crate::error::Result;

/// Durable storage for the full segment list.
///
/// The list is persisted as one document; `save` overwrites prior content.
/// A load-mutate-save sequence is not atomic across callers - the later
/// save wins.
pub trait SegmentStore: Send + Sync {
    /// Return the persisted list.
    fn load(&self) -> Result<Vec<Segment>>;

    /// Persist the full list, replacing prior content.
    fn save(&self, segments: &[Segment]) -> Result<()>;
}
