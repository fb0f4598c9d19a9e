//! Snapshot source port.

use async_trait::async_trait;

use crate::domain::SegmentationSnapshot;
use crate::error::Result;

/// Provider of aggregate distribution statistics.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch a fresh snapshot.
    async fn fetch(&self) -> Result<SegmentationSnapshot>;
}
