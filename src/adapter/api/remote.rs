//! Remote implementations of the repository and snapshot ports.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::CrmApiClient;
use crate::domain::{
    Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentPatch, SegmentRule,
    SegmentationSnapshot,
};
use crate::error::Result;
use crate::port::{SegmentRepository, SnapshotSource};

/// Segment repository backed by the CRM backend.
pub struct RemoteSegmentRepository {
    client: Arc<CrmApiClient>,
}

impl RemoteSegmentRepository {
    pub fn new(client: Arc<CrmApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SegmentRepository for RemoteSegmentRepository {
    async fn list(&self) -> Result<Vec<Segment>> {
        self.client.list_segments().await
    }

    async fn get(&self, id: &SegmentId) -> Result<Option<Segment>> {
        self.client.get_segment(id).await
    }

    async fn create(&self, draft: SegmentDraft) -> Result<Segment> {
        self.client.create_segment(&draft).await
    }

    async fn update(&self, id: &SegmentId, patch: SegmentPatch) -> Result<Option<Segment>> {
        self.client.update_segment(id, &patch).await
    }

    async fn delete(&self, id: &SegmentId) -> Result<bool> {
        self.client.delete_segment(id).await
    }

    async fn preview(&self, rules: &[SegmentRule]) -> Result<SegmentEstimate> {
        self.client.preview_segment(rules).await
    }
}

/// Snapshot source backed by the CRM backend.
pub struct RemoteSnapshotSource {
    client: Arc<CrmApiClient>,
}

impl RemoteSnapshotSource {
    pub fn new(client: Arc<CrmApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnapshotSource for RemoteSnapshotSource {
    async fn fetch(&self) -> Result<SegmentationSnapshot> {
        self.client.comprehensive_segmentation().await
    }
}
