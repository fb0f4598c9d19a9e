//! Remote-then-local degradation behavior.

mod support;

use std::sync::Arc;

use async_trait::async_trait;
use cohort::adapter::{FallbackSegmentRepository, LocalSegmentRepository, MemoryStore};
use cohort::application::{SegmentService, SnapshotCache};
use cohort::domain::{
    RuleOperator, Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentPatch,
    SegmentRule, SegmentationSnapshot,
};
use cohort::error::{ApiError, Error, Result};
use cohort::port::{SegmentRepository, SnapshotSource};
use support::rule;

/// Repository standing in for a dead backend: every call fails.
struct DeadBackend;

#[async_trait]
impl SegmentRepository for DeadBackend {
    async fn list(&self) -> Result<Vec<Segment>> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }

    async fn get(&self, _id: &SegmentId) -> Result<Option<Segment>> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }

    async fn create(&self, _draft: SegmentDraft) -> Result<Segment> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }

    async fn update(&self, _id: &SegmentId, _patch: SegmentPatch) -> Result<Option<Segment>> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }

    async fn delete(&self, _id: &SegmentId) -> Result<bool> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }

    async fn preview(&self, _rules: &[SegmentRule]) -> Result<SegmentEstimate> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }
}

struct UnreachableSource;

#[async_trait]
impl SnapshotSource for UnreachableSource {
    async fn fetch(&self) -> Result<SegmentationSnapshot> {
        Err(Error::Api(ApiError::Unhealthy("connection refused".into())))
    }
}

fn degraded_service() -> SegmentService {
    let snapshots = Arc::new(SnapshotCache::new(Arc::new(UnreachableSource)));
    let local = LocalSegmentRepository::new(MemoryStore::new(), Arc::clone(&snapshots));
    let repository =
        FallbackSegmentRepository::new(Box::new(DeadBackend), Box::new(local));
    SegmentService::new(Box::new(repository), snapshots)
}

#[tokio::test]
async fn crud_degrades_to_the_local_repository() -> anyhow::Result<()> {
    let service = degraded_service();

    let created = service
        .create(SegmentDraft::new(
            "Champions",
            vec![rule("rfm_segment", RuleOperator::Is, "Champions")],
        ))
        .await?;
    assert_eq!(created.customer_count, 100);

    let listed = service.list().await?;
    assert_eq!(listed, vec![created.clone()]);

    let toggled = service.toggle_active(&created.id).await?.unwrap();
    assert!(!toggled.is_active);

    assert!(service.delete(&created.id).await?);
    assert!(service.list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn preview_degrades_to_the_local_estimator() -> anyhow::Result<()> {
    let service = degraded_service();
    let estimate = service
        .preview(&[rule("age", RuleOperator::Is, "25-34")])
        .await?;

    // floor(456 * 0.25) against the built-in snapshot
    assert_eq!(estimate.count, 114);
    assert_eq!(estimate.percentage, 25);
    Ok(())
}

#[tokio::test]
async fn snapshot_loader_never_fails() {
    let cache = SnapshotCache::new(Arc::new(UnreachableSource));
    let snapshot = cache.get_or_load().await;

    assert!(snapshot.customer_count > 0);
    let dimensions = [
        &snapshot.rfm_segments,
        &snapshot.demographic_segments,
        &snapshot.preference_segments,
        &snapshot.category_distribution,
        &snapshot.material_distribution,
    ];
    for dimension in dimensions {
        assert!(!dimension.is_empty());
        assert!(dimension.values().sum::<u64>() > 0);
    }
}

#[tokio::test]
async fn read_errors_are_not_surfaced_to_callers() {
    // Even with both the backend and the snapshot source down, every read
    // path answers deterministically.
    let service = degraded_service();

    assert!(service.list().await.is_ok());
    assert!(service.options().await.rfm_segments.len() > 0);
    assert_eq!(
        service.snapshot(false).await,
        SegmentationSnapshot::fallback()
    );
}
