//! Process-wide memoized snapshot cache.
//!
//! One snapshot per process session: the first `get_or_load` fetches from
//! the configured source and every later call returns the cached copy
//! until `invalidate` or `refresh`. The cache is an explicit object owned
//! by whoever orchestrates segment operations, so tests control its
//! lifecycle directly.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::domain::SegmentationSnapshot;
use crate::port::SnapshotSource;

/// Memoized holder of the current [`SegmentationSnapshot`].
pub struct SnapshotCache {
    source: Arc<dyn SnapshotSource>,
    cached: RwLock<Option<SegmentationSnapshot>>,
}

impl SnapshotCache {
    /// Create an empty cache over `source`.
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
        }
    }

    /// Return the cached snapshot, fetching it on first use.
    ///
    /// Never fails: if the source errors, the built-in fallback snapshot is
    /// returned and cached for the rest of the session. Concurrent first
    /// callers may each issue a fetch; results are idempotent given a fixed
    /// backend state, so the duplicate request is waste, not a bug.
    pub async fn get_or_load(&self) -> SegmentationSnapshot {
        if let Some(snapshot) = self.cached.read().clone() {
            return snapshot;
        }

        // Lock is not held across the await.
        let snapshot = match self.source.fetch().await {
            Ok(snapshot) => {
                info!(
                    customer_count = snapshot.customer_count,
                    "segmentation snapshot loaded"
                );
                snapshot
            }
            Err(e) => {
                warn!(error = %e, "snapshot fetch failed; using built-in snapshot");
                SegmentationSnapshot::fallback()
            }
        };

        *self.cached.write() = Some(snapshot.clone());
        snapshot
    }

    /// Drop the cached snapshot; the next `get_or_load` fetches again.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }

    /// Force a refetch and return the new snapshot.
    pub async fn refresh(&self) -> SegmentationSnapshot {
        self.invalidate();
        self.get_or_load().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{ApiError, Error, Result};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SnapshotSource for CountingSource {
        async fn fetch(&self) -> Result<SegmentationSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Api(ApiError::Unhealthy("down".to_string())));
            }
            let mut snapshot = SegmentationSnapshot::fallback();
            snapshot.customer_count = 1000;
            Ok(snapshot)
        }
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let source = CountingSource::new(false);
        let cache = SnapshotCache::new(source.clone());

        let first = cache.get_or_load().await;
        let second = cache.get_or_load().await;

        assert_eq!(first.customer_count, 1000);
        assert_eq!(first, second);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn source_failure_caches_the_fallback() {
        let source = CountingSource::new(true);
        let cache = SnapshotCache::new(source.clone());

        let snapshot = cache.get_or_load().await;
        assert_eq!(snapshot, SegmentationSnapshot::fallback());

        // The fallback is cached too; the source is not retried.
        let _ = cache.get_or_load().await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let source = CountingSource::new(false);
        let cache = SnapshotCache::new(source.clone());

        let _ = cache.get_or_load().await;
        cache.invalidate();
        let _ = cache.get_or_load().await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn refresh_refetches_in_one_step() {
        let source = CountingSource::new(false);
        let cache = SnapshotCache::new(source.clone());

        let _ = cache.get_or_load().await;
        let refreshed = cache.refresh().await;
        assert_eq!(refreshed.customer_count, 1000);
        assert_eq!(source.calls(), 2);
    }
}
