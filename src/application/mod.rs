//! Application layer: snapshot cache, orchestration service, and wiring.

pub mod cache;
pub mod service;

use std::sync::Arc;

use crate::adapter::{
    CrmApiClient, FallbackSegmentRepository, FileSegmentStore, LocalSegmentRepository,
    RemoteSegmentRepository, RemoteSnapshotSource,
};
use crate::config::Config;
use crate::error::Result;

pub use cache::SnapshotCache;
pub use service::SegmentService;

/// Wire the standard stack: remote repository first, file-backed local
/// repository as the fallback, one shared snapshot cache.
pub fn bootstrap(config: &Config) -> Result<SegmentService> {
    let client = Arc::new(CrmApiClient::new(&config.api)?);

    let snapshots = Arc::new(SnapshotCache::new(Arc::new(RemoteSnapshotSource::new(
        Arc::clone(&client),
    ))));

    let remote = RemoteSegmentRepository::new(client);
    let local = LocalSegmentRepository::new(
        FileSegmentStore::new(config.storage.segments_file()),
        Arc::clone(&snapshots),
    );
    let repository =
        FallbackSegmentRepository::new(Box::new(remote), Box::new(local));

    Ok(SegmentService::new(Box::new(repository), snapshots))
}
