//! Ports: trait seams between the application core and its adapters.

pub mod repository;
pub mod snapshot;
pub mod store;

pub use repository::SegmentRepository;
pub use snapshot::SnapshotSource;
pub use store::SegmentStore;
