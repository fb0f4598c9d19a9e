//! Adapters: concrete implementations of the ports.

pub mod api;
pub mod fallback;
pub mod store;

pub use api::{CrmApiClient, RemoteSegmentRepository, RemoteSnapshotSource};
pub use fallback::FallbackSegmentRepository;
pub use store::{FileSegmentStore, LocalSegmentRepository, MemoryStore};
