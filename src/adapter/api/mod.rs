//! CRM backend API adapter.

pub mod client;
pub mod remote;
pub mod types;

pub use client::CrmApiClient;
pub use remote::{RemoteSegmentRepository, RemoteSnapshotSource};
