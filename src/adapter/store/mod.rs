//! Local persistence adapters.

pub mod file;
pub mod local;
pub mod memory;

pub use file::FileSegmentStore;
pub use local::LocalSegmentRepository;
pub use memory::MemoryStore;
