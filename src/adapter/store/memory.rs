//! In-memory store implementation for testing.

use parking_lot::RwLock;

use crate::domain::Segment;
use crate::error::Result;
use crate::port::SegmentStore;

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    segments: RwLock<Vec<Segment>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `segments`.
    #[must_use]
    pub fn with_segments(segments: Vec<Segment>) -> Self {
        Self {
            segments: RwLock::new(segments),
        }
    }
}

impl SegmentStore for MemoryStore {
    fn load(&self) -> Result<Vec<Segment>> {
        Ok(self.segments.read().clone())
    }

    fn save(&self, segments: &[Segment]) -> Result<()> {
        *self.segments.write() = segments.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::file::seed_segments;
    use super::*;

    #[test]
    fn starts_empty_and_overwrites_on_save() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let segments = seed_segments();
        store.save(&segments).unwrap();
        assert_eq!(store.load().unwrap(), segments);

        store.save(&segments[..1]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
