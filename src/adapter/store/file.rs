//! File-backed segment store.
//!
//! The entire segment list lives in one JSON document, mirroring how the
//! web client kept it under a single storage key. Writes go through a
//! temp-then-rename so a crash mid-write cannot leave a torn file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{
    RuleKind, RuleOperator, Segment, SegmentDraft, SegmentRule, SegmentationSnapshot,
};
use crate::error::{Result, StoreError};
use crate::estimator;
use crate::port::SegmentStore;

/// Whole-list JSON persistence at a fixed path.
pub struct FileSegmentStore {
    path: PathBuf,
}

impl FileSegmentStore {
    /// Create a store writing to `path`. Nothing is touched until the
    /// first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::WriteFile {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// Two illustrative segments seeded when nothing usable is stored yet.
///
/// Sizes are computed against the built-in snapshot so the numbers stay
/// consistent with what a preview of the same rules would show.
pub fn seed_segments() -> Vec<Segment> {
    let snapshot = SegmentationSnapshot::fallback();
    let drafts = [
        (
            "High-Value Champions",
            "Customers in the Champions RFM segment.",
            SegmentRule::new(RuleKind::RfmSegment, RuleOperator::Is, "Champions"),
        ),
        (
            "Young Professionals",
            "Customers aged 25-34.",
            SegmentRule::new(RuleKind::Age, RuleOperator::Is, "25-34"),
        ),
    ];

    drafts
        .into_iter()
        .map(|(name, description, rule)| {
            let mut draft = SegmentDraft::new(name, vec![rule]);
            draft.description = description.to_string();
            let estimate = estimator::estimate(&draft.rules, &snapshot);
            Segment::from_draft(draft, estimate)
        })
        .collect()
}

impl SegmentStore for FileSegmentStore {
    /// Load never fails: a missing or unparsable file yields the seed list.
    fn load(&self) -> Result<Vec<Segment>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no segment file yet; seeding defaults");
                return Ok(seed_segments());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "segment file unreadable; seeding defaults");
                return Ok(seed_segments());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(segments) => Ok(segments),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "segment file unparsable; seeding defaults");
                Ok(seed_segments())
            }
        }
    }

    fn save(&self, segments: &[Segment]) -> Result<()> {
        let json = serde_json::to_string_pretty(segments).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| self.write_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.write_error(e))?;
        Ok(())
    }
}
