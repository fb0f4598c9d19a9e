//! Core domain types: segments, rules, and distribution snapshots.

pub mod error;
pub mod id;
pub mod rule;
pub mod segment;
pub mod snapshot;

pub use error::DomainError;
pub use id::SegmentId;
pub use rule::{RuleKind, RuleOperator, RuleValue, SegmentRule};
pub use segment::{Segment, SegmentDraft, SegmentEstimate, SegmentPatch};
pub use snapshot::{SegmentOptions, SegmentationSnapshot, AGE_BRACKETS};
