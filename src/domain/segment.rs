//! Segment records and their create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::SegmentId;
use super::rule::SegmentRule;

/// Estimated audience size of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentEstimate {
    /// Estimated number of matching customers.
    pub count: u64,
    /// Estimated share of the customer base, 0-100.
    pub percentage: u8,
}

impl SegmentEstimate {
    /// The estimate for a segment with no rules.
    pub const EMPTY: Self = Self {
        count: 0,
        percentage: 0,
    };
}

/// A named, persisted customer segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SegmentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    pub rules: Vec<SegmentRule>,
    /// Last computed audience size.
    pub customer_count: u64,
    /// Last computed audience share, 0-100.
    pub customer_percentage: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Segment {
    /// Materialize a draft into a full record with a fresh ID, timestamps,
    /// and the given size estimate.
    #[must_use]
    pub fn from_draft(draft: SegmentDraft, estimate: SegmentEstimate) -> Self {
        let now = Utc::now();
        Self {
            id: SegmentId::generate(),
            name: draft.name,
            description: draft.description,
            is_active: draft.is_active,
            rules: draft.rules,
            customer_count: estimate.count,
            customer_percentage: estimate.percentage,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this segment, stamping `updated_at` and applying
    /// the re-computed size estimate.
    pub fn apply(&mut self, patch: SegmentPatch, estimate: SegmentEstimate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(rules) = patch.rules {
            self.rules = rules;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.customer_count = estimate.count;
        self.customer_percentage = estimate.percentage;
        self.updated_at = Utc::now();
    }
}

/// Create payload for a new segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub rules: Vec<SegmentRule>,
}

fn default_active() -> bool {
    true
}

impl SegmentDraft {
    /// Create a draft with an empty description, active by default.
    pub fn new(name: impl Into<String>, rules: Vec<SegmentRule>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_active: true,
            rules,
        }
    }

    /// Validate the draft: non-empty name, well-formed rules.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }
}

/// Partial update for an existing segment. `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<SegmentRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl SegmentPatch {
    /// Patch that only toggles the active flag.
    #[must_use]
    pub fn set_active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }
}
