//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use cohort::domain::{RuleKind, RuleOperator, SegmentRule, SegmentationSnapshot};

/// Snapshot with the given total and no distribution entries.
pub fn bare_snapshot(customer_count: u64) -> SegmentationSnapshot {
    SegmentationSnapshot {
        customer_count,
        rfm_segments: BTreeMap::new(),
        demographic_segments: BTreeMap::new(),
        preference_segments: BTreeMap::new(),
        category_distribution: BTreeMap::new(),
        material_distribution: BTreeMap::new(),
    }
}

/// Shorthand rule constructor for test bodies.
pub fn rule(kind: &str, operator: RuleOperator, value: &str) -> SegmentRule {
    SegmentRule::new(RuleKind::from(kind), operator, value)
}
