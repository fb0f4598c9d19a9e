//! Client-side segment size estimation.
//!
//! Given a segment's rule list and a distribution snapshot, produces an
//! estimated `{count, percentage}` by narrowing the customer total one rule
//! at a time. This is an approximation for rendering a size indicator when
//! the authoritative backend preview is unreachable - never a substitute
//! for a real audience query. Keep callers behind [`estimate`] so a
//! backend-computed count can replace it without touching them.

pub mod retention;

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::{
    RuleKind, RuleOperator, SegmentEstimate, SegmentRule, SegmentationSnapshot,
};

/// Estimates below this many customers are reported as this many.
const MIN_COUNT: u64 = 5;

/// Estimate how many customers match `rules` against `snapshot`.
///
/// Deterministic: identical inputs always produce identical output. Never
/// fails; rules the estimator does not recognize fall back to a default
/// retention instead of erroring.
#[must_use]
pub fn estimate(rules: &[SegmentRule], snapshot: &SegmentationSnapshot) -> SegmentEstimate {
    if rules.is_empty() {
        return SegmentEstimate::EMPTY;
    }

    let mut matching = snapshot.customer_count;
    for rule in rules {
        matching = apply_rule(rule, matching, snapshot);
    }

    let count = matching.max(MIN_COUNT);
    SegmentEstimate {
        count,
        percentage: percentage_of(count, snapshot.customer_count),
    }
}

fn apply_rule(rule: &SegmentRule, matching: u64, snapshot: &SegmentationSnapshot) -> u64 {
    use RuleOperator::{GreaterThan, Is, IsNot};

    match (&rule.kind, rule.operator) {
        (
            RuleKind::ProductCategory
            | RuleKind::Material
            | RuleKind::PreferenceSegment
            | RuleKind::RfmSegment,
            Is | IsNot,
        ) => {
            let label = rule.value.label();
            match distribution_for(&rule.kind, snapshot).get(&label) {
                // An exact distribution entry answers the rule outright.
                Some(&entry) => {
                    if rule.operator == Is {
                        entry
                    } else {
                        snapshot.customer_count.saturating_sub(entry)
                    }
                }
                None => scale(matching, retention::hashed_fraction(&rule.kind, &label)),
            }
        }
        (RuleKind::Purchase, GreaterThan) => match rule.value.as_number() {
            Some(purchases) => scale(matching, retention::purchase_fraction(purchases)),
            None => scale(matching, retention::DEFAULT),
        },
        (RuleKind::Age, Is) => scale(matching, retention::age_fraction(&rule.value.label())),
        (RuleKind::Gender, Is) => {
            let key = format!("Gender_{}", capitalize(&rule.value.label()));
            match snapshot.demographic_segments.get(&key) {
                Some(&entry) => entry,
                None => scale(matching, retention::GENDER_SPLIT),
            }
        }
        _ => scale(matching, retention::DEFAULT),
    }
}

fn distribution_for<'a>(
    kind: &RuleKind,
    snapshot: &'a SegmentationSnapshot,
) -> &'a BTreeMap<String, u64> {
    match kind {
        RuleKind::ProductCategory => &snapshot.category_distribution,
        RuleKind::Material => &snapshot.material_distribution,
        RuleKind::PreferenceSegment => &snapshot.preference_segments,
        _ => &snapshot.rfm_segments,
    }
}

fn scale(count: u64, fraction: Decimal) -> u64 {
    (Decimal::from(count) * fraction)
        .floor()
        .to_u64()
        .unwrap_or(0)
}

fn percentage_of(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = Decimal::from(count) * dec!(100) / Decimal::from(total);
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(100)
        .min(100)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
