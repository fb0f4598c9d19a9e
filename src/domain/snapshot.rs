//! Aggregate customer distribution statistics.
//!
//! A [`SegmentationSnapshot`] is a point-in-time copy of the distribution
//! counts the estimator narrows against. It is fetched once per process
//! from the backend and memoized; when the backend is unreachable a fixed
//! built-in snapshot stands in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Age bracket labels offered by the rule editor.
pub const AGE_BRACKETS: [&str; 6] = ["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];

/// Aggregate distribution counts over the customer base.
///
/// Counts are non-negative by construction. Sums across one dimension
/// approximate `customer_count` but are not guaranteed to reach it; the
/// source data may contain unknowns or overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationSnapshot {
    /// Total customers in the dataset at snapshot time.
    pub customer_count: u64,
    /// RFM value segment label -> customer count.
    #[serde(default)]
    pub rfm_segments: BTreeMap<String, u64>,
    /// Demographic label (e.g. `Gender_Male`) -> customer count.
    #[serde(default)]
    pub demographic_segments: BTreeMap<String, u64>,
    /// Preference segment label -> customer count.
    #[serde(default)]
    pub preference_segments: BTreeMap<String, u64>,
    /// Product category -> customer count.
    #[serde(default)]
    pub category_distribution: BTreeMap<String, u64>,
    /// Product material -> customer count.
    #[serde(default)]
    pub material_distribution: BTreeMap<String, u64>,
}

fn counts(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
    entries
        .iter()
        .map(|(label, count)| ((*label).to_string(), *count))
        .collect()
}

impl SegmentationSnapshot {
    /// Built-in snapshot used when the backend cannot provide one.
    ///
    /// The numbers are illustrative, sized so estimates render plausibly in
    /// the UI; they carry no business meaning.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            customer_count: 456,
            rfm_segments: counts(&[
                ("Champions", 100),
                ("Loyal Customers", 85),
                ("Potential Loyalist", 70),
                ("New Customers", 75),
                ("At Risk", 60),
                ("Hibernating", 66),
            ]),
            demographic_segments: counts(&[
                ("Gender_Male", 210),
                ("Gender_Female", 238),
                ("Gender_Unknown", 8),
            ]),
            preference_segments: counts(&[
                ("Premium Seeker", 120),
                ("Value Shopper", 150),
                ("Trend Follower", 98),
                ("Occasional Buyer", 88),
            ]),
            category_distribution: counts(&[
                ("Apparel", 180),
                ("Footwear", 120),
                ("Accessories", 96),
                ("Home Goods", 60),
            ]),
            material_distribution: counts(&[
                ("Cotton", 170),
                ("Leather", 90),
                ("Wool", 70),
                ("Synthetic", 126),
            ]),
        }
    }
}

/// Label sets a rule editor can offer, derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOptions {
    pub rfm_segments: Vec<String>,
    pub preference_segments: Vec<String>,
    pub categories: Vec<String>,
    pub materials: Vec<String>,
    pub genders: Vec<String>,
    pub age_brackets: Vec<String>,
}

impl SegmentOptions {
    /// Derive the option lists from a snapshot's distribution keys.
    #[must_use]
    pub fn from_snapshot(snapshot: &SegmentationSnapshot) -> Self {
        Self {
            rfm_segments: snapshot.rfm_segments.keys().cloned().collect(),
            preference_segments: snapshot.preference_segments.keys().cloned().collect(),
            categories: snapshot.category_distribution.keys().cloned().collect(),
            materials: snapshot.material_distribution.keys().cloned().collect(),
            genders: snapshot
                .demographic_segments
                .keys()
                .filter_map(|label| label.strip_prefix("Gender_"))
                .map(ToString::to_string)
                .collect(),
            age_brackets: AGE_BRACKETS.iter().map(ToString::to_string).collect(),
        }
    }
}
