//! Wire types for the CRM backend API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{SegmentEstimate, SegmentRule, SegmentationSnapshot};

/// Body of the comprehensive segmentation endpoint.
#[derive(Debug, Deserialize)]
pub struct ComprehensiveSegmentationResponse {
    pub customer_count: u64,
    #[serde(default)]
    pub summary: SegmentationSummary,
    #[serde(default)]
    pub details: SegmentationDetails,
}

#[derive(Debug, Default, Deserialize)]
pub struct SegmentationSummary {
    #[serde(default)]
    pub value_based_rfm: BTreeMap<String, u64>,
    #[serde(default)]
    pub demographic: BTreeMap<String, u64>,
    #[serde(default)]
    pub preference: BTreeMap<String, u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SegmentationDetails {
    #[serde(default)]
    pub preference_details: PreferenceDetails,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreferenceDetails {
    #[serde(default)]
    pub category_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub material_distribution: BTreeMap<String, u64>,
}

impl From<ComprehensiveSegmentationResponse> for SegmentationSnapshot {
    fn from(response: ComprehensiveSegmentationResponse) -> Self {
        Self {
            customer_count: response.customer_count,
            rfm_segments: response.summary.value_based_rfm,
            demographic_segments: response.summary.demographic,
            preference_segments: response.summary.preference,
            category_distribution: response.details.preference_details.category_distribution,
            material_distribution: response.details.preference_details.material_distribution,
        }
    }
}

/// Request body of the preview endpoint.
#[derive(Debug, Serialize)]
pub struct PreviewRequest<'a> {
    pub rules: &'a [SegmentRule],
}

/// Response body of the preview endpoint.
#[derive(Debug, Deserialize)]
pub struct PreviewResponse {
    pub count: u64,
    pub percentage: u8,
}

impl From<PreviewResponse> for SegmentEstimate {
    fn from(response: PreviewResponse) -> Self {
        Self {
            count: response.count,
            percentage: response.percentage,
        }
    }
}
