//! Snapshot and rule-option inspection commands.

use std::collections::BTreeMap;

use crate::application::SegmentService;
use crate::cli::output;
use crate::error::Result;

fn print_distribution(title: &str, distribution: &BTreeMap<String, u64>) {
    if distribution.is_empty() {
        return;
    }
    output::section(title);
    for (label, count) in distribution {
        println!("  {label:<24} {count:>8}");
    }
}

/// Show the current distribution snapshot.
pub async fn show(service: &SegmentService, refresh: bool) -> Result<()> {
    let snapshot = service.snapshot(refresh).await;

    output::key_value("Customers", snapshot.customer_count);
    print_distribution("RFM segments", &snapshot.rfm_segments);
    print_distribution("Demographics", &snapshot.demographic_segments);
    print_distribution("Preference segments", &snapshot.preference_segments);
    print_distribution("Product categories", &snapshot.category_distribution);
    print_distribution("Materials", &snapshot.material_distribution);
    Ok(())
}

/// List the labels the rule editor can offer.
pub async fn options(service: &SegmentService) -> Result<()> {
    let options = service.options().await;

    let sections = [
        ("rfm_segment", &options.rfm_segments),
        ("preference_segment", &options.preference_segments),
        ("product_category", &options.categories),
        ("material", &options.materials),
        ("gender", &options.genders),
        ("age", &options.age_brackets),
    ];

    for (field, labels) in sections {
        output::section(field);
        for label in labels {
            println!("  {label}");
        }
    }
    Ok(())
}
