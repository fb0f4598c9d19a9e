//! Smoke tests against a real CRM backend.
//!
//! Compile-gated behind the `integration-tests` feature; requires a
//! reachable backend configured via `cohort.toml` or the defaults.

#![cfg(feature = "integration-tests")]

use cohort::adapter::CrmApiClient;
use cohort::config::Config;

#[tokio::test]
async fn backend_answers_health_and_segmentation() -> anyhow::Result<()> {
    let config = Config::load_or_default("cohort.toml")?;
    let client = CrmApiClient::new(&config.api)?;

    client.health().await?;

    let snapshot = client.comprehensive_segmentation().await?;
    assert!(snapshot.customer_count > 0);
    Ok(())
}

#[tokio::test]
async fn segment_lifecycle_round_trips() -> anyhow::Result<()> {
    use cohort::domain::{RuleKind, RuleOperator, SegmentDraft, SegmentRule};

    let config = Config::load_or_default("cohort.toml")?;
    let client = CrmApiClient::new(&config.api)?;

    let draft = SegmentDraft::new(
        "smoke-test-segment",
        vec![SegmentRule::new(
            RuleKind::RfmSegment,
            RuleOperator::Is,
            "Champions",
        )],
    );

    let created = client.create_segment(&draft).await?;
    let fetched = client.get_segment(&created.id).await?;
    assert!(fetched.is_some());

    assert!(client.delete_segment(&created.id).await?);
    Ok(())
}
