//! Segment management commands.

use tabled::{Table, Tabled};

use crate::application::SegmentService;
use crate::cli::output;
use crate::domain::{Segment, SegmentDraft, SegmentId, SegmentRule};
use crate::error::Result;

use super::CreateArgs;

#[derive(Tabled)]
struct SegmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Rules")]
    rules: usize,
    #[tabled(rename = "Audience")]
    audience: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<&Segment> for SegmentRow {
    fn from(segment: &Segment) -> Self {
        Self {
            id: segment.id.to_string(),
            name: segment.name.clone(),
            rules: segment.rules.len(),
            audience: format!(
                "{} ({}%)",
                segment.customer_count, segment.customer_percentage
            ),
            active: if segment.is_active { "yes" } else { "no" },
        }
    }
}

fn describe(rule: &SegmentRule) -> String {
    let mut text = format!("{} {} {}", rule.kind, rule.operator, rule.value.label());
    if let (Some(min), Some(max)) = (rule.min_value, rule.max_value) {
        text.push_str(&format!(" [{min}..{max}]"));
    }
    text
}

/// List all segments.
pub async fn list(service: &SegmentService) -> Result<()> {
    let segments = service.list().await?;
    if segments.is_empty() {
        output::note("No segments defined yet.");
        return Ok(());
    }

    let rows: Vec<SegmentRow> = segments.iter().map(SegmentRow::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}

/// Show one segment in full.
pub async fn show(service: &SegmentService, id: &str) -> Result<()> {
    let Some(segment) = service.get(&SegmentId::from(id)).await? else {
        output::warn(&format!("No segment with id {id}"));
        return Ok(());
    };

    output::section(&segment.name);
    output::key_value("ID", &segment.id);
    output::key_value("Description", &segment.description);
    output::key_value("Active", segment.is_active);
    output::key_value(
        "Audience",
        format!(
            "{} customers ({}%)",
            segment.customer_count, segment.customer_percentage
        ),
    );
    output::key_value("Created", segment.created_at.to_rfc3339());
    output::key_value("Updated", segment.updated_at.to_rfc3339());

    output::section("Rules");
    if segment.rules.is_empty() {
        output::note("(none - this segment matches nobody)");
    }
    for rule in &segment.rules {
        println!("  {}", describe(rule));
    }
    Ok(())
}

/// Create a segment from CLI arguments.
pub async fn create(service: &SegmentService, args: CreateArgs) -> Result<()> {
    let mut draft = SegmentDraft::new(args.name, args.rules);
    draft.description = args.description;
    draft.is_active = !args.inactive;

    let segment = service.create(draft).await?;
    output::ok(&format!(
        "Created segment {} - {} customers ({}%)",
        output::highlight(&segment.id),
        segment.customer_count,
        segment.customer_percentage
    ));
    Ok(())
}

/// Delete a segment by id.
pub async fn delete(service: &SegmentService, id: &str) -> Result<()> {
    if service.delete(&SegmentId::from(id)).await? {
        output::ok(&format!("Deleted segment {id}"));
    } else {
        output::warn(&format!("No segment with id {id}"));
    }
    Ok(())
}

/// Flip a segment's active flag.
pub async fn toggle(service: &SegmentService, id: &str) -> Result<()> {
    match service.toggle_active(&SegmentId::from(id)).await? {
        Some(segment) => {
            let state = if segment.is_active { "active" } else { "inactive" };
            output::ok(&format!("Segment {} is now {state}", segment.name));
        }
        None => output::warn(&format!("No segment with id {id}")),
    }
    Ok(())
}
