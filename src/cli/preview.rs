//! Audience size preview command.

use crate::application::SegmentService;
use crate::cli::output;
use crate::error::Result;

use super::PreviewArgs;

/// Estimate the audience of a rule list without persisting anything.
pub async fn run(service: &SegmentService, args: PreviewArgs) -> Result<()> {
    let estimate = service.preview(&args.rules).await?;
    output::note(&format!(
        "Estimated audience: {} customers ({}% of base)",
        output::highlight(estimate.count),
        estimate.percentage
    ));
    Ok(())
}
