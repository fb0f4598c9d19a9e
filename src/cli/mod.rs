//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod preview;
pub mod rule_arg;
pub mod segments;
pub mod snapshot;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application;
use crate::config::Config;
use crate::domain::SegmentRule;
use crate::error::Result;

/// Cohort - customer segmentation sizing and audience management.
#[derive(Parser, Debug)]
#[command(name = "cohort")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "cohort.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage customer segments
    #[command(subcommand)]
    Segments(SegmentsCommand),

    /// Estimate the audience size of a rule list
    Preview(PreviewArgs),

    /// Show the aggregate distribution snapshot
    Snapshot(SnapshotArgs),

    /// List the labels rules can filter on
    Options,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `cohort segments`
#[derive(Subcommand, Debug)]
pub enum SegmentsCommand {
    /// List all segments
    List,
    /// Show one segment in full
    Show { id: String },
    /// Create a segment
    Create(CreateArgs),
    /// Delete a segment
    Delete { id: String },
    /// Flip a segment's active flag
    Toggle { id: String },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Segment name
    #[arg(long)]
    pub name: String,

    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Create the segment disabled
    #[arg(long)]
    pub inactive: bool,

    /// Filter rule, `field:operator:value[:min:max]`; repeatable
    #[arg(long = "rule", value_parser = rule_arg::parse)]
    pub rules: Vec<SegmentRule>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Filter rule, `field:operator:value[:min:max]`; repeatable
    #[arg(long = "rule", value_parser = rule_arg::parse, required = true)]
    pub rules: Vec<SegmentRule>,
}

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Discard the cached snapshot and refetch from the backend
    #[arg(long)]
    pub refresh: bool,
}

/// Subcommands for `cohort check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
    /// Probe CRM backend connectivity
    Connection,
}

/// Execute the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check(CheckCommand::Config) => check::config(&cli.config),
        Commands::Check(CheckCommand::Connection) => {
            let config = Config::load_or_default(&cli.config)?;
            config.init_logging();
            check::connection(&config).await
        }
        command => {
            let config = Config::load_or_default(&cli.config)?;
            config.init_logging();
            let service = application::bootstrap(&config)?;

            match command {
                Commands::Segments(SegmentsCommand::List) => segments::list(&service).await,
                Commands::Segments(SegmentsCommand::Show { id }) => {
                    segments::show(&service, &id).await
                }
                Commands::Segments(SegmentsCommand::Create(args)) => {
                    segments::create(&service, args).await
                }
                Commands::Segments(SegmentsCommand::Delete { id }) => {
                    segments::delete(&service, &id).await
                }
                Commands::Segments(SegmentsCommand::Toggle { id }) => {
                    segments::toggle(&service, &id).await
                }
                Commands::Preview(args) => preview::run(&service, args).await,
                Commands::Snapshot(args) => snapshot::show(&service, args.refresh).await,
                Commands::Options => snapshot::options(&service).await,
                Commands::Check(_) => unreachable!("handled above"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_create_with_repeated_rules() {
        let cli = Cli::parse_from([
            "cohort",
            "segments",
            "create",
            "--name",
            "Champs",
            "--rule",
            "rfm_segment:is:Champions",
            "--rule",
            "age:is:25-34",
        ]);
        match cli.command {
            Commands::Segments(SegmentsCommand::Create(args)) => {
                assert_eq!(args.name, "Champs");
                assert_eq!(args.rules.len(), 2);
                assert!(!args.inactive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
