//! Cohort - customer segmentation sizing and audience management.
//!
//! This crate manages customer segments for campaign targeting: named,
//! rule-defined audience subsets with an estimated size attached. The
//! authoritative answers come from a CRM REST backend; when it is
//! unreachable every operation degrades to a deterministic local path
//! (client-side estimation, file-backed persistence) instead of failing.
//!
//! # Architecture
//!
//! Hexagonal: the application core talks to traits, adapters implement
//! them.
//!
//! - [`domain`] - segments, rules, distribution snapshots
//! - [`estimator`] - deterministic client-side audience size estimation
//! - [`port`] - the trait seams: [`port::SegmentRepository`],
//!   [`port::SegmentStore`], [`port::SnapshotSource`]
//! - [`adapter`] - the CRM REST client, the file-backed local store, and
//!   the remote-then-local fallback composition
//! - [`application`] - the memoized snapshot cache and the orchestration
//!   facade the CLI consumes
//! - [`config`] - TOML configuration with env overrides
//! - [`error`] - error types for the crate
//! - [`cli`] - clap command definitions and handlers
//!
//! # Example
//!
//! ```no_run
//! use cohort::application;
//! use cohort::config::Config;
//!
//! # async fn demo() -> cohort::error::Result<()> {
//! let config = Config::load_or_default("cohort.toml")?;
//! let service = application::bootstrap(&config)?;
//! let segments = service.list().await?;
//! println!("{} segments", segments.len());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod estimator;
pub mod port;
