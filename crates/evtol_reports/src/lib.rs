//! Reporting and batch analysis for the eVTOL fleet simulation.
//!
//! This crate runs fleet simulations to completion, condenses the telemetry
//! they produce into per-operator summaries, renders plain-text reports, and
//! exports summaries to JSON/CSV. Seed batches run in parallel so the same
//! scenario can be sampled across many random seeds.
//!
//! # Quick Start
//!
//! ```no_run
//! use evtol_core::scenario::ScenarioParams;
//! use evtol_reports::{export_to_csv, print_report, run_seed_batch, run_summary};
//!
//! // One run, reported to stdout
//! let summary = run_summary(ScenarioParams::default().with_seed(42));
//! print_report(&summary);
//!
//! // The same scenario across many seeds, in parallel
//! let seeds: Vec<u64> = (0..100).collect();
//! let summaries = run_seed_batch(&ScenarioParams::default(), &seeds, None);
//! export_to_csv(&summaries, &seeds, "fleet_batch.csv").unwrap();
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`runner`]: Single runs and parallel seed batches using rayon
//! - [`summary`]: Summary extraction from completed simulation worlds
//! - [`report`]: Plain-text rendering of fleet summaries
//! - [`export`]: Summary export to JSON/CSV

pub mod export;
pub mod report;
pub mod runner;
pub mod summary;

pub use export::{export_to_csv, export_to_json};
pub use report::{print_report, render_report};
pub use runner::{run_scenario, run_seed_batch, run_summary};
pub use summary::{extract_summary, FleetSummary, OperatorSummary};
