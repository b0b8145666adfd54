//! Example: Run a fleet scenario and export per-operator summaries.
//!
//! This example demonstrates how to:
//! 1. Run a single seeded scenario and print its report
//! 2. Run the same scenario across many seeds in parallel
//! 3. Export the batch summaries to JSON and CSV
//!
//! Run with: cargo run -p evtol_reports --example fleet_report

use evtol_core::scenario::ScenarioParams;
use evtol_reports::{export_to_csv, export_to_json, print_report, run_seed_batch, run_summary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = ScenarioParams::default();

    println!("Running single scenario (seed 42)...");
    let summary = run_summary(params.clone().with_seed(42));
    print_report(&summary);

    let seeds: Vec<u64> = (0..20).collect();
    println!("\nRunning {} seeded scenarios in parallel...", seeds.len());
    let summaries = run_seed_batch(&params, &seeds, None);
    println!("Completed {} runs", summaries.len());

    println!("\nExporting results...");
    export_to_json(&summaries, "fleet_batch.json")?;
    println!("Exported to fleet_batch.json");

    export_to_csv(&summaries, &seeds, "fleet_batch.csv")?;
    println!("Exported to fleet_batch.csv");

    Ok(())
}
