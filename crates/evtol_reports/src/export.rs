//! Summary export utilities.
//!
//! This module provides functions to export fleet summaries to JSON and
//! CSV for downstream analysis.

use std::path::Path;

use crate::summary::FleetSummary;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export fleet summaries to JSON format.
///
/// Creates a JSON file with an array of all summaries (serialized as JSON objects).
///
/// # Arguments
///
/// * `summaries` - Fleet summaries to export
/// * `path` - Path to output JSON file
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    summaries: &[FleetSummary],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(summaries, file)
}

/// Export fleet summaries to CSV format, one row per operator per run.
///
/// Summaries and seeds are paired by index (summaries[i] was produced by the
/// run seeded with seeds[i]).
///
/// # Arguments
///
/// * `summaries` - Fleet summaries to export
/// * `seeds` - Seeds the runs used (must match summaries in order)
/// * `path` - Path to output CSV file
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails, or if summaries
/// and seeds lengths don't match.
pub fn export_to_csv(
    summaries: &[FleetSummary],
    seeds: &[u64],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(summaries)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(summaries, seeds, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::OperatorSummary;
    use evtol_core::ecs::Operator;
    use tempfile::NamedTempFile;

    fn sample_summary() -> FleetSummary {
        FleetSummary {
            fleet_size: 4,
            charger_count: 2,
            horizon_hours: 3.0,
            operators: vec![
                OperatorSummary {
                    operator: Operator::Alpha,
                    vehicle_count: 3,
                    vehicles_retired: 0,
                    total_flights: 5,
                    avg_flight_hours: 1.6667,
                    avg_distance_miles: 200.0,
                    total_charges: 2,
                    avg_charge_hours: 0.6,
                    total_faults: 1,
                    passenger_miles: 4000.0,
                },
                OperatorSummary {
                    operator: Operator::Delta,
                    vehicle_count: 1,
                    vehicles_retired: 1,
                    total_flights: 2,
                    avg_flight_hours: 1.613,
                    avg_distance_miles: 145.16,
                    total_charges: 1,
                    avg_charge_hours: 0.62,
                    total_faults: 0,
                    passenger_miles: 580.65,
                },
            ],
        }
    }

    #[test]
    fn test_export_to_json() {
        let summaries = vec![sample_summary()];

        let file = NamedTempFile::new().unwrap();
        export_to_json(&summaries, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("passenger_miles"));
        assert!(contents.contains("\"Alpha\""));
    }

    #[test]
    fn test_export_to_csv() {
        let summaries = vec![sample_summary(), sample_summary()];
        let seeds = vec![7, 8];

        let file = NamedTempFile::new().unwrap();
        export_to_csv(&summaries, &seeds, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // Header plus two operator rows per run
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("seed,fleet_size,charger_count"));
        assert!(lines[1].starts_with("7,4,2,3,Alpha"));
        assert!(lines[3].starts_with("8,4,2,3,Alpha"));
    }

    #[test]
    fn test_export_to_csv_rejects_mismatched_seeds() {
        let summaries = vec![sample_summary()];
        let seeds = vec![1, 2];

        let file = NamedTempFile::new().unwrap();
        let err = export_to_csv(&summaries, &seeds, file.path());
        assert!(err.is_err());
    }

    #[test]
    fn test_export_empty_summaries_fails() {
        let file = NamedTempFile::new().unwrap();
        let err = export_to_csv(&[], &[], file.path());
        assert!(err.is_err());
    }
}
