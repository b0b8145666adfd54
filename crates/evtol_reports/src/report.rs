//! Plain-text rendering of fleet summaries.

use crate::summary::FleetSummary;
use std::fmt::Write as _;

/// Render a fleet summary as a plain-text report.
///
/// One block per operator, in operator order, preceded by a fleet-wide
/// header line.
pub fn render_report(summary: &FleetSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== Fleet summary ({} aircraft, {} chargers, {:.1}h horizon) ===",
        summary.fleet_size, summary.charger_count, summary.horizon_hours
    );

    for row in &summary.operators {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- {} ---", row.operator);
        let _ = writeln!(
            out,
            "Aircraft: {} ({} retired)",
            row.vehicle_count, row.vehicles_retired
        );
        let _ = writeln!(out, "Flights: {}", row.total_flights);
        let _ = writeln!(out, "Avg flight time: {:.2} h", row.avg_flight_hours);
        let _ = writeln!(out, "Avg flight distance: {:.2} mi", row.avg_distance_miles);
        let _ = writeln!(out, "Charges: {}", row.total_charges);
        let _ = writeln!(out, "Avg charge time: {:.2} h", row.avg_charge_hours);
        let _ = writeln!(out, "Faults: {}", row.total_faults);
        let _ = writeln!(out, "Passenger miles: {:.2}", row.passenger_miles);
    }

    out
}

/// Print a fleet summary report to stdout.
pub fn print_report(summary: &FleetSummary) {
    print!("{}", render_report(summary));
}
