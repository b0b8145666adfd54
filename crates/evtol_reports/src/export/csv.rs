use crate::summary::FleetSummary;

pub(crate) fn export_to_csv_impl(
    summaries: &[FleetSummary],
    seeds: &[u64],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    if summaries.len() != seeds.len() {
        return Err(format!(
            "Summaries length ({}) doesn't match seeds length ({})",
            summaries.len(),
            seeds.len()
        )
        .into());
    }

    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "seed",
        "fleet_size",
        "charger_count",
        "horizon_hours",
        "operator",
        "vehicle_count",
        "vehicles_retired",
        "total_flights",
        "avg_flight_hours",
        "avg_distance_miles",
        "total_charges",
        "avg_charge_hours",
        "total_faults",
        "passenger_miles",
    ])?;

    for (summary, seed) in summaries.iter().zip(seeds.iter()) {
        for row in &summary.operators {
            wtr.write_record([
                &seed.to_string(),
                &summary.fleet_size.to_string(),
                &summary.charger_count.to_string(),
                &summary.horizon_hours.to_string(),
                row.operator.name(),
                &row.vehicle_count.to_string(),
                &row.vehicles_retired.to_string(),
                &row.total_flights.to_string(),
                &row.avg_flight_hours.to_string(),
                &row.avg_distance_miles.to_string(),
                &row.total_charges.to_string(),
                &row.avg_charge_hours.to_string(),
                &row.total_faults.to_string(),
                &row.passenger_miles.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
