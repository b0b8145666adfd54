use crate::summary::FleetSummary;

pub(crate) fn export_to_json_impl(
    summaries: &[FleetSummary],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}
