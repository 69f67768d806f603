use crate::cli::FilterArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use serde::Serialize;
use shipscope_core::geo::{filter_positions, parse_region};
use shipscope_core::models::Snapshot;
use std::fs;
use tabled::Tabled;

#[derive(Tabled)]
struct FilterRow {
    #[tabled(rename = "Vessel")]
    id: String,
    #[tabled(rename = "Lat")]
    lat: f64,
    #[tabled(rename = "Lon")]
    lon: f64,
}

#[derive(Serialize)]
struct FilterOutput {
    inside: Vec<String>,
}

pub fn execute(args: FilterArgs, output: &OutputWriter) -> Result<()> {
    let raw_region = fs::read_to_string(&args.region)
        .with_context(|| format!("cannot read region file {}", args.region.display()))?;
    let shape = parse_region(&raw_region).context("invalid region selection")?;

    let raw_snapshot = fs::read_to_string(&args.vessels)
        .with_context(|| format!("cannot read snapshot file {}", args.vessels.display()))?;
    let records = Snapshot::from_json(&raw_snapshot)
        .context("invalid vessel snapshot")?
        .into_records();

    let positions: Vec<(String, f64, f64)> =
        records.iter().map(|r| (r.id.clone(), r.lon, r.lat)).collect();
    let inside = filter_positions(&shape, &positions);

    output.info(format!("{} of {} vessels inside the region", inside.len(), records.len()));

    let rows: Vec<FilterRow> = records
        .iter()
        .filter(|r| inside.contains(&r.id.as_str()))
        .map(|r| FilterRow { id: r.id.clone(), lat: r.lat, lon: r.lon })
        .collect();
    let payload = FilterOutput { inside: inside.iter().map(|id| id.to_string()).collect() };

    output.table(&rows, &payload);
    Ok(())
}
