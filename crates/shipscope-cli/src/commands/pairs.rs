use crate::cli::PairsArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use serde::Serialize;
use shipscope_core::config::AnalysisConfig;
use shipscope_core::models::Snapshot;
use shipscope_core::pairing::{find_pairs, ProximityPair};
use std::fs;
use std::path::Path;
use tabled::Tabled;

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Vessel A")]
    a: String,
    #[tabled(rename = "Vessel B")]
    b: String,
    #[tabled(rename = "Distance (m)")]
    distance_m: String,
}

#[derive(Serialize)]
struct PairsOutput {
    pairs: Vec<ProximityPair>,
}

pub fn execute(args: PairsArgs, config_path: Option<&Path>, output: &OutputWriter) -> Result<()> {
    let mut config = AnalysisConfig::with_defaults();
    if let Some(path) = config_path {
        config = config
            .load_from_file(path)
            .with_context(|| format!("cannot load config file {}", path.display()))?;
    }
    let thresholds = config.load_from_env().apply_cli(args.distance, args.speed).thresholds();

    let raw_snapshot = fs::read_to_string(&args.vessels)
        .with_context(|| format!("cannot read snapshot file {}", args.vessels.display()))?;
    let records = Snapshot::from_json(&raw_snapshot)
        .context("invalid vessel snapshot")?
        .into_records();
    tracing::debug!(vessels = records.len(), "snapshot loaded");

    output.section("Thresholds");
    output.kv("Distance (m)", thresholds.max_distance_m);
    output.kv(
        "Speed (kn)",
        thresholds
            .max_speed_kn
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no gate".to_string()),
    );

    let pairs = find_pairs(&records, &thresholds).context("pairing failed")?;

    if pairs.is_empty() {
        output.info("no vessel pairs within the thresholds");
    } else {
        output.info(format!("{} pair(s) found", pairs.len()));
    }

    let rows: Vec<PairRow> = pairs
        .iter()
        .map(|p| PairRow {
            a: p.a.clone(),
            b: p.b.clone(),
            distance_m: format!("{:.2}", p.distance_m),
        })
        .collect();

    output.table(&rows, &PairsOutput { pairs });
    Ok(())
}
