use crate::cli::BboxArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use shipscope_core::geo::{bounding_box, parse_region};
use std::fs;

pub fn execute(args: BboxArgs, output: &OutputWriter) -> Result<()> {
    let raw = fs::read_to_string(&args.region)
        .with_context(|| format!("cannot read region file {}", args.region.display()))?;
    let shape = parse_region(&raw).context("invalid region selection")?;

    let bbox = bounding_box(&shape);

    if output.is_json() {
        output.json(&bbox);
    } else {
        output.section("Bounding Box");
        output.kv("Min Lon", bbox.min_lon);
        output.kv("Min Lat", bbox.min_lat);
        output.kv("Max Lon", bbox.max_lon);
        output.kv("Max Lat", bbox.max_lat);
    }

    Ok(())
}
