use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shipscope - vessel proximity analysis
#[derive(Parser, Debug)]
#[command(name = "shipscope")]
#[command(about = "Vessel proximity analysis over region selections and snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML config file with threshold defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bounding box of a region selection
    Bbox(BboxArgs),

    /// List the vessels of a snapshot inside a region selection
    Filter(FilterArgs),

    /// Report vessel pairs with footprints closer than the thresholds
    Pairs(PairsArgs),
}

#[derive(Parser, Debug)]
pub struct BboxArgs {
    /// GeoJSON file with the region selection (single-feature FeatureCollection)
    pub region: PathBuf,
}

#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// GeoJSON file with the region selection
    pub region: PathBuf,

    /// JSON vessel snapshot (vessel id to record mapping)
    pub vessels: PathBuf,
}

#[derive(Parser, Debug)]
pub struct PairsArgs {
    /// JSON vessel snapshot (vessel id to record mapping)
    pub vessels: PathBuf,

    /// Maximum footprint separation in meters
    #[arg(long)]
    pub distance: Option<f64>,

    /// Maximum speed in knots; both vessels must be at or below it.
    /// 0 disables the gate.
    #[arg(long)]
    pub speed: Option<f64>,
}
