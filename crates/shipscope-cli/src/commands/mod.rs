mod bbox;
mod filter;
mod pairs;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Bbox(args) => bbox::execute(args, &output),
        Commands::Filter(args) => filter::execute(args, &output),
        Commands::Pairs(args) => pairs::execute(args, cli.config.as_deref(), &output),
    }
}
