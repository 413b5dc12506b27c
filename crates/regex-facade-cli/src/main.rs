mod commands;
mod input;
mod logging;
mod pattern_args;

use clap::Parser;
use commands::Commands;

/// rxf: run a regex facade against text.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let matched = args.command.run()?;
    if !matched {
        std::process::exit(1);
    }
    Ok(())
}
