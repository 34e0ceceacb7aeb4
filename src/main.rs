use anyhow::Result;
use clap::Parser;
use cryptrack::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
