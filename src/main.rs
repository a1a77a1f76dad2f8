//! CLI entry point for low-poly mosaic rendering

use clap::Parser;
use lowpoly::io::cli::{Cli, init_logging, run};

fn main() -> lowpoly::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let config = cli.config()?;
    run(&config)?;
    Ok(())
}
