//! # ctml2yaml
//!
//! Command-line converter from CTML mechanism files to YAML.
//!
//! ## Usage
//!
//! ```bash
//! # Write h2o2.yaml next to the input
//! ctml2yaml h2o2.xml
//!
//! # Explicit output, block-style sequences, debug logging
//! ctml2yaml -vv --block-style h2o2.xml out/h2o2.yaml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
