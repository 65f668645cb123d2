use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod convert;

pub use config::Config;

/// ctml2yaml - Convert CTML mechanism files to YAML
#[derive(Parser)]
#[command(name = "ctml2yaml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Put each mapping inside a sequence on its own line after the `-`
    #[arg(long)]
    expanded: bool,

    /// Write multi-line strings as literal blocks
    #[arg(long)]
    multiline_strings: bool,

    /// Input CTML file path
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output YAML file path (defaults to INPUT with a .yaml extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config,
        expanded,
        multiline_strings,
        input,
        output,
        ..
    } = cli;
    convert::run(input, output, config, expanded, multiline_strings)
}
