use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use ctml2yaml::convert::{ConversionConfig, CtmlConverter};

use super::Config;

/// Convert a CTML file to YAML
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    expanded: bool,
    multiline_strings: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let output = output.unwrap_or_else(|| input.with_extension("yaml"));

    let file_config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let emitter = file_config.emitter_config(expanded, multiline_strings);

    info!("ctml2yaml - CTML to YAML");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    info!(
        "Layout: {} sequences, multi-line strings {}",
        if emitter.compact { "compact" } else { "expanded" },
        if emitter.multiline_strings { "as literal blocks" } else { "escaped" }
    );

    let converter = CtmlConverter::with_config(ConversionConfig { emitter });
    let stats = converter
        .convert(&input, &output)
        .with_context(|| format!("Conversion of {} failed", input.display()))?;

    info!("Conversion complete!");
    info!("  Phases:    {}", stats.phases);
    info!("  Species:   {}", stats.species);
    info!("  Reactions: {}", stats.reactions);
    info!("  Output size: {} bytes", stats.bytes_written);

    Ok(())
}
