//! Builds the filter a command runs against and reads its input.
//!
//! The configuration comes from `--config`, else the per-user configuration
//! file when it exists, else the embedded defaults. `--engine`, `--word` and
//! `--words` are then layered on top of it.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use sensfilter_core::{default_config_path, FilterConfig, SensitiveFilter};

use crate::cli::FilterArgs;

/// Loads the base configuration and applies the command-line overrides.
pub fn resolve_config(args: &FilterArgs) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                debug!("Using per-user configuration {}", path.display());
                FilterConfig::load_from_file(&path)?
            }
            None => FilterConfig::load_default()?,
        },
    };

    if let Some(engine) = args.engine {
        config.strategy = engine.into();
    }
    config.words.extend(args.word.iter().cloned());
    config.word_files.extend(args.words.iter().cloned());
    Ok(config)
}

/// Builds the filter described by `args`. Returns the resolved configuration
/// alongside it so commands can read defaults such as the replacement char.
pub fn build_filter(args: &FilterArgs) -> Result<(SensitiveFilter, FilterConfig)> {
    let config = resolve_config(args)?;
    let filter = SensitiveFilter::from_config(&config)?;
    info!(
        "Filter ready: {} engine, {} words.",
        filter.strategy(),
        filter.len()
    );
    Ok((filter, config))
}

/// Reads the whole input from `path`, or from stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
