//! `replace` and `remove`: rewrite the input with the matches masked or stripped.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::Path;

use sensfilter_core::SensitiveFilter;

/// How matched code points are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Overwrite each matched code point with the character.
    Replace(char),
    /// Drop each matched code point.
    Remove,
}

/// Rewrites `input` according to `mode`.
pub fn rewrite(filter: &SensitiveFilter, input: &str, mode: RewriteMode) -> String {
    let output = match mode {
        RewriteMode::Replace(repl) => filter.replace(input, repl),
        RewriteMode::Remove => filter.remove(input),
    };
    debug!(
        "{:?}: {} code points in, {} out.",
        mode,
        input.chars().count(),
        output.chars().count()
    );
    output
}

/// Writes the rewritten text to `output_path`, or to `out` when `None`.
/// The text is written as-is; no trailing newline is added.
pub fn run_rewrite<W: Write>(
    filter: &SensitiveFilter,
    input: &str,
    mode: RewriteMode,
    output_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let rewritten = rewrite(filter, input, mode);
    match output_path {
        Some(path) => {
            info!("Writing rewritten content to file: {}", path.display());
            fs::write(path, rewritten)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
        }
        None => {
            out.write_all(rewritten.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
