// sensfilter/src/main.rs
//! sensfilter entry point.
//!
//! Exit status: `0` on success (and for a clean `check`), `1` when `check`
//! finds a sensitive word, `2` on any error.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use sensfilter::cli::{Cli, Commands, FilterArgs};
use sensfilter::commands::check::run_check;
use sensfilter::commands::find::{run_find, FindOptions};
use sensfilter::commands::rewrite::{run_rewrite, RewriteMode};
use sensfilter::commands::vocabulary::{build_filter, read_input};
use sensfilter::commands::{error_msg, info_msg, warn_msg};
use sensfilter::logger;
use sensfilter::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use sensfilter_core::SensitiveFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let theme = match build_theme_map(cli.theme.as_deref()).context("Theme error") {
        Ok(theme) => theme,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::from(2);
        }
    };

    match run(cli, &theme) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli, theme: &ThemeMap) -> Result<ExitCode> {
    let stdout = io::stdout();
    let enable_colors = stdout.is_terminal();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check(cmd) => {
            let job = prepare(&cmd.filter, cli.quiet, theme)?;
            let sensitive = run_check(&job.filter, &job.input, &mut out, theme, enable_colors)?;
            out.flush()?;
            Ok(if sensitive { ExitCode::from(1) } else { ExitCode::SUCCESS })
        }
        Commands::Find(cmd) => {
            let job = prepare(&cmd.filter, cli.quiet, theme)?;
            let opts = FindOptions {
                count: cmd.count,
                json: cmd.json,
                hash_words: cmd.hash_words,
            };
            run_find(&job.filter, &job.input, opts, &mut out, theme, enable_colors)?;
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Replace(cmd) => {
            let job = prepare(&cmd.filter, cli.quiet, theme)?;
            let repl = cmd.with.unwrap_or(job.replacement);
            run_rewrite(&job.filter, &job.input, RewriteMode::Replace(repl), cmd.output.as_deref(), &mut out)?;
            report_output(cmd.output.as_deref(), cli.quiet, theme);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Remove(cmd) => {
            let job = prepare(&cmd.filter, cli.quiet, theme)?;
            run_rewrite(&job.filter, &job.input, RewriteMode::Remove, cmd.output.as_deref(), &mut out)?;
            report_output(cmd.output.as_deref(), cli.quiet, theme);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// A loaded filter and the input it runs against.
struct Job {
    filter: SensitiveFilter,
    replacement: char,
    input: String,
}

fn prepare(args: &FilterArgs, quiet: bool, theme: &ThemeMap) -> Result<Job> {
    let (filter, config) = build_filter(args)?;
    if filter.is_empty() && !quiet {
        warn_msg("The vocabulary is empty; nothing will match.", theme);
    }
    let input = read_input(args.input_file.as_deref())?;
    Ok(Job {
        filter,
        replacement: config.replacement,
        input,
    })
}

fn report_output(path: Option<&Path>, quiet: bool, theme: &ThemeMap) {
    if let (Some(path), false) = (path, quiet) {
        info_msg(format!("Output written to {}", path.display()), theme);
    }
}
