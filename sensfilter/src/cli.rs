// sensfilter/src/cli.rs
//! This file defines the command-line interface (CLI) for the sensfilter application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sensfilter_core::ScanStrategy;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sensfilter",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find, count, mask or strip sensitive words in text",
    long_about = "sensfilter matches text against a vocabulary of sensitive words using an Aho-Corasick automaton or a greedy restart scanner. It can report whether the text is sensitive, list or count the matched words, mask them with a replacement character, or strip them out.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `sensfilter` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports whether the input contains any sensitive word.
    #[command(about = "Print 'sensitive' or 'clean'; exits with status 1 when the input is sensitive.")]
    Check(CheckCommand),

    /// Lists or counts the sensitive words found in the input.
    #[command(about = "List or count the sensitive words found in the input.")]
    Find(FindCommand),

    /// Masks every matched code point with a replacement character.
    #[command(about = "Mask every matched code point with a replacement character.")]
    Replace(ReplaceCommand),

    /// Strips every matched code point from the input.
    #[command(about = "Strip every matched code point from the input.")]
    Remove(RemoveCommand),
}

/// Vocabulary, engine and input selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Word list files, one word per line.
    #[arg(long = "words", value_name = "FILE", help = "Load sensitive words from a word list file (repeatable).")]
    pub words: Vec<PathBuf>,

    /// Inline words.
    #[arg(long = "word", short = 'w', value_name = "WORD", value_delimiter = ',', help = "Add sensitive words inline (repeatable, comma-separated).")]
    pub word: Vec<String>,

    /// Path to a filter configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "SENSFILTER_CONFIG", help = "Path to a filter configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Select which scanning engine to use.
    #[arg(long = "engine", short = 'e', value_name = "ENGINE", help = "Select a scanning engine (overrides the configuration).")]
    pub engine: Option<EngineChoice>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `find` command.
#[derive(Args, Debug)]
pub struct FindCommand {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Report occurrence counts instead of distinct words.
    #[arg(long, short = 'c', help = "Report how many times each word occurs, overlaps included.")]
    pub count: bool,

    /// Print the result as JSON to stdout.
    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,

    /// Replace words with their SHA-256 digest in the output.
    #[arg(long = "hash-words", help = "Print the SHA-256 digest of each word instead of the word itself.")]
    pub hash_words: bool,
}

/// Arguments for the `replace` command.
#[derive(Args, Debug)]
pub struct ReplaceCommand {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Replacement character.
    #[arg(long = "with", value_name = "CHAR", help = "Replacement character (defaults to the configured one, '*').")]
    pub with: Option<char>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `remove` command.
#[derive(Args, Debug)]
pub struct RemoveCommand {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Enum for selecting the scanning engine.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EngineChoice {
    /// Aho-Corasick automaton; reports every overlapping occurrence.
    AhoCorasick,
    /// Restart-on-mismatch scanner without fail links.
    Greedy,
}

impl From<EngineChoice> for ScanStrategy {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::AhoCorasick => ScanStrategy::AhoCorasick,
            EngineChoice::Greedy => ScanStrategy::Greedy,
        }
    }
}
