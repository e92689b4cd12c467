//! Configuration management for `sensfilter-core`.
//!
//! This module defines the YAML configuration of a filter: which scanning
//! strategy and delete policy to use, the initial vocabulary (inline words and
//! word list files), the default replacement character, and the ingestion
//! batching parameters. It handles loading, path resolution and validation.
//!
//! License: MIT OR Apache-2.0

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::engine::ScanStrategy;
use crate::errors::FilterError;
use crate::filter::FilterOptions;
use crate::trie::DeletePolicy;
use crate::wordlist::load_word_list;

/// Name of the per-user configuration file looked up by [`default_config_path`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Micro-batching parameters for streaming ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Upper bound on the number of words flushed in one batch.
    pub max_batch: usize,
    /// How long a batch waits for more words once its queue runs dry.
    pub linger_ms: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_batch: 512,
            linger_ms: 5,
        }
    }
}

impl IngestConfig {
    pub fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }
}

/// Represents the top-level configuration structure for sensfilter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    pub strategy: ScanStrategy,
    pub delete_policy: DeletePolicy,
    /// Character used by `replace` when the caller does not pick one.
    pub replacement: char,
    /// Words loaded into the first generation.
    pub words: Vec<String>,
    /// Word list files loaded into the first generation. Relative paths are
    /// resolved against the directory of the configuration file.
    pub word_files: Vec<PathBuf>,
    pub ingest: IngestConfig,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::default(),
            delete_policy: DeletePolicy::default(),
            replacement: '*',
            words: Vec::new(),
            word_files: Vec::new(),
            ingest: IngestConfig::default(),
        }
    }
}

impl FilterConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_word_files(base);
        }
        info!(
            "Loaded configuration from {}: strategy {}, {} inline words, {} word files.",
            path.display(),
            config.strategy,
            config.words.len(),
            config.word_files.len()
        );
        Ok(config)
    }

    /// Parses and validates a YAML document. Relative word file paths are left as-is.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: FilterConfig =
            serde_yml::from_str(text).context("Invalid filter configuration YAML")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Loads the configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        Self::from_yaml(default_yaml).context("Failed to parse default configuration")
    }

    fn resolve_word_files(&mut self, base: &Path) {
        for file in &mut self.word_files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            strategy: self.strategy,
            delete_policy: self.delete_policy,
            ingest: self.ingest,
        }
    }

    /// Gathers the inline words followed by the contents of every word file.
    pub fn load_words(&self) -> Result<Vec<String>, FilterError> {
        let mut words = self.words.clone();
        for file in &self.word_files {
            words.extend(load_word_list(file)?);
        }
        debug!(
            "Collected {} words from {} inline entries and {} files.",
            words.len(),
            self.words.len(),
            self.word_files.len()
        );
        Ok(words)
    }
}

/// Location of the per-user configuration file, when the platform has a
/// configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sensfilter").join(CONFIG_FILE_NAME))
}

/// Validates the numeric limits and the inline vocabulary.
pub fn validate_config(config: &FilterConfig) -> Result<(), FilterError> {
    let mut errors = Vec::new();

    if config.ingest.max_batch == 0 {
        errors.push("`ingest.max_batch` must be greater than 0.".to_string());
    }

    let empty = config.words.iter().filter(|w| w.is_empty()).count();
    if empty > 0 {
        warn!("Configuration lists {} empty words; they will be ignored.", empty);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FilterError::InvalidConfig(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FilterConfig::load_default().unwrap();
        assert_eq!(config.strategy, ScanStrategy::AhoCorasick);
        assert_eq!(config.delete_policy, DeletePolicy::RefCounted);
        assert_eq!(config.replacement, '*');
        assert!(config.words.is_empty());
        assert_eq!(config.ingest, IngestConfig::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = FilterConfig::from_yaml("strategy: greedy\nwords: [bad]\n").unwrap();
        assert_eq!(config.strategy, ScanStrategy::Greedy);
        assert_eq!(config.words, vec!["bad"]);
        assert_eq!(config.ingest.max_batch, 512);
    }

    #[test]
    fn test_zero_batch_rejected() {
        let err = FilterConfig::from_yaml("ingest:\n  max_batch: 0\n").unwrap_err();
        assert!(format!("{:#}", err).contains("max_batch"));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(FilterConfig::from_yaml("strategy: fuzzy\n").is_err());
    }

    #[test]
    fn test_resolve_relative_word_files() {
        let mut config = FilterConfig {
            word_files: vec![PathBuf::from("dict.txt"), PathBuf::from("/abs/dict.txt")],
            ..FilterConfig::default()
        };
        config.resolve_word_files(Path::new("/etc/sensfilter"));
        assert_eq!(
            config.word_files,
            vec![PathBuf::from("/etc/sensfilter/dict.txt"), PathBuf::from("/abs/dict.txt")]
        );
    }

    #[test]
    fn test_options_mapping() {
        let ingest = IngestConfig {
            max_batch: 8,
            linger_ms: 40,
        };
        let config = FilterConfig {
            strategy: ScanStrategy::Greedy,
            delete_policy: DeletePolicy::LastLeafEdge,
            ingest,
            ..FilterConfig::default()
        };
        assert_eq!(
            config.options(),
            FilterOptions {
                strategy: ScanStrategy::Greedy,
                delete_policy: DeletePolicy::LastLeafEdge,
                ingest,
            }
        );
    }
}
