// sensfilter-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

use sensfilter_core::config::{self, FilterConfig, IngestConfig};
use sensfilter_core::{DeletePolicy, FilterError, ScanStrategy, SensitiveFilter};

#[test]
fn test_load_default_config() {
    let config = FilterConfig::load_default().unwrap();
    assert_eq!(config, FilterConfig::default());
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r##"
strategy: greedy
delete_policy: last_leaf_edge
replacement: "#"
words:
  - bad
  - badword
ingest:
  max_batch: 64
  linger_ms: 20
"##;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;
    assert_eq!(config.strategy, ScanStrategy::Greedy);
    assert_eq!(config.delete_policy, DeletePolicy::LastLeafEdge);
    assert_eq!(config.replacement, '#');
    assert_eq!(config.words, vec!["bad", "badword"]);
    assert_eq!(
        config.ingest,
        IngestConfig {
            max_batch: 64,
            linger_ms: 20
        }
    );
    Ok(())
}

#[test]
fn test_word_files_resolve_against_config_dir() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("lists"))?;
    fs::write(dir.path().join("lists/core.txt"), "# core list\nbad\nword\n")?;
    let config_path = dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "words: [badword]\nword_files:\n  - lists/core.txt\n",
    )?;

    let config = FilterConfig::load_from_file(&config_path)?;
    assert_eq!(config.word_files, vec![dir.path().join("lists/core.txt")]);
    assert_eq!(config.load_words()?, vec!["badword", "bad", "word"]);

    let filter = SensitiveFilter::from_config(&config)?;
    assert_eq!(filter.len(), 3);
    assert_eq!(filter.generation(), 1);
    assert_eq!(filter.find_all("this is a badword"), vec!["bad", "badword", "word"]);
    Ok(())
}

#[test]
fn test_missing_word_file_is_reported() -> Result<()> {
    let dir = tempdir()?;
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "word_files: [absent.txt]\n")?;

    let config = FilterConfig::load_from_file(&config_path)?;
    match config.load_words() {
        Err(FilterError::WordList { path, .. }) => {
            assert_eq!(path, dir.path().join("absent.txt"));
        }
        other => panic!("expected a word list error, got {:?}", other),
    }
    assert!(SensitiveFilter::from_config(&config).is_err());
    Ok(())
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let result = FilterConfig::load_from_file(dir.path().join("nope.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"ingest:\n  max_batch: 0\n")?;
    let err = FilterConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("max_batch"));
    Ok(())
}

#[test]
fn test_validate_config_accepts_empty_words() {
    let config = FilterConfig {
        words: vec![String::new(), "bad".to_string()],
        ..FilterConfig::default()
    };
    assert!(config::validate_config(&config).is_ok());
    let filter = SensitiveFilter::from_config(&config).unwrap();
    assert_eq!(filter.words(), vec!["bad"]);
}

#[test]
fn test_default_config_path_is_under_sensfilter_dir() {
    if let Some(path) = config::default_config_path() {
        assert!(path.ends_with("sensfilter/config.yaml"));
    }
}
