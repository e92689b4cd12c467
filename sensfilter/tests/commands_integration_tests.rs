// sensfilter/tests/commands_integration_tests.rs
//! Integration tests that drive the command implementations directly,
//! without spawning the binary.

use anyhow::Result;
use std::fs;
use test_log::test;

use sensfilter::cli::{EngineChoice, FilterArgs};
use sensfilter::commands::check::run_check;
use sensfilter::commands::find::{run_find, FindOptions};
use sensfilter::commands::rewrite::{run_rewrite, RewriteMode};
use sensfilter::commands::vocabulary::build_filter;
use sensfilter::ui::theme::ThemeStyle;

fn args_with_config(dir: &std::path::Path, yaml: &str) -> Result<FilterArgs> {
    let config = dir.join("config.yaml");
    fs::write(&config, yaml)?;
    Ok(FilterArgs {
        config: Some(config),
        ..FilterArgs::default()
    })
}

#[test]
fn test_config_driven_check_and_find() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("base.txt"), "bad\nword\n")?;
    let args = args_with_config(dir.path(), "words: [badword]\nword_files: [base.txt]\n")?;
    let (filter, config) = build_filter(&args)?;
    assert_eq!(config.replacement, '*');

    let theme = ThemeStyle::default_theme_map();
    let mut out = Vec::new();
    assert!(run_check(&filter, "this is a badword", &mut out, &theme, false)?);

    let opts = FindOptions {
        count: true,
        ..FindOptions::default()
    };
    let distinct = run_find(&filter, "bad badword", opts, &mut out, &theme, false)?;
    assert_eq!(distinct, 3);
    assert_eq!(
        String::from_utf8(out)?,
        "sensitive\nbad\t2\nbadword\t1\nword\t1\n"
    );
    Ok(())
}

#[test]
fn test_engine_override_changes_first_match() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut args = args_with_config(dir.path(), "words: [abcd, bc]\n")?;
    let theme = ThemeStyle::default_theme_map();

    let mut out = Vec::new();
    let (filter, _) = build_filter(&args)?;
    assert_eq!(filter.find_one("abcd").as_deref(), Some("bc"));
    run_find(&filter, "abcd", FindOptions::default(), &mut out, &theme, false)?;

    args.engine = Some(EngineChoice::Greedy);
    let (filter, _) = build_filter(&args)?;
    assert_eq!(filter.find_one("abcd").as_deref(), Some("abcd"));
    run_find(&filter, "abcd", FindOptions::default(), &mut out, &theme, false)?;

    assert_eq!(String::from_utf8(out)?, "bc\nabcd\nabcd\nbc\n");
    Ok(())
}

#[test]
fn test_rewrite_to_stdout_preserves_layout() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut args = args_with_config(dir.path(), "replacement: '-'\n")?;
    args.word = vec!["secret".to_string()];
    let (filter, config) = build_filter(&args)?;

    let input = "line one secret\nline two\n\tsecretsecret\n";
    let mut out = Vec::new();
    run_rewrite(&filter, input, RewriteMode::Replace(config.replacement), None, &mut out)?;
    assert_eq!(
        String::from_utf8(out)?,
        "line one ------\nline two\n\t------------\n"
    );

    let mut out = Vec::new();
    run_rewrite(&filter, input, RewriteMode::Remove, None, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "line one \nline two\n\t\n");
    Ok(())
}
