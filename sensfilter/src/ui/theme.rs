//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of the verdicts, matched words and status messages.
//! It supports 16-color ANSI named colors for foreground styling and loads
//! themes from YAML files, filling any missing entry from the default theme.

use anyhow::{Context, Result};
use owo_colors::{AnsiColors, OwoColorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// The `sensitive` verdict of `check`.
    Sensitive,
    /// The `clean` verdict of `check`.
    Clean,
    /// A matched word in `find` output.
    MatchedWord,
    /// An occurrence count in `find --count` output.
    Occurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Sensitive,
        ThemeEntry::Clean,
        ThemeEntry::MatchedWord,
        ThemeEntry::Occurrences,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white"
            | "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue"
            | "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the `ThemeColor` into its corresponding `owo_colors::AnsiColors`.
    /// Unknown names (possible when deserialized from YAML) fall back to white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

impl ThemeStyle {
    fn fg(name: &str) -> Self {
        ThemeStyle {
            fg: Some(ThemeColor::named(name)),
        }
    }

    /// Loads a theme from a YAML file on disk and merges it over the default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Info, Self::fg("white"));
        default_theme.insert(ThemeEntry::Warn, Self::fg("yellow"));
        default_theme.insert(ThemeEntry::Error, Self::fg("red"));
        default_theme.insert(ThemeEntry::Sensitive, Self::fg("brightred"));
        default_theme.insert(ThemeEntry::Clean, Self::fg("green"));
        default_theme.insert(ThemeEntry::MatchedWord, Self::fg("yellow"));
        default_theme.insert(ThemeEntry::Occurrences, Self::fg("cyan"));
        default_theme
    }
}

/// Applies the theme color for `entry` to `text` when `enable_colors` is set.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) if enable_colors => text.color(color.to_ansi_color()).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.contains_key(&entry), "missing {:?}", entry);
        }
    }

    #[test]
    fn custom_theme_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"clean:\n  fg: blue\n").unwrap();
        let theme = build_theme_map(Some(file.path())).unwrap();
        assert_eq!(theme[&ThemeEntry::Clean], ThemeStyle::fg("blue"));
        assert_eq!(theme[&ThemeEntry::Sensitive], ThemeStyle::fg("brightred"));
    }

    #[test]
    fn paint_without_colors_is_plain() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(paint("clean", ThemeEntry::Clean, &theme, false), "clean");
        let colored = paint("clean", ThemeEntry::Clean, &theme, true);
        assert!(colored.contains("clean"));
        assert_ne!(colored, "clean");
    }
}
