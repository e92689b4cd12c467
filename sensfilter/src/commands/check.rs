//! `check`: a yes/no verdict on the input.

use anyhow::Result;
use log::info;
use std::io::Write;

use sensfilter_core::{word_match::loggable_word, SensitiveFilter};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Writes `sensitive` or `clean` and returns whether the input is sensitive.
pub fn run_check<W: Write>(
    filter: &SensitiveFilter,
    input: &str,
    out: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<bool> {
    let first = filter.find_one(input);
    let (verdict, entry) = match &first {
        Some(word) => {
            info!("Input is sensitive; first match: {}", loggable_word(word));
            ("sensitive", ThemeEntry::Sensitive)
        }
        None => ("clean", ThemeEntry::Clean),
    };
    writeln!(out, "{}", paint(verdict, entry, theme, enable_colors))?;
    Ok(first.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use sensfilter_core::ScanStrategy;

    #[test]
    fn verdicts() {
        let filter = SensitiveFilter::new(ScanStrategy::AhoCorasick);
        filter.add_words(["badword"]);
        let theme = ThemeStyle::default_theme_map();

        let mut out = Vec::new();
        assert!(run_check(&filter, "a badword here", &mut out, &theme, false).unwrap());
        assert!(!run_check(&filter, "all good", &mut out, &theme, false).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "sensitive\nclean\n");
    }
}
