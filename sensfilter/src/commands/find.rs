//! `find`: list, count or dump the matches in the input.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashSet};
use std::io::Write;

use sensfilter_core::{word_match::canonical_word_hash, SensitiveFilter, SensitiveMatch};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Output switches of the `find` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindOptions {
    pub count: bool,
    pub json: bool,
    pub hash_words: bool,
}

impl FindOptions {
    fn label(&self, word: &str) -> String {
        if self.hash_words {
            canonical_word_hash(word)
        } else {
            word.to_string()
        }
    }
}

/// Writes the matches of `input` in the format selected by `opts`.
/// Returns the number of distinct words found.
pub fn run_find<W: Write>(
    filter: &SensitiveFilter,
    input: &str,
    opts: FindOptions,
    out: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<usize> {
    // One snapshot so every view below describes the same vocabulary.
    let snapshot = filter.snapshot();

    if opts.count {
        let counts = snapshot.find_all_count(input);
        let distinct = counts.len();
        if opts.json {
            let labelled: BTreeMap<String, usize> =
                counts.into_iter().map(|(w, n)| (opts.label(&w), n)).collect();
            serde_json::to_writer_pretty(&mut *out, &labelled).context("Failed to write JSON")?;
            writeln!(out)?;
        } else {
            let mut rows: Vec<(String, usize)> = counts.into_iter().collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (word, n) in rows {
                writeln!(
                    out,
                    "{}\t{}",
                    paint(&opts.label(&word), ThemeEntry::MatchedWord, theme, enable_colors),
                    paint(&n.to_string(), ThemeEntry::Occurrences, theme, enable_colors)
                )?;
            }
        }
        return Ok(distinct);
    }

    if opts.json {
        let matches: Vec<SensitiveMatch> = snapshot
            .find_matches(input)
            .into_iter()
            .map(|m| SensitiveMatch {
                word: opts.label(&m.word),
                ..m
            })
            .collect();
        let distinct = matches.iter().map(|m| m.word.as_str()).collect::<HashSet<_>>().len();
        serde_json::to_writer_pretty(&mut *out, &matches).context("Failed to write JSON")?;
        writeln!(out)?;
        return Ok(distinct);
    }

    let words = snapshot.find_all(input);
    for word in &words {
        writeln!(out, "{}", paint(&opts.label(word), ThemeEntry::MatchedWord, theme, enable_colors))?;
    }
    Ok(words.len())
}
