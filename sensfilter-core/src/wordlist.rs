//! Plain-text word list loading.
//!
//! One word per line. Trailing `\r` is dropped, blank lines and lines whose
//! first character is `#` are skipped, everything else is kept verbatim
//! (inner and leading spaces included).

use std::path::Path;

use log::debug;

use crate::errors::FilterError;

pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FilterError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FilterError::WordList {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text);
    debug!("Read {} words from {}.", words.len(), path.display());
    Ok(words)
}
