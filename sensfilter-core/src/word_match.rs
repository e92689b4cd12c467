//! Data structures for reporting matched words, plus helpers that keep
//! vocabulary words out of debug logs unless explicitly allowed.

use std::ops::Range;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

lazy_static! {
    /// Whether vocabulary words may appear verbatim in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SENSFILTER_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single occurrence of a vocabulary word inside a scanned text.
///
/// `start` and `end` are code-point offsets (not byte offsets); `end` is
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensitiveMatch {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl SensitiveMatch {
    /// The code-point span covered by this match.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Stable fingerprint of the matched word, for reports that must not
    /// repeat the word itself.
    pub fn word_hash(&self) -> String {
        canonical_word_hash(&self.word)
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

/// Returns the word itself when PII debugging is enabled, a redacted marker otherwise.
pub fn loggable_word(word: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        word.to_string()
    } else {
        redact_sensitive(word)
    }
}

pub fn log_word_mutation_debug(module_path: &str, action: &str, word: &str, changed: bool) {
    debug!(
        "{} {} word '{}' (changed: {})",
        module_path,
        action,
        loggable_word(word),
        changed
    );
}

/// SHA-256 over the word's UTF-8 bytes, hex encoded. No normalization is applied.
pub fn canonical_word_hash(word: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(word.as_bytes());
    hex::encode(hasher.finalize())
}
