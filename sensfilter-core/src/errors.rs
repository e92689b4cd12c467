//! errors.rs - Custom error types for the sensfilter-core library.
//!
//! Matching and vocabulary mutation never fail: "no match" is an empty result
//! and deleting an unknown word is a no-op. The fallible surfaces are loading
//! configuration and word lists, which report through this enum.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `sensfilter-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Invalid filter configuration:\n{0}")]
    InvalidConfig(String),

    #[error("Failed to read word list '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
