//! Terminal presentation: themes and status message formatting.

pub mod output_format;
pub mod theme;
