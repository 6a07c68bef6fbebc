//! Strict parsing of SubRip (SRT) subtitles.
//!
//! The input is scanned line by line: an index, a `start --> end` time range,
//! then text lines up to the next blank line. The first malformed line aborts
//! the whole parse with an [`SrtError`] naming the offending value.

mod error;
mod parser;
mod srt;
mod time;

pub use crate::error::SrtError;
pub use crate::parser::Parser;
pub use crate::srt::Subtitle;
pub use crate::time::parse_time;

/// Parses SRT text into its subtitles, in input order.
pub fn parse_subtitles(source: &str) -> Result<Vec<Subtitle>, SrtError> {
    Parser::new().parse(source)
}

/// Like [`parse_subtitles`], for raw bytes. Input that is not valid UTF-8
/// fails with [`SrtError::InvalidInputType`] before any line is looked at.
pub fn parse_subtitles_bytes(source: &[u8]) -> Result<Vec<Subtitle>, SrtError> {
    let text = std::str::from_utf8(source).map_err(|_| SrtError::InvalidInputType)?;
    parse_subtitles(text)
}
