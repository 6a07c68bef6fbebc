use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SrtError {
    /// The input was not valid text.
    InvalidInputType,
    /// A single timestamp token was malformed or out of range. Holds the token verbatim.
    InvalidTimeFormat(String),
    /// A time-range line had no `-->` separator.
    InvalidTimeRangeFormat(String),
    InvalidIndex(String),
    /// An index that is not 1 or the previous index plus one. Holds its
    /// digits without leading zeros.
    IndexSequenceError(String),
    /// The parser reached a state its transitions cannot produce.
    InvalidParserState,
}

impl Error for SrtError {}

impl fmt::Display for SrtError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SrtError::InvalidInputType => write!(fmt, "input must be a string"),
            SrtError::InvalidTimeFormat(found) => write!(
                fmt,
                "time must be in the format HH:MM:SS,SSS, found: {}",
                found
            ),
            SrtError::InvalidTimeRangeFormat(found) => write!(
                fmt,
                "time must be in the format HH:MM:SS,SSS --> HH:MM:SS,SSS, found: {}",
                found
            ),
            SrtError::InvalidIndex(found) => {
                write!(fmt, "index must be an integer, found: {}", found)
            }
            SrtError::IndexSequenceError(index) => {
                write!(fmt, "index must be 1 or the next index, found: {}", index)
            }
            SrtError::InvalidParserState => write!(fmt, "fatal: invalid parser state"),
        }
    }
}
