use crate::error::SrtError;

use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map_res, opt};
use nom::error::VerboseError;
use nom::sequence::preceded;
use nom::IResult;

/// Parses a single `HH:MM:SS,mmm` token into seconds.
///
/// The millisecond part may be separated by `.` instead of `,`, or left out
/// entirely. Hours are unbounded; minutes and seconds must be below 60 and
/// milliseconds below 1000. Any failure reports the token exactly as given.
pub fn parse_time(time: &str) -> Result<f64, SrtError> {
    let invalid = || SrtError::InvalidTimeFormat(time.to_string());

    // Only the first '.' counts as a millisecond separator.
    let normalised = time.trim().replacen('.', ",", 1);
    let (hours, minutes, seconds, millis) = match all_consuming(timestamp)(normalised.as_str()) {
        Ok((_, fields)) => fields,
        Err(_) => return Err(invalid()),
    };

    if minutes >= 60 || seconds >= 60 || millis >= 1000 {
        return Err(invalid());
    }

    Ok(hours * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0)
}

fn timestamp(input: &str) -> IResult<&str, (f64, u64, u64, u64), VerboseError<&str>> {
    // Hours have no upper bound, so they never overflow into an error.
    let (input, hours) = map_res(digit1, |s: &str| s.parse::<f64>())(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minutes) = field(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, seconds) = field(input)?;
    let (input, millis) = opt(preceded(tag(","), field))(input)?;

    Ok((input, (hours, minutes, seconds, millis.unwrap_or(0))))
}

fn field(input: &str) -> IResult<&str, u64, VerboseError<&str>> {
    map_res(digit1, |s: &str| s.parse())(input)
}
