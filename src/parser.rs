use crate::error::SrtError;
use crate::srt::Subtitle;
use crate::time::parse_time;

use once_cell::sync::Lazy;
use regex::Regex;

static INDEX_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("index pattern must compile"));

const TIME_SEPARATOR: &str = "-->";

/// Line-oriented SRT parser.
///
/// Every call to [`Parser::parse`] starts from a clean slate; nothing is
/// carried over between calls.
pub struct Parser;
impl Parser {
    pub fn new() -> Self {
        Self {}
    }

    pub fn parse(&mut self, input: &str) -> Result<Vec<Subtitle>, SrtError> {
        let mut scanner = Scanner::new();
        for (number, line) in input.split('\n').enumerate() {
            log::trace!("line {}: {:?}", number + 1, line);
            scanner.feed(line)?;
        }
        let subs = scanner.finish();
        log::debug!("parsed {} subtitles", subs.len());
        Ok(subs)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekIndex,
    SeekTime,
    SeekText,
}

struct Scanner {
    state: State,
    subtitles: Vec<Subtitle>,
    // Position of the open block in `subtitles`.
    current: Option<usize>,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::SeekIndex,
            subtitles: Vec::new(),
            current: None,
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), SrtError> {
        let line = trim_line(raw);
        if line.is_empty() {
            if self.state == State::SeekText {
                self.close();
            }
            return Ok(());
        }

        match self.state {
            State::SeekIndex => self.index_line(line),
            State::SeekTime => self.time_line(line),
            State::SeekText => self.text_line(line),
        }
    }

    fn finish(self) -> Vec<Subtitle> {
        if self.current.is_some() {
            log::debug!("input ended inside an open block ({:?})", self.state);
        }
        self.subtitles
    }

    fn index_line(&mut self, line: &str) -> Result<(), SrtError> {
        if !INDEX_LINE.is_match(line) {
            return Err(SrtError::InvalidIndex(line.to_string()));
        }
        let out_of_sequence = || {
            let digits = line.trim_start_matches('0');
            let digits = if digits.is_empty() { "0" } else { digits };
            SrtError::IndexSequenceError(digits.to_string())
        };
        // Anything too large for usize cannot be the next index either.
        let index: usize = line.parse().map_err(|_| out_of_sequence())?;

        let expected = self.subtitles.last().map_or(1, |prev| prev.index + 1);
        if index != expected {
            return Err(out_of_sequence());
        }

        log::debug!("opened subtitle {}", index);
        self.subtitles.push(Subtitle::open(index));
        self.current = Some(self.subtitles.len() - 1);
        self.state = State::SeekTime;
        Ok(())
    }

    fn time_line(&mut self, line: &str) -> Result<(), SrtError> {
        let sub = self.current_mut()?;
        if !line.contains(TIME_SEPARATOR) {
            return Err(SrtError::InvalidTimeRangeFormat(line.to_string()));
        }

        // Anything after a second separator is ignored.
        let mut halves = line.split(TIME_SEPARATOR);
        let start = halves.next().unwrap_or_default();
        let end = halves.next().unwrap_or_default();
        sub.start = parse_time(start)?;
        sub.end = parse_time(end)?;

        self.state = State::SeekText;
        Ok(())
    }

    fn text_line(&mut self, line: &str) -> Result<(), SrtError> {
        self.current_mut()?.push_line(line);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(sub) = self.current.and_then(|i| self.subtitles.get(i)) {
            log::debug!("closed subtitle {}", sub.index);
        }
        self.current = None;
        self.state = State::SeekIndex;
    }

    fn current_mut(&mut self) -> Result<&mut Subtitle, SrtError> {
        let subtitles = &mut self.subtitles;
        self.current
            .and_then(move |i| subtitles.get_mut(i))
            .ok_or(SrtError::InvalidParserState)
    }
}

/// Strips surrounding whitespace, `\r` from CRLF input and any byte-order mark.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
