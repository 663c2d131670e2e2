//! The retry loop over a line source.
//!
//! [`LineReader`] owns a [`LineSource`] and a message sink, and keeps
//! asking for another line until one converts to the requested type or
//! the source runs out. Each failed attempt prints that failure's
//! message on its own line; the caller only ever receives a value.
//!
//! # Quick Start
//!
//! ```no_run
//! use keyread::LineReader;
//!
//! let mut reader = LineReader::new();
//! let name = reader.read_string();
//! let age = reader.read_integer();
//! let height = reader.read_fraction();
//! ```
//!
//! # Testing
//!
//! Both ends are injectable: script the source, capture the sink.
//!
//! ```
//! use keyread::{LineReader, MockLines};
//!
//! let mut out = Vec::new();
//! let source = MockLines::lines(["abc", "42"]);
//! let mut reader = LineReader::with_io(source, &mut out);
//!
//! assert_eq!(reader.read_integer(), 42);
//! drop(reader);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Sorry I don't think that was a number. Try again...\n"
//! );
//! ```

use std::io::{self, Write};

use crate::error::InputError;
use crate::parse;
use crate::source::{LineSource, StdinLines};

/// Reads strings and numbers a line at a time, retrying on bad input.
///
/// Every read operation blocks until a valid value arrives or the
/// source is exhausted, printing a retry message for each rejected
/// line. On exhaustion the operation returns the type's zero value
/// (`""`, `0`, `0.0`) with no message.
///
/// The reader takes `&mut self` for every read; it is a single cursor
/// over one stream and is not meant to be shared.
#[derive(Debug)]
pub struct LineReader<S = StdinLines, W = io::Stdout> {
    source: S,
    out: W,
}

impl LineReader<StdinLines, io::Stdout> {
    /// Reader over the process's stdin, messages to stdout.
    pub fn new() -> Self {
        Self {
            source: StdinLines::new(),
            out: io::stdout(),
        }
    }
}

impl Default for LineReader<StdinLines, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LineSource> LineReader<S, io::Stdout> {
    /// Reader over a custom source, messages to stdout.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            out: io::stdout(),
        }
    }
}

impl<S: LineSource, W: Write> LineReader<S, W> {
    /// Reader with both the source and the message sink injected.
    ///
    /// This is the seam tests use to script input and capture the
    /// printed messages.
    pub fn with_io(source: S, out: W) -> Self {
        Self { source, out }
    }

    /// Consume the reader and return the source and sink.
    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    /// Read one line and return it with surrounding whitespace
    /// stripped.
    ///
    /// Blank or whitespace-only input is a valid result: the empty
    /// string comes back with no message and no retry. Only a transport
    /// failure triggers the retry message. If the source is exhausted,
    /// returns `""` silently.
    pub fn read_string(&mut self) -> String {
        loop {
            match self.source.next_line() {
                Ok(Some(line)) => return parse::normalize(&line).to_string(),
                Ok(None) => return String::new(),
                Err(err) => self.report(&InputError::ScanFailed(err)),
            }
        }
    }

    /// Read lines until one parses as a base-10 integer.
    ///
    /// Rejected lines (non-numeric text, multiple tokens, blank input,
    /// out-of-range magnitudes) each print their message and trigger
    /// another read. If the source is exhausted, returns `0` silently.
    pub fn read_integer(&mut self) -> i64 {
        self.read_number(parse::parse_integer, 0)
    }

    /// Read lines until one parses as a base-10 fraction.
    ///
    /// Same retry behavior as [`read_integer`](Self::read_integer),
    /// producing an `f64`. If the source is exhausted, returns `0.0`
    /// silently.
    pub fn read_fraction(&mut self) -> f64 {
        self.read_number(parse::parse_fraction, 0.0)
    }

    fn read_number<T>(&mut self, convert: fn(&str) -> Result<T, InputError>, zero: T) -> T {
        loop {
            match self.source.next_line() {
                Ok(Some(line)) => match convert(&line) {
                    Ok(value) => return value,
                    Err(failure) => self.report(&failure),
                },
                Ok(None) => return zero,
                Err(err) => self.report(&InputError::ScanFailed(err)),
            }
        }
    }

    /// Print a failure message, one line. Best-effort: a sink failure
    /// never turns a read operation into an error.
    fn report(&mut self, failure: &InputError) {
        let _ = writeln!(self.out, "{failure}");
    }
}

/// Read one trimmed line from stdin. See [`LineReader::read_string`].
pub fn read_string() -> String {
    LineReader::new().read_string()
}

/// Read a base-10 integer from stdin, retrying until the user types a
/// valid one. See [`LineReader::read_integer`].
pub fn read_integer() -> i64 {
    LineReader::new().read_integer()
}

/// Read a base-10 fraction from stdin, retrying until the user types a
/// valid one. See [`LineReader::read_fraction`].
pub fn read_fraction() -> f64 {
    LineReader::new().read_fraction()
}
