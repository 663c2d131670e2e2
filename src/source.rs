//! Line source abstractions.
//!
//! A [`LineSource`] hands out one line of text per call and tells the
//! three outcomes apart structurally: a line, clean end of stream, or a
//! transport error. Downstream code leans on that distinction; end of
//! stream is never reported to the user, a transport error always is.
//!
//! # Testing
//!
//! [`MockLines`] scripts an exact sequence of lines and errors, and
//! [`BufLines`] turns any in-memory reader into a source:
//!
//! ```
//! use std::io::Cursor;
//! use keyread::{BufLines, LineSource, MockLines};
//!
//! let mut source = BufLines::new(Cursor::new("first\nsecond\n"));
//! assert_eq!(source.next_line().unwrap(), Some("first".to_string()));
//!
//! let mut source = MockLines::lines(["abc"])
//!     .then_error(std::io::ErrorKind::UnexpectedEof, "unexpected EOF");
//! assert_eq!(source.next_line().unwrap(), Some("abc".to_string()));
//! assert!(source.next_line().is_err());
//! assert_eq!(source.next_line().unwrap(), None);
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A sequential supplier of lines.
///
/// # Contract
///
/// - `Ok(Some(line))`: the next line, with its trailing `\n` or `\r\n`
///   stripped but otherwise untouched.
/// - `Ok(None)`: the medium is cleanly exhausted. Not an error; a
///   source must never report exhaustion as `Err`.
/// - `Err(e)`: a genuine transport failure.
///
/// A source is a single mutable cursor over one stream. Concurrent use
/// from multiple threads is unsupported by design; callers needing that
/// must serialize externally.
pub trait LineSource {
    /// Read the next line from the underlying medium.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Strip one trailing line terminator, `\n` or `\r\n`.
fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Line source over the process's standard input.
///
/// Each call locks stdin for the duration of one `read_line`. The
/// buffer behind the lock is shared process-wide, so lines are never
/// lost between calls or between readers.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl StdinLines {
    /// Create a stdin line source.
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for StdinLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        strip_newline(&mut line);
        Ok(Some(line))
    }
}

/// Adapter turning any [`BufRead`] into a [`LineSource`].
///
/// This is the bridge for reading lines from files, sockets, or
/// in-memory buffers:
///
/// ```
/// use std::io::Cursor;
/// use keyread::{BufLines, LineReader};
///
/// let source = BufLines::new(Cursor::new("42\n"));
/// let mut reader = LineReader::with_source(source);
/// assert_eq!(reader.read_integer(), 42);
/// ```
#[derive(Debug)]
pub struct BufLines<R> {
    inner: R,
}

impl<R: BufRead> BufLines<R> {
    /// Wrap a buffered reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> LineSource for BufLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        strip_newline(&mut line);
        Ok(Some(line))
    }
}

/// Scripted line source for testing.
///
/// Plays back a queue of results, lines and errors in order, and
/// signals clean end of stream once the queue is drained.
///
/// ```
/// use keyread::{LineSource, MockLines};
///
/// let mut source = MockLines::from_text("abc\n123\n");
/// assert_eq!(source.next_line().unwrap(), Some("abc".to_string()));
/// assert_eq!(source.next_line().unwrap(), Some("123".to_string()));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MockLines {
    results: VecDeque<io::Result<String>>,
}

impl MockLines {
    /// Create a source that is exhausted from the start.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a source from a block of text, one queued line per
    /// newline-delimited line of the text.
    ///
    /// An empty text produces no lines at all, which is distinct from
    /// `from_text("\n")`: one blank line, then end of stream.
    pub fn from_text(text: &str) -> Self {
        Self {
            results: text.lines().map(|l| Ok(l.to_string())).collect(),
        }
    }

    /// Create a source from an explicit sequence of lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            results: lines.into_iter().map(|l| Ok(l.into())).collect(),
        }
    }

    /// Queue a transport error after the results queued so far.
    ///
    /// Useful for scripting failure-then-recovery and failure-then-end
    /// scenarios.
    pub fn then_error(mut self, kind: io::ErrorKind, message: &str) -> Self {
        self.results.push_back(Err(io::Error::new(kind, message.to_string())));
        self
    }

    /// Queue one more line after the results queued so far.
    pub fn then_line(mut self, line: impl Into<String>) -> Self {
        self.results.push_back(Ok(line.into()));
        self
    }
}

impl LineSource for MockLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.results.pop_front() {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn buf_lines_splits_on_newlines() {
        let mut source = BufLines::new(Cursor::new("one\ntwo\n"));
        assert_eq!(source.next_line().unwrap(), Some("one".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("two".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn buf_lines_strips_crlf() {
        let mut source = BufLines::new(Cursor::new("one\r\ntwo\r\n"));
        assert_eq!(source.next_line().unwrap(), Some("one".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("two".to_string()));
    }

    #[test]
    fn buf_lines_keeps_final_unterminated_line() {
        let mut source = BufLines::new(Cursor::new("no newline"));
        assert_eq!(source.next_line().unwrap(), Some("no newline".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn buf_lines_preserves_interior_whitespace() {
        let mut source = BufLines::new(Cursor::new("  padded  \n"));
        assert_eq!(source.next_line().unwrap(), Some("  padded  ".to_string()));
    }

    #[test]
    fn buf_lines_empty_reader_is_end_of_stream() {
        let mut source = BufLines::new(Cursor::new(""));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn buf_lines_propagates_reader_errors() {
        struct BrokenReader;

        impl io::Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected EOF"))
            }
        }

        let mut source = BufLines::new(io::BufReader::new(BrokenReader));
        let err = source.next_line().unwrap_err();
        assert_eq!(err.to_string(), "unexpected EOF");
    }

    #[test]
    fn mock_empty_is_end_of_stream() {
        let mut source = MockLines::empty();
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn mock_from_text_blank_line_is_a_line() {
        // "\n" is one scanned blank line, not an empty stream.
        let mut source = MockLines::from_text("\n");
        assert_eq!(source.next_line().unwrap(), Some(String::new()));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn mock_from_text_empty_is_no_lines() {
        let mut source = MockLines::from_text("");
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn mock_plays_back_errors_in_order() {
        let mut source = MockLines::lines(["ok"])
            .then_error(io::ErrorKind::UnexpectedEof, "unexpected EOF")
            .then_line("after");

        assert_eq!(source.next_line().unwrap(), Some("ok".to_string()));
        assert!(source.next_line().is_err());
        assert_eq!(source.next_line().unwrap(), Some("after".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
    }
}
