//! Forgiving line-at-a-time keyboard input for CLI applications.
//!
//! `keyread` reads one line from a console stream and interprets it as
//! a trimmed string, a base-10 integer, or a base-10 fraction. Bad
//! input never reaches the caller: each rejected line prints a short
//! retry message and another line is read, until a valid value arrives
//! or the stream ends.
//!
//! # Quick Start
//!
//! ```no_run
//! let name = keyread::read_string();
//! let age = keyread::read_integer();
//! let height = keyread::read_fraction();
//! ```
//!
//! Or hold a reader over stdin explicitly:
//!
//! ```no_run
//! use keyread::LineReader;
//!
//! let mut reader = LineReader::new();
//! let age = reader.read_integer();
//! ```
//!
//! # Architecture
//!
//! One line flows through three stages per attempt:
//!
//! ```text
//! LineSource        → one raw line, end-of-stream, or transport error
//!   normalize       → surrounding whitespace stripped
//!   parse_*         → value, or a classified failure with its message
//! LineReader        → prints the message and retries, or returns
//! ```
//!
//! Failures classify as not-a-number (including blank and multi-token
//! lines), too big, too small, or a transport failure, each with its
//! own console message. A stream that ends before producing any line
//! yields the type's zero value (`""`, `0`, `0.0`) with no message.
//!
//! # Testing
//!
//! Every seam is injectable. [`MockLines`] scripts lines and transport
//! errors, [`BufLines`] adapts any in-memory reader, and the message
//! sink can be any `io::Write`:
//!
//! ```
//! use keyread::{LineReader, MockLines};
//!
//! let source = MockLines::lines(["not a number", "18"]);
//! let mut reader = LineReader::with_io(source, Vec::<u8>::new());
//! assert_eq!(reader.read_integer(), 18);
//! ```

mod error;
mod parse;
mod reader;
mod source;

pub use error::InputError;
pub use parse::{normalize, parse_fraction, parse_integer};
pub use reader::{read_fraction, read_integer, read_string, LineReader};
pub use source::{BufLines, LineSource, MockLines, StdinLines};
