//! Failure classification for read attempts.
//!
//! The `Display` string of each variant is the exact message printed to
//! the console before a retry. Callers of the public read operations
//! never see these values; they circulate between the classifier and
//! the retry loop.

use std::io;

/// Why a single read attempt did not produce a value.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input was not a single well-formed base-10 number.
    ///
    /// Covers non-numeric characters, a lone sign, a fractional part on
    /// the integer path, and multiple whitespace-separated tokens on
    /// one line.
    #[error("Sorry I don't think that was a number. Try again...")]
    NotANumber,

    /// The line was empty after trimming (numeric paths only).
    ///
    /// Reported with the same message as [`NotANumber`](Self::NotANumber);
    /// kept distinct so the classifier's outcome is unambiguous.
    #[error("Sorry I don't think that was a number. Try again...")]
    BlankLine,

    /// The number is above the representable range of the target type.
    #[error("Sorry that number was too big. Try again...")]
    TooBig,

    /// The number is below the representable range of the target type.
    #[error("Sorry that number was too small. Try again...")]
    TooSmall,

    /// The line source failed with a genuine I/O error.
    ///
    /// Clean end of stream is not a `ScanFailed`; sources signal it
    /// separately (see [`LineSource`](crate::LineSource)).
    #[error("Sorry I could not scan the line. Error: {0}. Try again...")]
    ScanFailed(#[source] io::Error),
}
