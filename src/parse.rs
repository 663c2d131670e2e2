//! Whitespace normalization and strict numeric classification.
//!
//! Both parse functions work on exactly one line of text: the line is
//! trimmed, then converted as a single token or rejected. A line with
//! interior whitespace (`"123 456"`) fails the strict whole-string
//! parse and classifies the same as non-numeric text; no separate
//! token counting happens, or is needed.

use std::num::IntErrorKind;

use crate::error::InputError;

/// Strip leading and trailing whitespace (spaces, tabs, newlines).
///
/// Pure and idempotent; applied to every line before any
/// classification decision.
pub fn normalize(text: &str) -> &str {
    text.trim()
}

/// Parse one line as a base-10 integer.
///
/// Accepts an optional leading `+` or `-` followed by digits. Rejects
/// fractional input, multiple tokens, and anything non-numeric. Input
/// is normalized first, so raw lines can be passed directly.
pub fn parse_integer(text: &str) -> Result<i64, InputError> {
    let text = normalize(text);
    if text.is_empty() {
        return Err(InputError::BlankLine);
    }

    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::InvalidDigit => InputError::NotANumber,
        IntErrorKind::PosOverflow => InputError::TooBig,
        IntErrorKind::NegOverflow => InputError::TooSmall,
        IntErrorKind::Empty => InputError::BlankLine,
        kind => unrecognized_int_error(kind),
    })
}

/// Parse one line as a base-10 fraction, producing an `f64`.
///
/// Accepts standard decimal notation: optional sign, digits, optional
/// decimal point and digits, optional exponent. `inf`, `infinity` and
/// `nan` (any case, optional sign) are accepted as values.
///
/// The platform float parser never reports range failures: it
/// saturates huge magnitudes to infinity and rounds tiny ones to zero.
/// Out-of-range lexemes are therefore detected here, and classified by
/// the sign of the literal.
pub fn parse_fraction(text: &str) -> Result<f64, InputError> {
    let text = normalize(text);
    if text.is_empty() {
        return Err(InputError::BlankLine);
    }

    let value: f64 = text.parse().map_err(|_| InputError::NotANumber)?;

    if (value.is_infinite() && !spells_infinity(text))
        || (value == 0.0 && has_nonzero_mantissa(text))
    {
        return Err(if text.starts_with('-') {
            InputError::TooSmall
        } else {
            InputError::TooBig
        });
    }

    Ok(value)
}

/// The integer parser reported a failure outside its documented set.
///
/// This means a broken assumption about the platform's numeric parsing,
/// not bad input, and is deliberately unrecoverable.
#[cold]
fn unrecognized_int_error(kind: &IntErrorKind) -> ! {
    panic!("integer parsing reported an unrecognized error kind: {kind:?}");
}

/// Does the lexeme spell out an infinity (`inf` / `infinity`, optional
/// sign, any case)?
fn spells_infinity(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(['+', '-'])
        .unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Does the mantissa (everything before any exponent) contain a
/// nonzero digit? True for `"1e-999"`, false for `"0.000"` or `"0e99"`.
fn has_nonzero_mantissa(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .unwrap_or("")
        .bytes()
        .any(|b| (b'1'..=b'9').contains(&b))
}
