//! Parsing and formatting of rational literals in radix 2 to 36.
//!
//! The grammar is `['-'|'+'] digits ['/' ['-'|'+'] digits]` with
//! case-insensitive digits. ASCII whitespace is skipped ahead of each
//! signed component and nowhere else, so `"1/ 2"` parses while
//! `"1 /2"` and `"1/2 "` do not. A
//! denominator written as zero parses as tokens but is rejected by
//! [`Rational::new`] with a division-by-zero error, which is a distinct
//! kind from a parse error.

use infinitum_integers::{Integer, NumError};

use crate::rational::Rational;

/// Parses a decimal (radix 10) rational literal.
///
/// # Errors
///
/// Returns [`NumError::Parse`] for malformed input and
/// [`NumError::DivisionByZero`] for a zero denominator.
pub fn parse(s: &str) -> Result<Rational, NumError> {
    parse_radix(s, 10)
}

/// Parses a rational literal in the given radix.
///
/// # Errors
///
/// Returns [`NumError::Parse`] for an empty digit run, a digit out of
/// range for the radix, or a malformed separator, and
/// [`NumError::DivisionByZero`] for a zero denominator.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn parse_radix(s: &str, radix: u32) -> Result<Rational, NumError> {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");
    // Whitespace is only valid ahead of a signed component; anything
    // left adjacent to the digits is an invalid digit downstream.
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    match s.split_once('/') {
        None => Ok(Rational::from_integer(Integer::from_str_radix(s, radix)?)),
        Some((num, den)) => {
            let num = Integer::from_str_radix(num, radix)?;
            let den = den.trim_start_matches(|c: char| c.is_ascii_whitespace());
            let den = Integer::from_str_radix(den, radix)?;
            Rational::new(num, den)
        }
    }
}

/// Formats a rational as a decimal (radix 10) literal.
#[must_use]
pub fn format(value: &Rational) -> String {
    format_radix(value, 10)
}

/// Formats a rational in the given radix.
///
/// Emits the canonical reduced value: a `-` prefix for negatives, no
/// leading zeros, and `/denominator` only when the denominator is not
/// one. Re-parsing the output at the same radix reproduces the value.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
#[must_use]
pub fn format_radix(value: &Rational, radix: u32) -> String {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");
    let mut out = value.numerator().to_str_radix(radix);
    if !value.is_integer() {
        out.push('/');
        out.push_str(&value.denominator().to_str_radix(radix));
    }
    out
}
