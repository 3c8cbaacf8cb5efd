//! # infinitum-rationals
//!
//! Exact rational arithmetic for the Infinitum engine.
//!
//! This crate provides:
//! - `Rational`: a numerator/denominator pair of big integers, always
//!   held in canonical reduced form with a positive denominator
//! - `codec`: parsing and formatting of optionally-signed, optionally
//!   fractional literals in any radix from 2 to 36
//!
//! Integer-only operations (gcd, power, modular exponentiation,
//! fixed-width conversion) are gated on the denominator being one and
//! fail with [`NumError::TypeMismatch`] otherwise.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use infinitum_integers::{Integer, NumError, Sign};
pub use rational::Rational;
