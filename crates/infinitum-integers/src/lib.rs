//! # infinitum-integers
//!
//! Arbitrary precision integer arithmetic for the Infinitum engine.
//!
//! This crate implements big integers from scratch on an explicit limb
//! representation:
//! - `Integer`: sign plus a little-endian sequence of 64-bit limbs
//! - schoolbook add/sub/mul with exact carry and borrow propagation
//! - truncating division, Euclidean gcd, modular exponentiation
//! - exact conversion to and from fixed-width machine integers
//!
//! Every fallible operation reports through the closed [`NumError`]
//! taxonomy; nothing is truncated or approximated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
mod limb;

#[cfg(test)]
mod proptests;

pub use error::NumError;
pub use integer::{Integer, Sign};
