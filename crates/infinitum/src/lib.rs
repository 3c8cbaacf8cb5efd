//! # Infinitum
//!
//! An exact arbitrary-precision integer and rational arithmetic engine.
//!
//! Infinitum gives callers exact results for numbers of unbounded
//! magnitude and exact rational values, with predictable failure modes
//! instead of silent truncation or floating-point approximation.
//!
//! ## Features
//!
//! - **Explicit limb engine**: schoolbook big-integer arithmetic with
//!   exact carry/borrow propagation, no host big-integer type involved
//! - **Canonical rationals**: always fully reduced, denominator always
//!   positive, zero always `0/1`
//! - **Base-N codec**: parse and format literals in any radix 2 to 36
//! - **Closed error taxonomy**: division-by-zero, parse, range and
//!   type-mismatch, each with a stable wire code
//!
//! ## Quick Start
//!
//! ```rust
//! use infinitum::prelude::*;
//!
//! let a = codec::parse("1/2")?;
//! let b = codec::parse("1/3")?;
//! assert_eq!(codec::format(&(&a + &b)), "5/6");
//!
//! let big = codec::parse("4")?.modexp(&codec::parse("13")?, &codec::parse("497")?)?;
//! assert_eq!(codec::format(&big), "445");
//! # Ok::<(), NumError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use infinitum_integers as integers;
pub use infinitum_rationals as rationals;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use infinitum_integers::{Integer, NumError, Sign};
    pub use infinitum_rationals::{codec, Rational};
}
