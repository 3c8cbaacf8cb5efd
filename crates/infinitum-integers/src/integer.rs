//! Arbitrary precision integers.
//!
//! This module provides the signed big integer type built on the limb
//! kernels: schoolbook arithmetic, truncating division, Euclidean gcd,
//! exponentiation by squaring, modular exponentiation, base conversion
//! and exact fixed-width conversion.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::NumError;
use crate::limb::{self, LimbBuf};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Sign of an integer.
///
/// Zero is sign-neutral: the canonical zero always carries `Sign::Zero`
/// and an empty limb buffer, so every value has exactly one encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly below zero.
    Negative,
    /// Exactly zero.
    #[default]
    Zero,
    /// Strictly above zero.
    Positive,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// An arbitrary precision integer.
///
/// Stored as a sign plus a little-endian limb magnitude with no
/// most-significant zero limb. Operations return new values; nothing is
/// mutated in place from the caller's perspective.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    sign: Sign,
    mag: LimbBuf,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let mag = Self::from_u64(value.unsigned_abs()).mag;
        let sign = match value.cmp(&0) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        };
        Self { sign, mag }
    }

    /// Creates a new integer from a u64.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut mag = LimbBuf::new();
        if value != 0 {
            mag.push(value);
        }
        let sign = if value == 0 { Sign::Zero } else { Sign::Positive };
        Self { sign, mag }
    }

    /// Builds an integer from a magnitude, canonicalizing the sign when
    /// the magnitude is zero.
    fn from_mag(sign: Sign, mag: LimbBuf) -> Self {
        if mag.is_empty() {
            Self::default()
        } else {
            debug_assert!(sign != Sign::Zero);
            Self { sign, mag }
        }
    }

    /// Parses an integer from a string in the given radix.
    ///
    /// Accepts an optional `+` or `-` sign, then one or more digits.
    /// Digits are case-insensitive; a `0x`/`0b` prefix is skipped at
    /// radix 16 and 2 respectively. Leading zeros are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Parse`] on an empty digit run or a digit out
    /// of range for the radix.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, NumError> {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36");
        let mut rest = s;
        let mut sign = Sign::Positive;
        if let Some(r) = rest.strip_prefix('-') {
            sign = Sign::Negative;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('+') {
            rest = r;
        }
        if radix == 16 {
            rest = rest
                .strip_prefix("0x")
                .or_else(|| rest.strip_prefix("0X"))
                .unwrap_or(rest);
        } else if radix == 2 {
            rest = rest
                .strip_prefix("0b")
                .or_else(|| rest.strip_prefix("0B"))
                .unwrap_or(rest);
        }
        if rest.is_empty() {
            return Err(NumError::Parse);
        }
        let mut mag = LimbBuf::new();
        for c in rest.chars() {
            let digit = c.to_digit(radix).ok_or(NumError::Parse)?;
            limb::mul_digit_add(&mut mag, u64::from(radix), u64::from(digit));
        }
        Ok(Self::from_mag(sign, mag))
    }

    /// Formats the value in the given radix: a `-` prefix for negative
    /// values, lowercase digits, no leading zeros except for `"0"`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    #[must_use]
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36");
        if self.is_zero() {
            return "0".to_string();
        }
        let mut mag = self.mag.clone();
        let mut digits = Vec::new();
        while !mag.is_empty() {
            let d = limb::div_rem_digit(&mut mag, u64::from(radix));
            digits.push(DIGITS[d as usize]);
        }
        let mut out = String::with_capacity(digits.len() + 1);
        if self.sign == Sign::Negative {
            out.push('-');
        }
        out.extend(digits.iter().rev().map(|&b| char::from(b)));
        out
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        if out.sign == Sign::Negative {
            out.sign = Sign::Positive;
        }
        out
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.sign {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns the number of bits in the magnitude; zero for zero.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        limb::bit_len(&self.mag)
    }

    /// Returns bit `i` of the magnitude, least-significant first.
    #[must_use]
    pub fn bit(&self, i: usize) -> bool {
        limb::bit(&self.mag, i)
    }

    /// Truncating division with remainder.
    ///
    /// Satisfies `divisor * quotient + remainder == self` with
    /// `0 <= |remainder| < |divisor|`; the quotient rounds toward zero
    /// and the remainder takes the dividend's sign.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), NumError> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((Self::default(), Self::default()));
        }
        let (q, r) = limb::div_rem(&self.mag, &divisor.mag);
        let q_sign = if self.sign == divisor.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Ok((Self::from_mag(q_sign, q), Self::from_mag(self.sign, r)))
    }

    /// Computes the greatest common divisor via the Euclidean algorithm.
    ///
    /// The result is non-negative; `gcd(x, 0) = |x|` and `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut u = self.mag.clone();
        let mut v = other.mag.clone();
        while !v.is_empty() {
            let (_, r) = limb::div_rem(&u, &v);
            u = v;
            v = r;
        }
        Self::from_mag(Sign::Positive, u)
    }

    /// Computes `self^exp` by repeated squaring.
    ///
    /// `x^0 = 1` for every `x`, including zero.
    #[must_use]
    pub fn pow(&self, mut exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = &base * &base;
        }
        result
    }

    /// Computes `self^exp mod modulus` by square-and-multiply, reducing
    /// after every product so intermediates stay below `modulus^2`.
    ///
    /// A negative base is first normalized into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `modulus` is not strictly
    /// positive, and [`NumError::TypeMismatch`] if `exp` is negative.
    pub fn modexp(&self, exp: &Self, modulus: &Self) -> Result<Self, NumError> {
        if exp.is_negative() {
            return Err(NumError::TypeMismatch);
        }
        if modulus.signum() <= 0 {
            return Err(NumError::DivisionByZero);
        }
        let (_, mut base) = self.div_rem(modulus)?;
        if base.is_negative() {
            base = &base + modulus;
        }
        // 1 mod modulus, so that modulus == 1 yields zero.
        let (_, mut result) = Self::one().div_rem(modulus)?;
        let bits = exp.bit_len();
        for i in 0..bits {
            if exp.bit(i) {
                let (_, r) = (&result * &base).div_rem(modulus)?;
                result = r;
            }
            if i + 1 == bits {
                break;
            }
            let (_, squared) = (&base * &base).div_rem(modulus)?;
            base = squared;
        }
        Ok(result)
    }

    /// Attempts an exact conversion to an i64.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Range`] if the value does not fit.
    pub fn to_i64(&self) -> Result<i64, NumError> {
        let mag = match self.mag.len() {
            0 => 0u64,
            1 => self.mag[0],
            _ => return Err(NumError::Range),
        };
        if self.sign == Sign::Negative {
            if mag > 1 << 63 {
                return Err(NumError::Range);
            }
            // mag == 2^63 wraps to exactly i64::MIN.
            Ok((mag as i64).wrapping_neg())
        } else {
            i64::try_from(mag).map_err(|_| NumError::Range)
        }
    }

    /// Attempts an exact conversion to a u64.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Range`] if the value is negative or does not
    /// fit.
    pub fn to_u64(&self) -> Result<u64, NumError> {
        if self.sign == Sign::Negative {
            return Err(NumError::Range);
        }
        match self.mag.len() {
            0 => Ok(0),
            1 => Ok(self.mag[0]),
            _ => Err(NumError::Range),
        }
    }

    fn add_values(a: &Self, b: &Self) -> Self {
        if a.is_zero() {
            return b.clone();
        }
        if b.is_zero() {
            return a.clone();
        }
        if a.sign == b.sign {
            return Self::from_mag(a.sign, limb::add(&a.mag, &b.mag));
        }
        // Opposite signs: subtract the smaller magnitude from the
        // larger, sign taken from the larger-magnitude operand.
        match limb::cmp(&a.mag, &b.mag) {
            Ordering::Equal => Self::default(),
            Ordering::Greater => Self::from_mag(a.sign, limb::sub(&a.mag, &b.mag)),
            Ordering::Less => Self::from_mag(b.sign, limb::sub(&b.mag, &a.mag)),
        }
    }

    fn mul_values(a: &Self, b: &Self) -> Self {
        if a.is_zero() || b.is_zero() {
            return Self::default();
        }
        let sign = if a.sign == b.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Self::from_mag(sign, limb::mul(&a.mag, &b.mag))
    }

    fn neg_value(&self) -> Self {
        let mut out = self.clone();
        out.sign = out.sign.flip();
        out
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::from_u64(1)
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag.len() == 1 && self.mag[0] == 1
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let mag = limb::cmp(&self.mag, &other.mag);
        if self.sign == Sign::Negative {
            mag.reverse()
        } else {
            mag
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str_radix(10))
    }
}

impl FromStr for Integer {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::add_values(&self, &rhs)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self::add_values(&self, rhs)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer::add_values(self, rhs)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::add_values(&self, &rhs.neg_value())
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self::add_values(&self, &rhs.neg_value())
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer::add_values(self, &rhs.neg_value())
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::mul_values(&self, &rhs)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self::mul_values(&self, rhs)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer::mul_values(self, rhs)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        let (q, _) = self.div_rem(rhs).expect("division by zero");
        q
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Self::Output {
        let (_, r) = self.div_rem(rhs).expect("division by zero");
        r
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.neg_value()
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        self.neg_value()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
