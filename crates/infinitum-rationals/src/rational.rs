//! Arbitrary precision rational numbers.
//!
//! Rationals are always stored in lowest terms with a positive
//! denominator; zero is `0/1`. Magnitude work is delegated to the
//! integer engine on numerator/denominator pairs.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use infinitum_integers::{Integer, NumError};

/// An arbitrary precision rational number in canonical reduced form.
///
/// Invariants: the denominator is strictly positive,
/// `gcd(|numerator|, denominator) = 1`, and zero is `0/1`. Every
/// constructor and operation re-establishes this form before returning.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: Integer,
    den: Integer,
}

impl Rational {
    /// Creates a rational from a numerator and denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `den` is zero.
    pub fn new(num: Integer, den: Integer) -> Result<Self, NumError> {
        if den.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self::reduced(num, den))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(num: Integer) -> Self {
        Self {
            num,
            den: Integer::one(),
        }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `den` is zero.
    pub fn from_i64(num: i64, den: i64) -> Result<Self, NumError> {
        Self::new(Integer::new(num), Integer::new(den))
    }

    /// Reduces by the gcd and moves the sign into the numerator.
    /// `den` must be non-zero.
    fn reduced(mut num: Integer, mut den: Integer) -> Self {
        debug_assert!(!den.is_zero());
        if num.is_zero() {
            return Self::from_integer(Integer::zero());
        }
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = num.gcd(&den);
        if !g.is_one() {
            num = &num / &g;
            den = &den / &g;
        }
        Self { num, den }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.num.clone()
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.den.clone()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Converts to an integer if the denominator is one.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.num.clone())
        } else {
            None
        }
    }

    /// The integer-only gate: the numerator when the value is integral.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] if the denominator is not one.
    pub fn as_integer(&self) -> Result<&Integer, NumError> {
        if self.is_integer() {
            Ok(&self.num)
        } else {
            Err(NumError::TypeMismatch)
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.num.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self, NumError> {
        if self.num.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self::reduced(self.den.clone(), self.num.clone()))
    }

    /// Division that reports a zero divisor instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumError> {
        if rhs.num.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.num * &rhs.den,
            &self.den * &rhs.num,
        ))
    }

    /// Greatest common divisor of two integral values.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] if either operand has a
    /// denominator other than one.
    pub fn gcd(&self, other: &Self) -> Result<Self, NumError> {
        let a = self.as_integer()?;
        let b = other.as_integer()?;
        Ok(Self::from_integer(a.gcd(b)))
    }

    /// Raises an integral value to a non-negative integer power.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] if the base is not integral or
    /// the exponent is negative.
    pub fn pow(&self, exp: i64) -> Result<Self, NumError> {
        let base = self.as_integer()?;
        let exp = u64::try_from(exp).map_err(|_| NumError::TypeMismatch)?;
        Ok(Self::from_integer(base.pow(exp)))
    }

    /// Modular exponentiation over integral operands.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] if any operand is not integral
    /// or the exponent is negative, and [`NumError::DivisionByZero`] if
    /// the modulus is not strictly positive.
    pub fn modexp(&self, exp: &Self, modulus: &Self) -> Result<Self, NumError> {
        let base = self.as_integer()?;
        let exp = exp.as_integer()?;
        let modulus = modulus.as_integer()?;
        Ok(Self::from_integer(base.modexp(exp, modulus)?))
    }

    /// Exact conversion of an integral value to an i64.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] for a non-integral value and
    /// [`NumError::Range`] if the value does not fit.
    pub fn to_i64(&self) -> Result<i64, NumError> {
        self.as_integer()?.to_i64()
    }

    /// Exact conversion of an integral value to a u64.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::TypeMismatch`] for a non-integral value and
    /// [`NumError::Range`] if the value is negative or does not fit.
    pub fn to_u64(&self) -> Result<u64, NumError> {
        self.as_integer()?.to_u64()
    }

    /// Builds the exact rational value of an f64.
    ///
    /// The binary encoding is decomposed into sign, mantissa and power
    /// of two, so the result is the precise value the float encodes,
    /// not a decimal approximation.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Range`] for NaN or an infinity.
    pub fn from_f64_exact(value: f64) -> Result<Self, NumError> {
        if !value.is_finite() {
            return Err(NumError::Range);
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let exp = i32::try_from((bits >> 52) & 0x7ff).map_err(|_| NumError::Range)?;
        let frac = bits & ((1u64 << 52) - 1);
        let (mant, e2) = if exp == 0 {
            if frac == 0 {
                return Ok(Self::zero());
            }
            (frac, 1 - 1023 - 52)
        } else {
            (frac | (1u64 << 52), exp - 1023 - 52)
        };
        Ok(Self::from_mantissa_exp2(negative, mant, e2))
    }

    /// Builds the exact rational value of an f32.
    ///
    /// # Errors
    ///
    /// Returns [`NumError::Range`] for NaN or an infinity.
    pub fn from_f32_exact(value: f32) -> Result<Self, NumError> {
        if !value.is_finite() {
            return Err(NumError::Range);
        }
        let bits = value.to_bits();
        let negative = bits >> 31 == 1;
        let exp = i32::try_from((bits >> 23) & 0xff).map_err(|_| NumError::Range)?;
        let frac = u64::from(bits & ((1u32 << 23) - 1));
        let (mant, e2) = if exp == 0 {
            if frac == 0 {
                return Ok(Self::zero());
            }
            (frac, 1 - 127 - 23)
        } else {
            (frac | (1u64 << 23), exp - 127 - 23)
        };
        Ok(Self::from_mantissa_exp2(negative, mant, e2))
    }

    fn from_mantissa_exp2(negative: bool, mant: u64, e2: i32) -> Self {
        let mut num = Integer::from_u64(mant);
        if negative {
            num = -num;
        }
        let scale = Integer::from_u64(2).pow(u64::from(e2.unsigned_abs()));
        if e2 >= 0 {
            Self::from_integer(num * scale)
        } else {
            Self::reduced(num, scale)
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiply; valid because denominators are positive.
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduced(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<Integer> for Rational {
    fn from(num: Integer) -> Self {
        Self::from_integer(num)
    }
}

impl From<i64> for Rational {
    fn from(num: i64) -> Self {
        Self::from_integer(Integer::new(num))
    }
}
