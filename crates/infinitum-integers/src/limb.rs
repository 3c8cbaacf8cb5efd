//! Magnitude kernels over the limb representation.
//!
//! A magnitude is a little-endian sequence of limbs with no
//! most-significant zero limb; the canonical zero is the empty buffer.
//! Every kernel routes carries and borrows through a wider accumulator,
//! never relying on native wraparound for correctness.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

/// One digit of a magnitude, radix 2^64.
pub(crate) type Limb = u64;

/// Number of limbs kept inline before spilling to the heap.
pub(crate) const INLINE_LIMBS: usize = 4;

pub(crate) const LIMB_BITS: usize = 64;

/// Magnitude buffer, least-significant limb first.
pub(crate) type LimbBuf = SmallVec<[Limb; INLINE_LIMBS]>;

/// Drops most-significant zero limbs. Mandatory after subtraction and
/// division so zero keeps its single encoding.
pub(crate) fn trim(buf: &mut LimbBuf) {
    while buf.last() == Some(&0) {
        buf.pop();
    }
}

/// Compares magnitudes by limb count, then lexicographically from the
/// most-significant limb down.
pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Schoolbook addition of magnitudes.
pub(crate) fn add(a: &[Limb], b: &[Limb]) -> LimbBuf {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = LimbBuf::with_capacity(long.len() + 1);
    let mut carry: u128 = 0;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().map_or(0, u128::from);
        let sum = u128::from(x) + y + carry;
        out.push(sum as Limb);
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        out.push(carry as Limb);
    }
    out
}

/// Schoolbook subtraction of magnitudes; the caller guarantees `a >= b`.
pub(crate) fn sub(a: &[Limb], b: &[Limb]) -> LimbBuf {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out = LimbBuf::with_capacity(a.len());
    let mut borrow = false;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        let (d, b1) = x.overflowing_sub(y);
        let (d, b2) = d.overflowing_sub(Limb::from(borrow));
        out.push(d);
        borrow = b1 | b2;
    }
    debug_assert!(!borrow);
    trim(&mut out);
    out
}

/// Schoolbook multiplication into an `a.len() + b.len()` buffer.
pub(crate) fn mul(a: &[Limb], b: &[Limb]) -> LimbBuf {
    if a.is_empty() || b.is_empty() {
        return LimbBuf::new();
    }
    let mut out: LimbBuf = smallvec![0; a.len() + b.len()];
    for (i, &y) in b.iter().enumerate() {
        if y == 0 {
            continue;
        }
        let factor = u128::from(y);
        let mut carry: u128 = 0;
        for (j, &x) in a.iter().enumerate() {
            let cell = u128::from(out[i + j]) + u128::from(x) * factor + carry;
            out[i + j] = cell as Limb;
            carry = cell >> LIMB_BITS;
        }
        let mut k = i + a.len();
        while carry != 0 {
            let cell = u128::from(out[k]) + carry;
            out[k] = cell as Limb;
            carry = cell >> LIMB_BITS;
            k += 1;
        }
    }
    trim(&mut out);
    out
}

/// Restoring binary long division of magnitudes.
///
/// The divisor must be non-zero. Returns `(quotient, remainder)` with
/// `remainder < b`.
pub(crate) fn div_rem(a: &[Limb], b: &[Limb]) -> (LimbBuf, LimbBuf) {
    debug_assert!(!b.is_empty());
    match cmp(a, b) {
        Ordering::Less => return (LimbBuf::new(), LimbBuf::from_slice(a)),
        Ordering::Equal => return (smallvec![1], LimbBuf::new()),
        Ordering::Greater => {}
    }
    let shift = bit_len(a) - bit_len(b);
    let mut den = shl(b, shift);
    let mut rem = LimbBuf::from_slice(a);
    let mut quot = LimbBuf::new();
    for i in (0..=shift).rev() {
        if cmp(&rem, &den) != Ordering::Less {
            rem = sub(&rem, &den);
            set_bit(&mut quot, i);
        }
        shr1(&mut den);
    }
    (quot, rem)
}

/// Short division by a single non-zero limb, in place; returns the
/// remainder. Backs the formatter's repeated division by the radix.
pub(crate) fn div_rem_digit(m: &mut LimbBuf, d: Limb) -> Limb {
    debug_assert!(d != 0);
    let wide = u128::from(d);
    let mut rem: u128 = 0;
    for limb in m.iter_mut().rev() {
        let cur = (rem << LIMB_BITS) | u128::from(*limb);
        *limb = (cur / wide) as Limb;
        rem = cur % wide;
    }
    trim(m);
    rem as Limb
}

/// In-place `m = m * factor + addend`. Backs the parser's digit
/// accumulation.
pub(crate) fn mul_digit_add(m: &mut LimbBuf, factor: Limb, addend: Limb) {
    let wide = u128::from(factor);
    let mut carry = u128::from(addend);
    for limb in m.iter_mut() {
        let cell = u128::from(*limb) * wide + carry;
        *limb = cell as Limb;
        carry = cell >> LIMB_BITS;
    }
    while carry != 0 {
        m.push(carry as Limb);
        carry >>= LIMB_BITS;
    }
    trim(m);
}

/// Number of significant bits; zero for the empty magnitude.
pub(crate) fn bit_len(m: &[Limb]) -> usize {
    match m.last() {
        None => 0,
        Some(&top) => (m.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize),
    }
}

/// Value of bit `i`, counting from the least-significant bit.
pub(crate) fn bit(m: &[Limb], i: usize) -> bool {
    m.get(i / LIMB_BITS)
        .map_or(false, |&limb| (limb >> (i % LIMB_BITS)) & 1 == 1)
}

/// Left shift by `bits`, producing a fresh buffer.
pub(crate) fn shl(m: &[Limb], bits: usize) -> LimbBuf {
    if m.is_empty() {
        return LimbBuf::new();
    }
    let limb_shift = bits / LIMB_BITS;
    let bit_shift = bits % LIMB_BITS;
    let mut out: LimbBuf = smallvec![0; m.len() + limb_shift + 1];
    for (i, &x) in m.iter().enumerate() {
        if bit_shift == 0 {
            out[i + limb_shift] |= x;
        } else {
            out[i + limb_shift] |= x << bit_shift;
            out[i + limb_shift + 1] |= x >> (LIMB_BITS - bit_shift);
        }
    }
    trim(&mut out);
    out
}

/// Halves the magnitude in place.
pub(crate) fn shr1(m: &mut LimbBuf) {
    let mut carry: Limb = 0;
    for limb in m.iter_mut().rev() {
        let next = *limb << (LIMB_BITS - 1);
        *limb = (*limb >> 1) | carry;
        carry = next;
    }
    trim(m);
}

fn set_bit(m: &mut LimbBuf, i: usize) {
    let idx = i / LIMB_BITS;
    if m.len() <= idx {
        m.resize(idx + 1, 0);
    }
    m[idx] |= 1 << (i % LIMB_BITS);
}
