//! Extended Euclidean algorithm and modular inverses.

use crate::{Error, Result, Unsigned};

/// Result of [`Unsigned::extended_gcd`]: `a·x + b·y == gcd`.
///
/// The coefficients are two's-complement values and usually of opposite
/// sign. Their magnitudes are bounded by half of the larger operand, so
/// the sign bit is never ambiguous.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bezout<const L: usize> {
    pub gcd: Unsigned<L>,
    pub x: Unsigned<L>,
    pub y: Unsigned<L>,
}

impl<const L: usize> Unsigned<L> {
    /// Iterative extended Euclidean algorithm.
    ///
    /// Internally runs on `(a, b)` with `a >= b`, swapping the operands if
    /// needed; the returned coefficients are un-swapped again, so `x`
    /// always belongs to `self` and `y` to `other`.
    pub fn extended_gcd(&self, other: &Self) -> Bezout<L> {
        let swapped = self < other;
        let (mut a, mut b) = if swapped {
            (other.clone(), self.clone())
        } else {
            (self.clone(), other.clone())
        };

        let mut x1 = Self::zero();
        let mut x2 = Self::one();
        let mut y1 = Self::one();
        let mut y2 = Self::zero();

        // div_rem errs exactly when b reaches zero, ending the loop
        while let Ok((q, r)) = a.div_rem(&b) {
            let x = x2.wrapping_sub(&x1.wrapping_mul(&q));
            let y = y2.wrapping_sub(&y1.wrapping_mul(&q));

            a = b;
            b = r;
            x2 = x1;
            x1 = x;
            y2 = y1;
            y1 = y;
        }

        let (x, y) = if swapped { (y2, x2) } else { (x2, y2) };
        Bezout { gcd: a, x, y }
    }

    pub fn gcd(&self, other: &Self) -> Self {
        self.extended_gcd(other).gcd
    }

    /// The inverse of `self` modulo `modulus`, in `[0, modulus)`.
    ///
    /// Requires `0 < self < modulus` and `gcd(self, modulus) == 1`;
    /// anything else is [`Error::InvalidDomain`]. The raw Bézout
    /// coefficient comes back with either sign, so a negative one is
    /// folded into the canonical range by subtracting from the modulus.
    pub fn modular_inverse(&self, modulus: &Self) -> Result<Self> {
        if self.is_zero() || *self >= *modulus {
            return Err(Error::InvalidDomain);
        }

        let bezout = modulus.extended_gcd(self);
        if !bezout.gcd.is_one() {
            return Err(Error::InvalidDomain);
        }

        let inverse = bezout.y.absolute_value().rem(modulus)?;
        Ok(if bezout.y.is_negative() {
            modulus.wrapping_sub(&inverse)
        } else {
            inverse
        })
    }
}
