//! Montgomery arithmetic: division-free modular multiplication.
//!
//! A value $x$ is mapped to its residue $x \cdot R \bmod n$ for the fixed
//! scale $R = 2^{W+2}$; in that representation the reduction after a
//! product is a plain sequence of right shifts. The overhead of mapping in
//! and out is negligible when many multiplications run against the same
//! modulus, i.e. exponentiation.
//!
//! Representations in the domain are incompletely reduced (cf.
//! [Incomplete reduction in modular arithmetic (2002)][yanik-savas-koc]);
//! they are driven back below the modulus by the map out.
//!
//! [yanik-savas-koc]: https://api.semanticscholar.org/CorpusID:17543811

use zeroize::Zeroize;

use crate::{DIGIT_BITS, Error, Result, Unsigned};

/// Montgomery arithmetic against one fixed odd modulus.
///
/// Owns the modulus and its scaling factor $F = R^2 \bmod n$, computed once
/// at construction. Every call site that loops against a single modulus
/// builds one context and reuses it; two live contexts never interfere, so
/// interleaving computations over different moduli is safe by construction.
#[derive(Clone, Zeroize)]
pub struct MontgomeryContext<const L: usize> {
    n: Unsigned<L>,
    factor: Unsigned<L>,
}

impl<const L: usize> MontgomeryContext<L> {
    /// The reduction shifts two bits past the width, so the squared scale
    /// is $2^{2(W+2)} \bmod n$.
    const FACTOR_DOUBLINGS: usize = 2 * (Unsigned::<L>::BITS + 2);

    /// Set up for the given modulus, computing the scaling factor by
    /// repeated doubling-and-reduce.
    ///
    /// Rejects even and zero moduli: the working radix is a power of two,
    /// so oddness of `n` alone already guarantees gcd(R, n) = 1, i.e. that
    /// R is invertible modulo n. No gcd is computed here.
    pub fn new(n: Unsigned<L>) -> Result<Self> {
        if n.is_zero() || !n.is_odd() {
            return Err(Error::InvalidDomain);
        }

        let mut factor = Unsigned::one();
        for _ in 0..Self::FACTOR_DOUBLINGS {
            factor.shift_left_once();
            if factor >= n {
                factor.wrapping_sub_assign(&n);
            }
        }
        log::trace!(
            "montgomery factor set after {} doublings",
            Self::FACTOR_DOUBLINGS,
        );

        Ok(Self { n, factor })
    }

    /// Adopt a caller-supplied factor instead of computing one.
    ///
    /// The factor must equal $2^{2(W+2)} \bmod n$ for results to mean
    /// anything; this constructor exists so tests can pin known factors
    /// and callers can revive a context they persisted.
    pub fn with_factor(n: Unsigned<L>, factor: Unsigned<L>) -> Result<Self> {
        if n.is_zero() || !n.is_odd() {
            return Err(Error::InvalidDomain);
        }
        Ok(Self { n, factor })
    }

    pub fn modulus(&self) -> &Unsigned<L> {
        &self.n
    }

    pub fn factor(&self) -> &Unsigned<L> {
        &self.factor
    }

    /// The Montgomery product $a \cdot b \cdot R^{-1} \bmod n$, bit-serial.
    ///
    /// The multiplicand is doubled up front (the scale's two extra bits pay
    /// for it); then, per bit of `b`, the running sum takes a conditional
    /// `+n` to become even, a conditional `+2a` when the bit is set, and a
    /// halving. Three trailing iterations flush the doubled multiplicand's
    /// overflow back down. No division anywhere.
    ///
    /// Intermediate sums exceed the width by at most the guard digit;
    /// in-domain values stay below 4n/3, within the width for the moduli
    /// this crate meets (primality candidates near half width).
    fn product(&self, a: &Unsigned<L>, b: &Unsigned<L>) -> Unsigned<L> {
        let mut multiplicand = a.clone();
        multiplicand.shift_left_once();

        let mut sum = Unsigned::zero();
        for i in 0..L {
            let word = b.digits[i];
            for j in 0..DIGIT_BITS {
                if sum.is_odd() {
                    sum.carrying_add_assign(&self.n);
                }
                if word & (1 << j) != 0 {
                    sum.carrying_add_assign(&multiplicand);
                }
                sum.shift_right_once();
            }
        }

        // the overflow bits of b are zero, only the parity correction runs
        for _ in 0..3 {
            if sum.is_odd() {
                sum.carrying_add_assign(&self.n);
            }
            sum.shift_right_once();
        }

        debug_assert_eq!(sum.guard, 0);
        sum
    }

    /// Map into the domain: $x \mapsto x \cdot R \bmod n$.
    pub fn to_domain(&self, x: &Unsigned<L>) -> Unsigned<L> {
        self.product(x, &self.factor)
    }

    /// Map out of the domain: $y \mapsto y \cdot R^{-1} \bmod n$.
    pub fn from_domain(&self, y: &Unsigned<L>) -> Unsigned<L> {
        self.product(&Unsigned::one(), y)
    }

    /// $a \cdot b \bmod n$: both operands map in, multiply in-domain, map
    /// back out.
    pub fn modmul(&self, a: &Unsigned<L>, b: &Unsigned<L>) -> Unsigned<L> {
        let a_residue = self.to_domain(a);
        let b_residue = self.to_domain(b);
        self.from_domain(&self.product(&a_residue, &b_residue))
    }

    /// $a^b \bmod n$: right-to-left binary square-and-multiply, entirely
    /// in the domain.
    ///
    /// The accumulator starts as the in-domain one, picks up the running
    /// square at every set exponent bit, and maps out once at the end.
    /// Must agree with the naive [`Unsigned::modpow`] for every odd
    /// modulus; the naive path is the executable reference.
    pub fn modpow(&self, base: &Unsigned<L>, exponent: &Unsigned<L>) -> Unsigned<L> {
        let mut square = self.product(&self.factor, base);
        let mut power = self.product(&self.factor, &Unsigned::one());

        for i in 0..L {
            let word = exponent.digits[i];
            for j in 0..DIGIT_BITS {
                if word & (1 << j) != 0 {
                    power = self.product(&power, &square);
                }
                square = self.product(&square, &square);
            }
        }

        self.from_domain(&power)
    }
}

/// One-shot $a^b \bmod n$ for odd `n`, building a context per call.
///
/// Loops against one modulus should build the [`MontgomeryContext`] once
/// and call [`MontgomeryContext::modpow`] instead.
pub fn montgomery_modpow<const L: usize>(
    base: &Unsigned<L>,
    exponent: &Unsigned<L>,
    modulus: &Unsigned<L>,
) -> Result<Unsigned<L>> {
    MontgomeryContext::new(modulus.clone()).map(|ctx| ctx.modpow(base, exponent))
}
