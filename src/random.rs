//! Random values behind the [`rand_core::RngCore`] seam.
//!
//! The bundled [`WeakRng`] is a fast, non-cryptographic generator, seeded
//! from the wall clock by default and overridable for deterministic tests.
//! This is a documented weakness, not an oversight. Key generation for
//! production use should pass a cryptographically strong `RngCore`
//! implementation instead; every call site in this crate only sees the
//! trait.

use rand_core::{impls, RngCore};

use crate::{Digit, DIGIT_BITS, Error, Result, Unsigned};

/// xorshift64* generator. NOT cryptographically strong.
#[derive(Clone, Debug)]
pub struct WeakRng {
    state: u64,
}

impl WeakRng {
    /// Fixed seed, fixed sequence. The deterministic-test override.
    pub fn seeded(seed: u64) -> Self {
        // a xorshift state must never be zero
        Self {
            state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
        }
    }

    /// Seconds times microseconds since the epoch. Trivially guessable;
    /// see the module notes.
    #[cfg(feature = "std")]
    pub fn from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|t| t.as_secs().wrapping_mul(t.subsec_micros() as u64))
            .unwrap_or(0);
        Self::seeded(seed)
    }
}

impl RngCore for WeakRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<const L: usize> Unsigned<L> {
    /// Uniform value below $2^{bit\\_len}$: full-width randomness masked
    /// down to `bit_len` bits. `bit_len` outside `[1, BITS]` is
    /// [`Error::InvalidLength`].
    pub fn random(rng: &mut impl RngCore, bit_len: usize) -> Result<Self> {
        if bit_len < 1 || bit_len > Self::BITS {
            return Err(Error::InvalidLength);
        }

        let mut x = Self::zero();
        for (i, digit) in x.digits.iter_mut().enumerate() {
            *digit = rng.next_u64() as Digit;

            let low = i * DIGIT_BITS;
            if low >= bit_len {
                *digit = 0;
            } else if low + DIGIT_BITS > bit_len {
                *digit &= (1 << (bit_len - low)) - 1;
            }
        }
        Ok(x)
    }

    /// Uniform value in the open range `(0, range)`; `range` below 2 is
    /// [`Error::InvalidDomain`].
    pub fn random_in_range(rng: &mut impl RngCore, range: &Self) -> Result<Self> {
        let one = Self::one();
        if *range <= one {
            return Err(Error::InvalidDomain);
        }

        let range_min1 = range.wrapping_sub(&one);
        let x = Self::random(rng, Self::BITS)?.rem(&range_min1)?;
        Ok(x.wrapping_add(&one))
    }

    /// Random value in `(0, coprime)` with `gcd(value, coprime) == 1`,
    /// by redrawing until the gcd check passes.
    pub fn random_coprime(rng: &mut impl RngCore, coprime: &Self) -> Result<Self> {
        loop {
            let x = Self::random_in_range(rng, coprime)?;
            if x.gcd(coprime).is_one() {
                return Ok(x);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Unsigned;

    type U = Unsigned<3>;

    #[test]
    fn seeded_determinism() {
        let mut a = WeakRng::seeded(42);
        let mut b = WeakRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }

        let mut c = WeakRng::seeded(43);
        assert_ne!(a.next_u64(), c.next_u64());
    }

    #[test]
    fn zero_seed_still_generates() {
        let mut rng = WeakRng::seeded(0);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn sequence_varies() {
        let mut rng = WeakRng::seeded(7);
        let first = rng.next_u64();
        assert!((0..64).any(|_| rng.next_u64() != first));
    }

    #[test]
    fn bit_length_is_respected() {
        let mut rng = WeakRng::seeded(0xfeed);
        for bit_len in [1, 5, crate::DIGIT_BITS, U::BITS - 1, U::BITS] {
            for _ in 0..16 {
                let x = U::random(&mut rng, bit_len).unwrap();
                assert!(x.significant_bits() <= bit_len);
                assert_eq!(x.guard, 0);
            }
        }
    }

    #[test]
    fn single_bit_draws() {
        let mut rng = WeakRng::seeded(1);
        for _ in 0..16 {
            assert!(U::random(&mut rng, 1).unwrap() <= U::one());
        }
    }

    #[test]
    fn invalid_bit_lengths() {
        let mut rng = WeakRng::seeded(1);
        assert_eq!(U::random(&mut rng, 0), Err(Error::InvalidLength));
        assert_eq!(U::random(&mut rng, U::BITS + 1), Err(Error::InvalidLength));
    }

    #[test]
    fn strict_range_bounds() {
        let mut rng = WeakRng::seeded(0xdecaf);
        let range = U::from_digit(1000);
        for _ in 0..100 {
            let x = U::random_in_range(&mut rng, &range).unwrap();
            assert!(!x.is_zero());
            assert!(x < range);
        }
        // the minimal valid range only ever yields 1
        let two = U::from_digit(2);
        assert!(U::random_in_range(&mut rng, &two).unwrap().is_one());
    }

    #[test]
    fn degenerate_ranges_rejected() {
        let mut rng = WeakRng::seeded(1);
        assert_eq!(
            U::random_in_range(&mut rng, &U::zero()),
            Err(Error::InvalidDomain),
        );
        assert_eq!(
            U::random_in_range(&mut rng, &U::one()),
            Err(Error::InvalidDomain),
        );
    }

    #[test]
    fn random_coprime_holds() {
        let mut rng = WeakRng::seeded(0xc0ffee);
        let modulus = U::from_decimal_str("304250263527210").unwrap();
        for _ in 0..10 {
            let x = U::random_coprime(&mut rng, &modulus).unwrap();
            assert!(x.gcd(&modulus).is_one());
            assert!(x < modulus);
        }
    }
}
