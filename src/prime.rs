//! Prime search over a small-prime wheel.
//!
//! Candidates are generated coprime to the first 13 primes, and advanced
//! by the product of those primes, so no candidate the search ever tests
//! is divisible by a small prime. That leaves Miller-Rabin rejecting only
//! candidates with large factors, which is what makes the search practical
//! at cryptographic widths.

use rand_core::RngCore;

use crate::{is_prime, Digit, Error, Result, Unsigned};

const SMALL_PRIMES: [Digit; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

struct Entry<const L: usize> {
    prime: Unsigned<L>,
    exponent: Digit,
    power: Unsigned<L>,
}

/// The 13-entry small-prime table, with the derived sieve modulus Π (the
/// product of the entries' prime powers) and the wheel increment (the
/// plain product of the primes, 304250263527210).
///
/// Constructed explicitly, once, by [`Wheel::new`]; the per-width exponents
/// are fixed so that Π comes out at roughly half the width's bits, which is
/// where the generated prime candidates live.
pub struct Wheel<const L: usize> {
    entries: [Entry<L>; 13],
    pi: Unsigned<L>,
    increment: Unsigned<L>,
}

impl<const L: usize> Wheel<L> {
    /// Builds the table for the type's width; widths without an exponent
    /// set are [`Error::InvalidLength`].
    pub fn new() -> Result<Self> {
        let exponents: [Digit; 13] = match Unsigned::<L>::BITS {
            128 => [1, 2, 1, 1, 1, 1, 1, 2, 2, 1, 1, 1, 2],
            256 => [3, 3, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3],
            512 => [5, 5, 5, 5, 5, 5, 5, 5, 5, 6, 5, 6, 6],
            1024 => [10, 10, 11, 11, 10, 10, 10, 10, 11, 11, 11, 11, 11],
            _ => return Err(Error::InvalidLength),
        };

        let entries = core::array::from_fn(|i| {
            let prime = Unsigned::from_digit(SMALL_PRIMES[i]);
            let power = prime.wrapping_pow(exponents[i]);
            Entry { prime, exponent: exponents[i], power }
        });

        let mut pi = Unsigned::one();
        let mut increment = Unsigned::one();
        for entry in &entries {
            pi = pi.wrapping_mul(&entry.power);
            increment = increment.wrapping_mul(&entry.prime);
        }
        log::trace!("wheel ready, sieve modulus of {} bits", pi.significant_bits());

        Ok(Self { entries, pi, increment })
    }

    /// The wheel increment: adding it to a candidate coprime to the table's
    /// primes yields another such candidate.
    pub fn increment(&self) -> &Unsigned<L> {
        &self.increment
    }

    /// A random candidate coprime to all 13 table primes.
    ///
    /// Per entry, half-width randoms are drawn until one's `exponent`-th
    /// power is non-zero modulo Π, which rejects values sharing that
    /// entry's factor; the 13 accepted draws are summed and reduced modulo
    /// Π. A prime can still divide the sum, so a final pass advances the
    /// candidate by a jumper with every such prime's factor divided out of
    /// the increment, clearing the residual collisions.
    pub fn generate_coprime(&self, rng: &mut impl RngCore) -> Result<Unsigned<L>> {
        let mut candidate = Unsigned::zero();
        for entry in &self.entries {
            let exponent = Unsigned::from_digit(entry.exponent);
            loop {
                let a = Unsigned::random(rng, Unsigned::<L>::BITS / 2)?;
                if !a.modpow(&exponent, &self.pi)?.is_zero() {
                    candidate.wrapping_add_assign(&a);
                    break;
                }
            }
        }
        let mut candidate = candidate.rem(&self.pi)?;

        let mut jumper = self.increment.clone();
        for entry in &self.entries {
            if candidate.rem(&entry.prime)?.is_zero() {
                jumper = jumper.div_rem(&entry.prime)?.0;
            }
        }
        if jumper != self.increment {
            candidate.wrapping_add_assign(&jumper);
        }
        Ok(candidate)
    }

    /// Searches from a fresh candidate, stepping by the increment, until
    /// [`is_prime`] accepts. A rollover to 1 regenerates from scratch.
    pub fn find_prime(&self, rng: &mut impl RngCore) -> Result<Unsigned<L>> {
        let mut candidate = self.generate_coprime(rng)?;
        let mut tested = 0u32;
        loop {
            if candidate.is_one() {
                candidate = self.generate_coprime(rng)?;
                continue;
            }
            tested += 1;
            if is_prime(rng, &candidate)? {
                log::debug!("prime found, {} candidates tested", tested);
                return Ok(candidate);
            }
            candidate.wrapping_add_assign(&self.increment);
        }
    }
}

/// One-shot prime search, building the [`Wheel`] per call. Repeated
/// searches at one width should construct the wheel once instead.
pub fn find_prime<const L: usize>(rng: &mut impl RngCore) -> Result<Unsigned<L>> {
    Wheel::new()?.find_prime(rng)
}
