//! Miller-Rabin probabilistic primality testing.

use rand_core::RngCore;

use crate::{Error, MontgomeryContext, Result, Unsigned};

/// Rounds used by [`is_prime`]. A composite survives each round with
/// probability at most 1/4, so ten rounds bound the error below $4^{-10}$.
pub const IS_PRIME_ROUNDS: usize = 10;

/// Can `a` disprove primality of the context's (odd) modulus?
///
/// Decomposes $n - 1 = u \cdot 2^t$ with odd $u$, raises `a` to `u` and
/// squares `t` times. A square reaching 1 from anything other than
/// $\pm 1$ is a non-trivial root of unity, which no prime modulus admits;
/// likewise the chain must have reached 1 by the end.
fn witness<const L: usize>(ctx: &MontgomeryContext<L>, a: &Unsigned<L>) -> bool {
    let n_min1 = ctx.modulus().wrapping_sub(&Unsigned::one());

    let mut u = n_min1.clone();
    let mut t = 0;
    while !u.is_odd() {
        u.shift_right_once();
        t += 1;
    }

    let mut x = ctx.modpow(a, &u);
    for _ in 0..t {
        let x_squared = ctx.modmul(&x, &x);
        if x_squared.is_one() && !x.is_one() && x != n_min1 {
            return true;
        }
        x = x_squared;
    }

    !x.is_one()
}

/// Miller-Rabin: draw `rounds` random witnesses from `(0, n)` and declare
/// `n` probably prime only if none disproves it.
///
/// Even `n` never reaches the witness loop: 2 is prime, every other even
/// number is composite. `n` of 0 or 1 is outside the test's domain.
pub fn miller_rabin<const L: usize>(
    rng: &mut impl RngCore,
    n: &Unsigned<L>,
    rounds: usize,
) -> Result<bool> {
    if n.is_zero() || n.is_one() {
        return Err(Error::InvalidDomain);
    }
    if !n.is_odd() {
        return Ok(*n == Unsigned::from_digit(2));
    }

    let ctx = match MontgomeryContext::new(n.clone()) {
        Ok(ctx) => ctx,
        // fail safe: a modulus Montgomery arithmetic cannot serve is
        // never reported prime
        Err(_) => return Ok(false),
    };

    for round in 0..rounds {
        let a = Unsigned::random_in_range(rng, n)?;
        if witness(&ctx, &a) {
            log::trace!("witness found in round {}", round);
            return Ok(false);
        }
    }
    Ok(true)
}

/// [`miller_rabin`] at [`IS_PRIME_ROUNDS`].
pub fn is_prime<const L: usize>(rng: &mut impl RngCore, n: &Unsigned<L>) -> Result<bool> {
    miller_rabin(rng, n, IS_PRIME_ROUNDS)
}
