//! Fixed-width big-integer arithmetic for RSA.
//!
//! [`Unsigned`] is the value type: `L` little-endian digits plus a guard
//! digit absorbing transient carries. On top of it sit schoolbook
//! multiplication and restoring division, modular exponentiation in a
//! naive and a Montgomery-accelerated form ([`MontgomeryContext`]),
//! extended-Euclid modular inverses, Miller-Rabin primality testing and a
//! wheel-based prime search ([`Wheel`]).
//!
//! Arithmetic past the logical width truncates modulo $2^W$; that is the
//! defined behavior everywhere, not an error. Nothing here is constant
//! time.
//!
//! Randomness enters only through [`rand_core::RngCore`]. The bundled
//! [`WeakRng`] is a fast, non-cryptographic generator kept behind that
//! seam for reproducible tests; pass a strong implementation when the
//! output guards real key material.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod digit;
pub use digit::{Digit, DIGIT_BITS};
pub(crate) use digit::{DoubleDigit, SignedDoubleDigit, DIGIT_MSB};

mod error;
pub use error::{Error, Result};

mod aliases;
pub use aliases::*;

mod numbers;
pub use numbers::Unsigned;

mod arithmetic;
pub use arithmetic::{montgomery_modpow, MontgomeryContext};

mod euclid;
pub use euclid::Bezout;

mod primality;
pub use primality::{is_prime, miller_rabin, IS_PRIME_ROUNDS};

mod prime;
pub use prime::{find_prime, Wheel};

mod random;
pub use random::WeakRng;
