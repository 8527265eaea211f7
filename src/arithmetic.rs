//! Arithmetic on [`Unsigned`][crate::Unsigned].
//!
//! The word-level kernels (carry and borrow chains) live in `add` and
//! `subtract`; everything else is built bit-serially on top of them:
//! schoolbook multiplication, restoring division, and the two modular
//! exponentiation paths: the naive multiply-then-divide one, and the
//! division-free Montgomery one behind [`MontgomeryContext`].
//!
//! Truncation past the logical width is defined behavior throughout, never
//! an error; only a zero divisor and domain violations are reported.

mod add;
mod subtract;
mod shift;
mod multiply;
mod divide;
mod modular;
mod montgomery;

pub use montgomery::{montgomery_modpow, MontgomeryContext};
