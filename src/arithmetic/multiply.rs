use crate::{Digit, DIGIT_BITS, Unsigned};

impl<const L: usize> Unsigned<L> {
    /// Schoolbook shift-and-add multiplication: for every set bit of the
    /// multiplier, add the correspondingly shifted multiplicand into the
    /// accumulator. Product bits past the logical width are discarded;
    /// truncation modulo $2^W$ is the defined result, not an error.
    pub fn wrapping_mul(&self, multiplier: &Self) -> Self {
        let mut product = Self::zero();
        let mut multiplicand = self.clone();

        for i in 0..L {
            let word = multiplier.digits[i];
            for j in 0..DIGIT_BITS {
                if word & (1 << j) != 0 {
                    product.carrying_add_assign(&multiplicand);
                }
                multiplicand.shift_left_once();
                multiplicand.clear_guard();
            }
        }

        product.clear_guard();
        product
    }

    /// Power by repeated multiplication. Exponents stay tiny here (the
    /// small-prime sieve's per-prime exponents), so no squaring ladder.
    pub fn wrapping_pow(&self, exponent: Digit) -> Self {
        let mut power = Self::one();
        for _ in 0..exponent {
            power = power.wrapping_mul(self);
        }
        power
    }
}
