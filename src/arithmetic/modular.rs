use crate::{Error, Result, Unsigned};

/// The naive modular path: multiply, then divide. Always correct where the
/// true product fits the width, and indifferent to the modulus' parity,
/// which is why the coprime sieve uses it against its even modulus instead
/// of Montgomery reduction.
impl<const L: usize> Unsigned<L> {
    /// a·b mod n by multiply-then-divide.
    ///
    /// The multiplication truncates modulo $2^W$ first, so the result
    /// matches the mathematical product only while that product fits `W`
    /// bits. Callers (the sieve, the exponentiation below) keep their
    /// operands at half width for exactly this reason.
    pub fn modmul(&self, other: &Self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::InvalidDomain);
        }
        self.wrapping_mul(other).rem(modulus)
    }

    /// a^b mod n, left-to-right square-and-multiply over [`Self::modmul`].
    ///
    /// The slow reference path; the Montgomery implementation is tested
    /// against it.
    pub fn modpow(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::InvalidDomain);
        }

        let mut power = Self::one();
        for i in (0..exponent.significant_bits()).rev() {
            power = power.modmul(&power, modulus)?;
            if exponent.bit(i) {
                power = power.modmul(self, modulus)?;
            }
        }
        Ok(power)
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Unsigned};

    type U = Unsigned<2>;

    #[test]
    fn modmul() {
        let n = U::from_digit(497);
        assert_eq!(
            U::from_digit(123).modmul(&U::from_digit(456), &n).unwrap(),
            U::from_digit(123 * 456 % 497),
        );
        // operands above the modulus reduce fine
        assert_eq!(
            U::from_digit(1000).modmul(&U::from_digit(1000), &n).unwrap(),
            U::from_digit(1_000_000 % 497),
        );
    }

    #[test]
    fn modpow() {
        // 4^13 mod 497
        let result = U::from_digit(4)
            .modpow(&U::from_digit(13), &U::from_digit(497))
            .unwrap();
        assert_eq!(result, U::from_digit(445));
    }

    #[test]
    fn modpow_against_plain_pow() {
        let n = U::from_digit(1_000_003);
        for &(base, exp) in &[(2u32, 10u32), (3, 20), (7, 13), (10, 9)] {
            let expected = U::from_digit(base as crate::Digit)
                .wrapping_pow(exp as crate::Digit)
                .rem(&n)
                .unwrap();
            let got = U::from_digit(base as crate::Digit)
                .modpow(&U::from_digit(exp as crate::Digit), &n)
                .unwrap();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn zero_exponent() {
        let n = U::from_digit(35);
        assert!(U::from_digit(6).modpow(&U::zero(), &n).unwrap().is_one());
    }

    #[test]
    fn even_modulus_works() {
        // the sieve's modulus is even; the naive path must not care
        let n = U::from_digit(1 << 20);
        let result = U::from_digit(3).modpow(&U::from_digit(12), &n).unwrap();
        assert_eq!(result, U::from_digit(531441));
    }

    #[test]
    fn zero_modulus_rejected() {
        assert_eq!(
            U::one().modmul(&U::one(), &U::zero()),
            Err(Error::InvalidDomain),
        );
        assert_eq!(
            U::one().modpow(&U::one(), &U::zero()),
            Err(Error::InvalidDomain),
        );
    }
}
