use crate::{Error, Result, Unsigned};

impl<const L: usize> Unsigned<L> {
    /// Restoring binary long division, producing quotient and remainder in
    /// one pass.
    ///
    /// Walks the dividend from its most significant set bit down, shifting
    /// each bit into a running remainder and subtracting the divisor
    /// whenever the remainder allows it, which sets the matching quotient
    /// bit. The remainder stays below the divisor, so its left shift never
    /// reaches past the guard digit.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut quotient = Self::zero();
        let mut remainder = Self::zero();

        for i in (0..self.significant_bits()).rev() {
            remainder.shift_left_once();
            remainder.clear_guard();
            quotient.shift_left_once();
            quotient.clear_guard();

            if self.bit(i) {
                remainder.digits[0] |= 1;
            }
            if remainder >= *divisor {
                quotient.digits[0] |= 1;
                remainder.wrapping_sub_assign(divisor);
            }
        }

        Ok((quotient, remainder))
    }

    /// Remainder of [`Self::div_rem`].
    pub fn rem(&self, modulus: &Self) -> Result<Self> {
        self.div_rem(modulus).map(|(_quotient, remainder)| remainder)
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Unsigned, U1024};

    type U = Unsigned<3>;

    #[test]
    fn wide_division() {
        let (q, r) = U1024::from_digit(1000)
            .div_rem(&U1024::from_digit(7))
            .unwrap();
        assert_eq!(q, U1024::from_digit(142));
        assert_eq!(r, U1024::from_digit(6));
    }

    #[test]
    fn division_contract() {
        // x = q*d + r with 0 <= r < d
        let cases: &[(&str, &str)] = &[
            ("340282366920938463463374607431768211455", "97"),
            ("987654321123456789", "123456789"),
            ("1", "18446744073709551616"),
            ("304250263527210", "41"),
            ("12", "12"),
        ];
        for (x_str, d_str) in cases {
            let x = U::from_decimal_str(x_str).unwrap();
            let d = U::from_decimal_str(d_str).unwrap();
            let (q, r) = x.div_rem(&d).unwrap();

            assert!(r < d);
            assert_eq!(q.wrapping_mul(&d).wrapping_add(&r), x);
        }
    }

    #[test]
    fn divisor_larger_than_dividend() {
        let (q, r) = U::from_digit(3).div_rem(&U::from_digit(10)).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, U::from_digit(3));
    }

    #[test]
    fn by_one_and_by_self() {
        let x = U::from_decimal_str("170141183460469231731687303715884105727").unwrap();
        let (q, r) = x.div_rem(&U::one()).unwrap();
        assert_eq!(q, x);
        assert!(r.is_zero());

        let (q, r) = x.div_rem(&x).unwrap();
        assert!(q.is_one());
        assert!(r.is_zero());
    }

    #[test]
    fn zero_dividend() {
        let (q, r) = U::zero().div_rem(&U::from_digit(99)).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn zero_divisor_rejected() {
        assert_eq!(
            U::from_digit(1).div_rem(&U::zero()),
            Err(Error::DivisionByZero),
        );
        assert_eq!(U::zero().rem(&U::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn multiply_then_divide_round_trips() {
        let a = U::from_decimal_str("123456789123456789").unwrap();
        let b = U::from_digit(1013);
        let c = U::from_digit(1000); // c < b

        let x = a.wrapping_mul(&b).wrapping_add(&c);
        let (q, r) = x.div_rem(&b).unwrap();
        assert_eq!(q, a);
        assert_eq!(r, c);
    }
}
