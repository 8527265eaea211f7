use core::{
    cmp::Ordering,
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{Digit, Unsigned};

/// Deref to all `L + 1` digits, guard last.
///
/// Word-level algorithms index straight through the guard; anything
/// publishing a value goes back through the guard-clearing constructors.
impl<const L: usize> Deref for Unsigned<L> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        self.words()
    }
}

impl<const L: usize> DerefMut for Unsigned<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.words_mut()
    }
}

impl<const L: usize> Default for Unsigned<L> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Fails to be useful for L = 0, a bound not expressable on stable.
impl<const L: usize> From<Digit> for Unsigned<L> {
    fn from(digit: Digit) -> Self {
        Self::from_digit(digit)
    }
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived implementation would.
impl<const L: usize> Ord for Unsigned<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        let l_self = self.significant_len();
        let l_other = other.significant_len();
        match l_self.cmp(&l_other) {
            Ordering::Equal => {}
            not_equal => return not_equal,
        }

        for i in (0..l_self).rev() {
            match self.words()[i].cmp(&other.words()[i]) {
                Ordering::Equal => (),
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}

impl<const L: usize> PartialOrd for Unsigned<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> fmt::Debug for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.significant_len();
        if l == 0 {
            return write!(f, "0x0");
        }
        write!(f, "0x{:x}", self.words()[l - 1])?;
        for i in (0..l - 1).rev() {
            write!(f, "{:0width$x}", self.words()[i], width = crate::DIGIT_BITS / 4)?;
        }
        Ok(())
    }
}
