//! Type aliases by bit width, independent of the digit feature.

use crate::Unsigned;
pub use aliases::*;

#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type U128 = Unsigned<4>;
    pub type U256 = Unsigned<8>;
    pub type U512 = Unsigned<16>;
    pub type U1024 = Unsigned<32>;
}

#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type U128 = Unsigned<2>;
    pub type U256 = Unsigned<4>;
    pub type U512 = Unsigned<8>;
    pub type U1024 = Unsigned<16>;
}
