//! Accumulator widths.
//!
//! A CRC register is always one of the unsigned integer types `u8`, `u16`,
//! `u32` or `u64`. The [`Width`] trait is sealed, so trying to build an
//! engine over a signed (or any other) type is a compile error:
//!
//! ```compile_fail
//! use oxicrc_core::{Algorithm, Crc, Direction, Small};
//!
//! const SIGNED: Algorithm<i32> = Algorithm {
//!     name: "signed",
//!     poly: 0x07,
//!     init: 0,
//!     xorout: 0,
//!     direction: Direction::Forward,
//!     check: 0,
//! };
//! let crc = Crc::<i32, Small>::new(&SIGNED);
//! ```

use crate::reverse::{reverse_u8, reverse_u16, reverse_u32, reverse_u64};
use std::fmt;
use std::ops::BitXor;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type usable as a CRC accumulator.
pub trait Width:
    sealed::Sealed
    + Copy
    + Eq
    + Default
    + fmt::Debug
    + BitXor<Output = Self>
    + Into<u64>
    + Send
    + Sync
    + 'static
{
    /// Number of bits in the accumulator.
    const BITS: u32;

    /// Reverse the bit order of the value.
    fn reverse_bits(self) -> Self;
}

macro_rules! impl_width {
    ($ty:ty, $reverse:ident) => {
        impl sealed::Sealed for $ty {}

        impl Width for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn reverse_bits(self) -> Self {
                $reverse(self)
            }
        }
    };
}

impl_width!(u8, reverse_u8);
impl_width!(u16, reverse_u16);
impl_width!(u32, reverse_u32);
impl_width!(u64, reverse_u64);
