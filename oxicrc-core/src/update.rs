//! Chunked accumulator update.
//!
//! Each input byte is split into `8 / chunk_bits` chunks and every chunk is
//! folded into the register with one table lookup. Forward engines take the
//! chunks most significant first and index the table with the top of the
//! register; reverse engines take them least significant first and index with
//! the bottom of the register.
//!
//! When the chunk is as wide as the register (an 8-bit CRC with a
//! [`Large`](crate::Large) table) the whole register is shifted out, so the
//! table entry simply becomes the new register value.
//!
//! Tables must have 4, 16 or 256 entries; any other length is rejected when
//! the function is instantiated:
//!
//! ```compile_fail
//! use oxicrc_core::Direction;
//! use oxicrc_core::update::update_byte_u8;
//!
//! // 32 entries would mean 5-bit chunks, which do not divide a byte
//! let crc = update_byte_u8::<32>(0, 0x31, &[0; 32], Direction::Forward);
//! ```
//!
//! ```compile_fail
//! use oxicrc_core::Direction;
//! use oxicrc_core::update::update_slice_u32;
//!
//! let crc = update_slice_u32::<1>(0, b"123456789", &[0], Direction::Reverse);
//! ```

use crate::algorithm::Direction;
use crate::table::check_table_len;

macro_rules! update_fns {
    ($ty:ty, $forward:ident, $reverse:ident, $byte:ident, $slice:ident) => {
        #[doc = concat!("Fold one byte into a forward (MSB-first) `", stringify!($ty), "` register.")]
        #[inline(always)]
        pub const fn $forward<const N: usize>(mut crc: $ty, byte: u8, table: &[$ty; N]) -> $ty {
            check_table_len::<N>();
            let chunk_bits = N.trailing_zeros();
            let mask = (N - 1) as u8;
            let mut remaining = 8 / chunk_bits;
            while remaining > 0 {
                remaining -= 1;
                let value = (byte >> (remaining * chunk_bits)) & mask;
                let index = (((crc >> (<$ty>::BITS - chunk_bits)) as u8) ^ value) as usize;
                crc = if <$ty>::BITS > chunk_bits {
                    (crc << chunk_bits) ^ table[index]
                } else {
                    table[index]
                };
            }
            crc
        }

        #[doc = concat!("Fold one byte into a reverse (LSB-first) `", stringify!($ty), "` register.")]
        #[inline(always)]
        pub const fn $reverse<const N: usize>(mut crc: $ty, byte: u8, table: &[$ty; N]) -> $ty {
            check_table_len::<N>();
            let chunk_bits = N.trailing_zeros();
            let mask = (N - 1) as u8;
            let chunks = 8 / chunk_bits;
            let mut i = 0;
            while i < chunks {
                let value = (byte >> (i * chunk_bits)) & mask;
                let index = (((crc as u8) & mask) ^ value) as usize;
                crc = if <$ty>::BITS > chunk_bits {
                    (crc >> chunk_bits) ^ table[index]
                } else {
                    table[index]
                };
                i += 1;
            }
            crc
        }

        #[doc = concat!("Fold one byte into a `", stringify!($ty), "` register in the given direction.")]
        #[inline]
        pub const fn $byte<const N: usize>(
            crc: $ty,
            byte: u8,
            table: &[$ty; N],
            direction: Direction,
        ) -> $ty {
            check_table_len::<N>();
            match direction {
                Direction::Forward => $forward(crc, byte, table),
                Direction::Reverse => $reverse(crc, byte, table),
            }
        }

        #[doc = concat!("Fold a byte slice into a `", stringify!($ty), "` register.")]
        ///
        /// The direction is resolved once for the whole slice.
        pub const fn $slice<const N: usize>(
            mut crc: $ty,
            bytes: &[u8],
            table: &[$ty; N],
            direction: Direction,
        ) -> $ty {
            check_table_len::<N>();
            let mut i = 0;
            match direction {
                Direction::Forward => {
                    while i < bytes.len() {
                        crc = $forward(crc, bytes[i], table);
                        i += 1;
                    }
                }
                Direction::Reverse => {
                    while i < bytes.len() {
                        crc = $reverse(crc, bytes[i], table);
                        i += 1;
                    }
                }
            }
            crc
        }
    };
}

update_fns!(u8, forward_byte_u8, reverse_byte_u8, update_byte_u8, update_slice_u8);
update_fns!(u16, forward_byte_u16, reverse_byte_u16, update_byte_u16, update_slice_u16);
update_fns!(u32, forward_byte_u32, reverse_byte_u32, update_byte_u32, update_slice_u32);
update_fns!(u64, forward_byte_u64, reverse_byte_u64, update_byte_u64, update_slice_u64);
