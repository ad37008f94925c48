//! Table-driven CRC engine.
//!
//! A [`Crc`] couples an [`Algorithm`] with a lookup table of the chosen
//! [`TableSize`]. It is immutable and meant to be built once, ideally in a
//! `const` or `static` so the table is computed at compile time, and then
//! shared by every [`Digest`] that uses it.
//!
//! A [`Digest`] owns nothing but the CRC register. It is created from a
//! `Crc`, fed bytes with [`Digest::update`], and read with
//! [`Digest::finalize`], which leaves the register untouched so a digest can
//! keep accumulating after being read.
//!
//! # Example
//!
//! ```
//! use oxicrc_core::catalog::CRC_32;
//! use oxicrc_core::{Crc, Small, Tiny};
//!
//! static CRC32: Crc<u32, Small> = Crc::<u32, Small>::new(&CRC_32);
//!
//! assert_eq!(CRC32.checksum(b"123456789"), 0xCBF43926);
//!
//! let mut digest = CRC32.digest();
//! digest.update(b"12345");
//! digest.update(b"6789");
//! assert_eq!(digest.finalize(), 0xCBF43926);
//!
//! // A 4 entry table gives the same answer with less memory
//! let tiny = Crc::<u32, Tiny>::new(&CRC_32);
//! assert_eq!(tiny.checksum(b"123456789"), 0xCBF43926);
//! ```

use crate::algorithm::{Algorithm, Direction};
use crate::error::Result;
use crate::reverse::{reverse_u8, reverse_u16, reverse_u32, reverse_u64};
use crate::table::{
    Large, Small, TableKind, TableSize, Tiny, build_table_u8, build_table_u16, build_table_u32,
    build_table_u64,
};
use crate::traits::Checksum;
use crate::update::{
    update_byte_u8, update_byte_u16, update_byte_u32, update_byte_u64, update_slice_u8,
    update_slice_u16, update_slice_u32, update_slice_u64,
};
use crate::width::Width;
use std::io::{self, Write};

/// A CRC algorithm bound to a pre-computed lookup table.
///
/// `W` is the accumulator type and `S` the table size. Use
/// `Crc::<u16, Small>::new(&ALGORITHM)` to build one.
#[derive(Debug, Clone, Copy)]
pub struct Crc<W: Width, S: TableSize = Small> {
    algorithm: &'static Algorithm<W>,
    table: S::Table<W>,
}

/// Running state of one CRC computation.
#[derive(Debug, Clone)]
pub struct Digest<'a, W: Width, S: TableSize = Small> {
    crc: &'a Crc<W, S>,
    initial: W,
    value: W,
}

/// Byte folding operations shared by every `Crc<W, S>` combination.
///
/// This lets [`Digest`] and the runtime engine be written once over all
/// widths and table sizes.
pub trait Kernel<W: Width>: Sized {
    /// Build the engine, computing its lookup table.
    fn build(algorithm: &'static Algorithm<W>) -> Self;

    /// Fold one byte into a register value.
    fn fold_byte(&self, crc: W, byte: u8) -> W;

    /// Fold a byte slice into a register value.
    fn fold(&self, crc: W, bytes: &[u8]) -> W;
}

impl<W: Width, S: TableSize> Crc<W, S> {
    /// The algorithm parameters.
    pub const fn algorithm(&self) -> &'static Algorithm<W> {
        self.algorithm
    }

    /// The table size in use.
    pub const fn table_kind(&self) -> TableKind {
        S::KIND
    }
}

macro_rules! impl_crc {
    ($ty:ty, $size:ty, $n:literal, $build:ident, $byte:ident, $slice:ident, $reverse:ident) => {
        impl Crc<$ty, $size> {
            /// Build an engine for `algorithm`, computing its lookup table.
            ///
            /// In a `const` or `static` initializer the table is computed at
            /// compile time.
            pub const fn new(algorithm: &'static Algorithm<$ty>) -> Self {
                Self {
                    algorithm,
                    table: $build::<$n>(algorithm.poly, algorithm.direction),
                }
            }

            /// Compute the checksum of `bytes` in one call.
            pub const fn checksum(&self, bytes: &[u8]) -> $ty {
                let crc = $slice::<$n>(
                    self.initial_value(),
                    bytes,
                    &self.table,
                    self.algorithm.direction,
                );
                crc ^ self.algorithm.xorout
            }

            /// Register value a new digest starts from.
            pub const fn initial_value(&self) -> $ty {
                self.adjust_initial(self.algorithm.init)
            }

            const fn adjust_initial(&self, init: $ty) -> $ty {
                match self.algorithm.direction {
                    Direction::Forward => init,
                    Direction::Reverse => $reverse(init),
                }
            }

            /// Start a new incremental computation.
            pub const fn digest(&self) -> Digest<'_, $ty, $size> {
                self.digest_with_initial(self.algorithm.init)
            }

            /// Start a new incremental computation from a custom initial value.
            ///
            /// The value is given in normal form and is mirrored for reverse
            /// algorithms, exactly like the algorithm's own `init`.
            pub const fn digest_with_initial(&self, initial: $ty) -> Digest<'_, $ty, $size> {
                let value = self.adjust_initial(initial);
                Digest {
                    crc: self,
                    initial: value,
                    value,
                }
            }

            /// The lookup table.
            pub const fn table(&self) -> &[$ty; $n] {
                &self.table
            }
        }

        impl Kernel<$ty> for Crc<$ty, $size> {
            fn build(algorithm: &'static Algorithm<$ty>) -> Self {
                Self::new(algorithm)
            }

            #[inline(always)]
            fn fold_byte(&self, crc: $ty, byte: u8) -> $ty {
                $byte::<$n>(crc, byte, &self.table, self.algorithm.direction)
            }

            #[inline]
            fn fold(&self, crc: $ty, bytes: &[u8]) -> $ty {
                $slice::<$n>(crc, bytes, &self.table, self.algorithm.direction)
            }
        }
    };
}

macro_rules! impl_crc_sizes {
    ($ty:ty, $build:ident, $byte:ident, $slice:ident, $reverse:ident) => {
        impl_crc!($ty, Tiny, 4, $build, $byte, $slice, $reverse);
        impl_crc!($ty, Small, 16, $build, $byte, $slice, $reverse);
        impl_crc!($ty, Large, 256, $build, $byte, $slice, $reverse);
    };
}

impl_crc_sizes!(u8, build_table_u8, update_byte_u8, update_slice_u8, reverse_u8);
impl_crc_sizes!(u16, build_table_u16, update_byte_u16, update_slice_u16, reverse_u16);
impl_crc_sizes!(u32, build_table_u32, update_byte_u32, update_slice_u32, reverse_u32);
impl_crc_sizes!(u64, build_table_u64, update_byte_u64, update_slice_u64, reverse_u64);

impl<'a, W: Width, S: TableSize> Digest<'a, W, S>
where
    Crc<W, S>: Kernel<W>,
{
    /// Start a computation on `crc` from the algorithm's initial value.
    ///
    /// Generic counterpart of `Crc::digest`.
    pub fn new(crc: &'a Crc<W, S>) -> Self {
        let initial = crc.algorithm.initial_value();
        Self {
            crc,
            initial,
            value: initial,
        }
    }

    /// Feed one byte.
    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        self.value = self.crc.fold_byte(self.value, byte);
    }

    /// Feed a byte slice.
    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        self.value = self.crc.fold(self.value, bytes);
    }

    /// Current checksum.
    ///
    /// Applies the output XOR to a copy of the register, so calling this
    /// repeatedly returns the same value and updates may continue afterwards.
    #[inline(always)]
    pub fn finalize(&self) -> W {
        self.value ^ self.crc.algorithm.xorout
    }

    /// Restore the register to its initial value.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }

    /// Raw register contents, before the output XOR.
    pub fn value(&self) -> W {
        self.value
    }

    /// The engine this digest runs on.
    pub fn crc(&self) -> &'a Crc<W, S> {
        self.crc
    }
}

impl<W: Width, S: TableSize> Checksum for Digest<'_, W, S>
where
    Crc<W, S>: Kernel<W>,
{
    type Output = W;

    fn update(&mut self, data: &[u8]) {
        Digest::update(self, data);
    }

    fn finalize(&self) -> W {
        Digest::finalize(self)
    }

    fn reset(&mut self) {
        Digest::reset(self);
    }
}

impl<W: Width, S: TableSize> Write for Digest<'_, W, S>
where
    Crc<W, S>: Kernel<W>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Digest::update(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Compute the checksum of everything `reader` yields.
pub fn checksum_reader<W: Width, S: TableSize, R: io::Read>(
    crc: &Crc<W, S>,
    mut reader: R,
) -> Result<W>
where
    Crc<W, S>: Kernel<W>,
{
    let mut digest = Digest::new(crc);
    io::copy(&mut reader, &mut digest)?;
    Ok(digest.finalize())
}
