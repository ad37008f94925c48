//! Lookup table generation.
//!
//! A lookup table holds `2^chunk_bits` pre-computed register states, one per
//! possible chunk value. Three table sizes are supported:
//!
//! | Size    | Chunk bits | Entries | Lookups per byte |
//! |---------|------------|---------|------------------|
//! | [`Tiny`]  | 2        | 4       | 4                |
//! | [`Small`] | 4        | 16      | 2                |
//! | [`Large`] | 8        | 256     | 1                |
//!
//! The table size only trades memory for speed; every size yields the same
//! checksum. All generators are `const fn`, so a table built in a `const` or
//! `static` initializer is computed at compile time.
//!
//! Other table lengths are a compile error, even when the table is built at
//! run time:
//!
//! ```compile_fail
//! use oxicrc_core::Direction;
//! use oxicrc_core::table::build_table_u16;
//!
//! let table = build_table_u16::<32>(0x1021, Direction::Forward);
//! ```

use crate::algorithm::Direction;
use crate::error::OxiCrcError;
use crate::reverse::{reverse_u8, reverse_u16, reverse_u32, reverse_u64};
use crate::width::Width;
use std::fmt;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// Type-level table size selection.
pub trait TableSize: sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Bits consumed per table lookup.
    const CHUNK_BITS: u32;
    /// Number of table entries.
    const ENTRIES: usize = 1 << Self::CHUNK_BITS;
    /// Runtime mirror of this size.
    const KIND: TableKind;

    /// Storage for a table of this size.
    type Table<W: Width>: Copy + fmt::Debug + Send + Sync;
}

/// 2-bit chunks, 4 table entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tiny;

/// 4-bit chunks, 16 table entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Small;

/// 8-bit chunks, 256 table entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Large;

impl sealed::Sealed for Tiny {}
impl sealed::Sealed for Small {}
impl sealed::Sealed for Large {}

impl TableSize for Tiny {
    const CHUNK_BITS: u32 = 2;
    const KIND: TableKind = TableKind::Tiny;
    type Table<W: Width> = [W; 4];
}

impl TableSize for Small {
    const CHUNK_BITS: u32 = 4;
    const KIND: TableKind = TableKind::Small;
    type Table<W: Width> = [W; 16];
}

impl TableSize for Large {
    const CHUNK_BITS: u32 = 8;
    const KIND: TableKind = TableKind::Large;
    type Table<W: Width> = [W; 256];
}

/// Runtime table size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableKind {
    /// 2-bit chunks, 4 entries.
    Tiny,
    /// 4-bit chunks, 16 entries.
    #[default]
    Small,
    /// 8-bit chunks, 256 entries.
    Large,
}

impl TableKind {
    /// All table sizes, smallest first.
    pub const ALL: [TableKind; 3] = [TableKind::Tiny, TableKind::Small, TableKind::Large];

    /// Bits consumed per table lookup.
    pub const fn chunk_bits(self) -> u32 {
        match self {
            TableKind::Tiny => Tiny::CHUNK_BITS,
            TableKind::Small => Small::CHUNK_BITS,
            TableKind::Large => Large::CHUNK_BITS,
        }
    }

    /// Number of table entries.
    pub const fn entries(self) -> usize {
        1 << self.chunk_bits()
    }

    /// Table lookups needed per input byte.
    pub const fn lookups_per_byte(self) -> u32 {
        8 / self.chunk_bits()
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            TableKind::Tiny => 0,
            TableKind::Small => 1,
            TableKind::Large => 2,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Tiny => write!(f, "tiny"),
            TableKind::Small => write!(f, "small"),
            TableKind::Large => write!(f, "large"),
        }
    }
}

impl FromStr for TableKind {
    type Err = OxiCrcError;

    /// Accepts the size names or their chunk widths (`2`, `4`, `8`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiny" | "2" => Ok(TableKind::Tiny),
            "small" | "4" => Ok(TableKind::Small),
            "large" | "8" => Ok(TableKind::Large),
            _ => Err(OxiCrcError::unknown_table_size(s)),
        }
    }
}

/// Reject table lengths other than 4, 16 or 256 at compile time.
#[inline(always)]
pub(crate) const fn check_table_len<const N: usize>() {
    const { assert!(N == 4 || N == 16 || N == 256, "table must have 4, 16 or 256 entries") };
}

macro_rules! table_fns {
    ($ty:ty, $entry:ident, $build:ident, $reverse:ident) => {
        #[doc = concat!("Compute one `", stringify!($ty), "` table entry.")]
        ///
        /// The register is seeded with `index` and clocked `chunk_bits` times.
        /// Forward tables seed the top bits and shift left, reverse tables
        /// seed the low bits and shift right against the mirrored polynomial.
        /// `index` must be below `2^chunk_bits`.
        pub const fn $entry(poly: $ty, chunk_bits: u32, direction: Direction, index: u8) -> $ty {
            let mut entry: $ty;
            let mut i = 0;
            match direction {
                Direction::Forward => {
                    let top: $ty = 1 << (<$ty>::BITS - 1);
                    entry = (index as $ty) << (<$ty>::BITS - chunk_bits);
                    while i < chunk_bits {
                        if entry & top != 0 {
                            entry = (entry << 1) ^ poly;
                        } else {
                            entry <<= 1;
                        }
                        i += 1;
                    }
                }
                Direction::Reverse => {
                    let poly = $reverse(poly);
                    entry = index as $ty;
                    while i < chunk_bits {
                        if entry & 1 != 0 {
                            entry = (entry >> 1) ^ poly;
                        } else {
                            entry >>= 1;
                        }
                        i += 1;
                    }
                }
            }
            entry
        }

        #[doc = concat!("Build a `", stringify!($ty), "` lookup table of `N` entries.")]
        ///
        /// `N` must be 4, 16 or 256; anything else fails to compile.
        pub const fn $build<const N: usize>(poly: $ty, direction: Direction) -> [$ty; N] {
            check_table_len::<N>();
            let chunk_bits = N.trailing_zeros();
            let mut table = [0 as $ty; N];
            let mut i = 0;
            while i < N {
                table[i] = $entry(poly, chunk_bits, direction, i as u8);
                i += 1;
            }
            table
        }
    };
}

table_fns!(u8, generate_entry_u8, build_table_u8, reverse_u8);
table_fns!(u16, generate_entry_u16, build_table_u16, reverse_u16);
table_fns!(u32, generate_entry_u32, build_table_u32, reverse_u32);
table_fns!(u64, generate_entry_u64, build_table_u64, reverse_u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_large_table_correctness() {
        // Well known entries of the reflected 0xEDB88320 table
        let table = build_table_u32::<256>(0x04C1_1DB7, Direction::Reverse);
        assert_eq!(table[0], 0x0000_0000);
        assert_eq!(table[1], 0x7707_3096);
        assert_eq!(table[255], 0x2D02_EF8D);
    }

    #[test]
    fn test_crc16_arc_large_table_correctness() {
        let table = build_table_u16::<256>(0x8005, Direction::Reverse);
        assert_eq!(table[0], 0x0000);
        assert_eq!(table[1], 0xC0C1);
        assert_eq!(table[255], 0x4040);
    }

    #[test]
    fn test_crc16_ccitt_forward_table() {
        let table = build_table_u16::<256>(0x1021, Direction::Forward);
        assert_eq!(table[1], 0x1021);
        assert_eq!(table[2], 0x2042);
        assert_eq!(table[255], 0x1EF0);
    }

    #[test]
    fn test_crc64_ecma_forward_table() {
        let table = build_table_u64::<256>(0x42F0_E1EB_A9EA_3693, Direction::Forward);
        assert_eq!(table[1], 0x42F0_E1EB_A9EA_3693);
    }

    #[test]
    fn test_crc8_tables() {
        let tiny = build_table_u8::<4>(0x07, Direction::Forward);
        assert_eq!(tiny, [0x00, 0x07, 0x0E, 0x09]);

        let small = build_table_u8::<16>(0x07, Direction::Forward);
        assert_eq!(small[0], 0x00);
        assert_eq!(small[1], 0x07);
        assert_eq!(small[15], 0x2D);
    }

    #[test]
    fn test_entry_zero_is_zero() {
        for direction in [Direction::Forward, Direction::Reverse] {
            for chunk_bits in [2, 4, 8] {
                assert_eq!(generate_entry_u8(0x31, chunk_bits, direction, 0), 0);
                assert_eq!(generate_entry_u16(0x8005, chunk_bits, direction, 0), 0);
                assert_eq!(generate_entry_u32(0x1EDC_6F41, chunk_bits, direction, 0), 0);
                assert_eq!(generate_entry_u64(0x42F0_E1EB_A9EA_3693, chunk_bits, direction, 0), 0);
            }
        }
    }

    #[test]
    fn test_reverse_tiny_table_matches_bitwise_model() {
        let poly = reverse_u32(0x04C1_1DB7);
        let tiny = build_table_u32::<4>(0x04C1_1DB7, Direction::Reverse);
        for (index, &entry) in tiny.iter().enumerate() {
            let mut reg = index as u32;
            for _ in 0..2 {
                reg = if reg & 1 != 0 { (reg >> 1) ^ poly } else { reg >> 1 };
            }
            assert_eq!(entry, reg);
        }
    }

    #[test]
    fn test_table_kind_parse() {
        assert_eq!("tiny".parse::<TableKind>().unwrap(), TableKind::Tiny);
        assert_eq!("SMALL".parse::<TableKind>().unwrap(), TableKind::Small);
        assert_eq!("8".parse::<TableKind>().unwrap(), TableKind::Large);
        assert!("huge".parse::<TableKind>().is_err());
    }

    #[test]
    fn test_table_kind_geometry() {
        for kind in TableKind::ALL {
            assert_eq!(8 % kind.chunk_bits(), 0);
            assert_eq!(kind.entries(), 1 << kind.chunk_bits());
            assert_eq!(kind.lookups_per_byte() * kind.chunk_bits(), 8);
        }
        assert_eq!(TableKind::default(), TableKind::Small);
        assert_eq!(Tiny::ENTRIES, 4);
        assert_eq!(Small::ENTRIES, 16);
        assert_eq!(Large::ENTRIES, 256);
        assert_eq!(Large::KIND, TableKind::Large);
    }

    #[test]
    fn test_table_kind_display_roundtrip() {
        for kind in TableKind::ALL {
            assert_eq!(kind.to_string().parse::<TableKind>().unwrap(), kind);
        }
    }
}
