//! CRC algorithm parameters.

use crate::width::Width;
use std::fmt;

/// Rotation direction of the CRC register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Data is clocked in MSB first and the register shifts left.
    Forward,
    /// Data is clocked in LSB first and the register shifts right.
    ///
    /// This corresponds to an algorithm with reflected input and output.
    Reverse,
}

impl Direction {
    /// Whether this direction processes reflected (LSB-first) data.
    pub const fn is_reflected(self) -> bool {
        matches!(self, Direction::Reverse)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// Parameters of a table-driven CRC algorithm.
///
/// The polynomial and initial value are always given in their normal
/// (unreflected) form; a [`Direction::Reverse`] engine mirrors them itself.
///
/// # Example
///
/// ```
/// use oxicrc_core::{Algorithm, Crc, Direction, Large};
///
/// const CRC_16_XMODEM: Algorithm<u16> = Algorithm {
///     name: "CRC-16/XMODEM",
///     poly: 0x1021,
///     init: 0x0000,
///     xorout: 0x0000,
///     direction: Direction::Forward,
///     check: 0x31C3,
/// };
///
/// let crc = Crc::<u16, Large>::new(&CRC_16_XMODEM);
/// assert_eq!(crc.checksum(b"123456789"), CRC_16_XMODEM.check);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algorithm<W: Width> {
    /// Catalogue name of the algorithm.
    pub name: &'static str,
    /// Generator polynomial with the highest-order term omitted.
    pub poly: W,
    /// Register contents before the first message bit.
    pub init: W,
    /// Value XORed into the register to produce the result.
    pub xorout: W,
    /// Rotation direction.
    pub direction: Direction,
    /// Checksum of the ASCII string `"123456789"`.
    pub check: W,
}

impl<W: Width> Algorithm<W> {
    /// Register value an engine starts from.
    ///
    /// Reverse engines work on a mirrored register, so the initial value is
    /// mirrored once up front.
    pub fn initial_value(&self) -> W {
        match self.direction {
            Direction::Forward => self.init,
            Direction::Reverse => self.init.reverse_bits(),
        }
    }

    /// Accumulator width in bits.
    pub fn width(&self) -> u32 {
        W::BITS
    }
}

/// A catalogued algorithm of any supported width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyAlgorithm {
    /// 8-bit algorithm.
    Crc8(&'static Algorithm<u8>),
    /// 16-bit algorithm.
    Crc16(&'static Algorithm<u16>),
    /// 32-bit algorithm.
    Crc32(&'static Algorithm<u32>),
    /// 64-bit algorithm.
    Crc64(&'static Algorithm<u64>),
}

macro_rules! any_field {
    ($self:ident, $alg:ident => $expr:expr) => {
        match $self {
            AnyAlgorithm::Crc8($alg) => $expr,
            AnyAlgorithm::Crc16($alg) => $expr,
            AnyAlgorithm::Crc32($alg) => $expr,
            AnyAlgorithm::Crc64($alg) => $expr,
        }
    };
}

impl AnyAlgorithm {
    /// Catalogue name.
    pub fn name(&self) -> &'static str {
        any_field!(self, a => a.name)
    }

    /// Accumulator width in bits.
    pub fn width(&self) -> u32 {
        any_field!(self, a => a.width())
    }

    /// Polynomial, zero-extended to 64 bits.
    pub fn poly(&self) -> u64 {
        any_field!(self, a => a.poly.into())
    }

    /// Initial value, zero-extended to 64 bits.
    pub fn init(&self) -> u64 {
        any_field!(self, a => a.init.into())
    }

    /// Output XOR mask, zero-extended to 64 bits.
    pub fn xorout(&self) -> u64 {
        any_field!(self, a => a.xorout.into())
    }

    /// Check value, zero-extended to 64 bits.
    pub fn check(&self) -> u64 {
        any_field!(self, a => a.check.into())
    }

    /// Rotation direction.
    pub fn direction(&self) -> Direction {
        any_field!(self, a => a.direction)
    }

    /// Number of hex digits needed to print a result of this width.
    pub fn hex_digits(&self) -> usize {
        (self.width() / 4) as usize
    }
}

impl From<&'static Algorithm<u8>> for AnyAlgorithm {
    fn from(algorithm: &'static Algorithm<u8>) -> Self {
        AnyAlgorithm::Crc8(algorithm)
    }
}

impl From<&'static Algorithm<u16>> for AnyAlgorithm {
    fn from(algorithm: &'static Algorithm<u16>) -> Self {
        AnyAlgorithm::Crc16(algorithm)
    }
}

impl From<&'static Algorithm<u32>> for AnyAlgorithm {
    fn from(algorithm: &'static Algorithm<u32>) -> Self {
        AnyAlgorithm::Crc32(algorithm)
    }
}

impl From<&'static Algorithm<u64>> for AnyAlgorithm {
    fn from(algorithm: &'static Algorithm<u64>) -> Self {
        AnyAlgorithm::Crc64(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CRC_8_ROHC, CRC_16_RIELLO, CRC_32_POSIX, CRC_64_ECMA};

    #[test]
    fn test_initial_value_forward() {
        assert_eq!(CRC_32_POSIX.initial_value(), 0x0000_0000);
        assert_eq!(CRC_64_ECMA.initial_value(), 0);
    }

    #[test]
    fn test_initial_value_reverse() {
        assert_eq!(CRC_8_ROHC.initial_value(), 0xFF);
        // 0xB2AA mirrored
        assert_eq!(CRC_16_RIELLO.initial_value(), 0x554D);
    }

    #[test]
    fn test_any_algorithm_fields() {
        let any = AnyAlgorithm::from(&CRC_64_ECMA);
        assert_eq!(any.width(), 64);
        assert_eq!(any.poly(), 0x42F0_E1EB_A9EA_3693);
        assert_eq!(any.check(), 0x6C40_DF5F_0B49_7347);
        assert_eq!(any.direction(), Direction::Forward);
        assert_eq!(any.hex_digits(), 16);

        let any = AnyAlgorithm::from(&CRC_8_ROHC);
        assert_eq!(any.width(), 8);
        assert_eq!(any.init(), 0xFF);
        assert!(any.direction().is_reflected());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Reverse.to_string(), "reverse");
    }
}
