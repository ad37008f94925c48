//! Bit-at-a-time reference model shared by the integration tests.

use oxicrc_core::{AnyAlgorithm, Direction};

fn mask(width: u32) -> u64 {
    if width == 64 { u64::MAX } else { (1u64 << width) - 1 }
}

fn reflect(value: u64, width: u32) -> u64 {
    value.reverse_bits() >> (64 - width)
}

/// Compute a CRC one bit at a time, straight from the algorithm parameters.
pub fn bitwise(algorithm: AnyAlgorithm, data: &[u8]) -> u64 {
    let width = algorithm.width();
    let mask = mask(width);

    let crc = match algorithm.direction() {
        Direction::Forward => {
            let top = 1u64 << (width - 1);
            let mut crc = algorithm.init();
            for &byte in data {
                crc ^= (byte as u64) << (width - 8);
                for _ in 0..8 {
                    crc = if crc & top != 0 {
                        (crc << 1) ^ algorithm.poly()
                    } else {
                        crc << 1
                    };
                    crc &= mask;
                }
            }
            crc
        }
        Direction::Reverse => {
            let poly = reflect(algorithm.poly(), width);
            let mut crc = reflect(algorithm.init(), width);
            for &byte in data {
                crc ^= byte as u64;
                for _ in 0..8 {
                    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
                }
            }
            crc
        }
    };

    (crc ^ algorithm.xorout()) & mask
}
