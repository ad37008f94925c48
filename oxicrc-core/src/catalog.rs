//! Catalogue of standard CRC algorithms.
//!
//! Each algorithm is a plain `const` [`Algorithm`] that can be handed to
//! [`Crc::new`](crate::Crc) for compile-time tables. The [`CATALOG`] registry
//! additionally makes every algorithm reachable by name at runtime, with one
//! lazily built engine per table size.
//!
//! Check values are the checksums of the ASCII string `"123456789"`.
//!
//! # Example
//!
//! ```
//! use oxicrc_core::TableKind;
//! use oxicrc_core::catalog;
//!
//! let entry = catalog::lookup("crc-16/modbus").unwrap();
//! let engine = entry.engine(TableKind::Large);
//! assert_eq!(engine.checksum(b"123456789"), 0x4B37);
//! ```

use crate::algorithm::{Algorithm, AnyAlgorithm, Direction};
use crate::dynamic::DynCrc;
use crate::error::{OxiCrcError, Result};
use crate::table::TableKind;
use log::trace;
use std::sync::OnceLock;

// CRC-8 family

/// CRC-8 (SMBus packet error checking).
pub const CRC_8: Algorithm<u8> = Algorithm {
    name: "CRC-8",
    poly: 0x07,
    init: 0x00,
    xorout: 0x00,
    direction: Direction::Forward,
    check: 0xF4,
};

/// CRC-8/CDMA2000.
pub const CRC_8_CDMA2000: Algorithm<u8> = Algorithm {
    name: "CRC-8/CDMA2000",
    poly: 0x9B,
    init: 0xFF,
    xorout: 0x00,
    direction: Direction::Forward,
    check: 0xDA,
};

/// CRC-8/DARC.
pub const CRC_8_DARC: Algorithm<u8> = Algorithm {
    name: "CRC-8/DARC",
    poly: 0x39,
    init: 0x00,
    xorout: 0x00,
    direction: Direction::Reverse,
    check: 0x15,
};

/// CRC-8/DVB-S2.
pub const CRC_8_DVB_S2: Algorithm<u8> = Algorithm {
    name: "CRC-8/DVB-S2",
    poly: 0xD5,
    init: 0x00,
    xorout: 0x00,
    direction: Direction::Forward,
    check: 0xBC,
};

/// CRC-8/EBU.
pub const CRC_8_EBU: Algorithm<u8> = Algorithm {
    name: "CRC-8/EBU",
    poly: 0x1D,
    init: 0xFF,
    xorout: 0x00,
    direction: Direction::Reverse,
    check: 0x97,
};

/// CRC-8/I-CODE.
pub const CRC_8_I_CODE: Algorithm<u8> = Algorithm {
    name: "CRC-8/I-CODE",
    poly: 0x1D,
    init: 0xFD,
    xorout: 0x00,
    direction: Direction::Forward,
    check: 0x7E,
};

/// CRC-8/ITU.
pub const CRC_8_ITU: Algorithm<u8> = Algorithm {
    name: "CRC-8/ITU",
    poly: 0x07,
    init: 0x00,
    xorout: 0x55,
    direction: Direction::Forward,
    check: 0xA1,
};

/// CRC-8/MAXIM.
pub const CRC_8_MAXIM: Algorithm<u8> = Algorithm {
    name: "CRC-8/MAXIM",
    poly: 0x31,
    init: 0x00,
    xorout: 0x00,
    direction: Direction::Reverse,
    check: 0xA1,
};

/// CRC-8/ROHC.
pub const CRC_8_ROHC: Algorithm<u8> = Algorithm {
    name: "CRC-8/ROHC",
    poly: 0x07,
    init: 0xFF,
    xorout: 0x00,
    direction: Direction::Reverse,
    check: 0xD0,
};

/// CRC-8/WCDMA.
pub const CRC_8_WCDMA: Algorithm<u8> = Algorithm {
    name: "CRC-8/WCDMA",
    poly: 0x9B,
    init: 0x00,
    xorout: 0x00,
    direction: Direction::Reverse,
    check: 0x25,
};

// CRC-16 family

/// CRC-16/CCITT, the "CCITT-FALSE" variant with an all-ones initial value.
pub const CRC_16_CCITT: Algorithm<u16> = Algorithm {
    name: "CRC-16/CCITT",
    poly: 0x1021,
    init: 0xFFFF,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0x29B1,
};

/// CRC-16/ARC, used by LZH/LHA archives.
pub const CRC_16_ARC: Algorithm<u16> = Algorithm {
    name: "CRC-16/ARC",
    poly: 0x8005,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0xBB3D,
};

/// CRC-16/AUG-CCITT.
pub const CRC_16_AUG_CCITT: Algorithm<u16> = Algorithm {
    name: "CRC-16/AUG-CCITT",
    poly: 0x1021,
    init: 0x1D0F,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0xE5CC,
};

/// CRC-16/BUYPASS.
pub const CRC_16_BUYPASS: Algorithm<u16> = Algorithm {
    name: "CRC-16/BUYPASS",
    poly: 0x8005,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0xFEE8,
};

/// CRC-16/CDMA2000.
pub const CRC_16_CDMA2000: Algorithm<u16> = Algorithm {
    name: "CRC-16/CDMA2000",
    poly: 0xC867,
    init: 0xFFFF,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0x4C06,
};

/// CRC-16/DDS-110.
pub const CRC_16_DDS_110: Algorithm<u16> = Algorithm {
    name: "CRC-16/DDS-110",
    poly: 0x8005,
    init: 0x800D,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0x9ECF,
};

/// CRC-16/DECT-R.
pub const CRC_16_DECT_R: Algorithm<u16> = Algorithm {
    name: "CRC-16/DECT-R",
    poly: 0x0589,
    init: 0x0000,
    xorout: 0x0001,
    direction: Direction::Forward,
    check: 0x007E,
};

/// CRC-16/DECT-X.
pub const CRC_16_DECT_X: Algorithm<u16> = Algorithm {
    name: "CRC-16/DECT-X",
    poly: 0x0589,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0x007F,
};

/// CRC-16/DNP.
pub const CRC_16_DNP: Algorithm<u16> = Algorithm {
    name: "CRC-16/DNP",
    poly: 0x3D65,
    init: 0x0000,
    xorout: 0xFFFF,
    direction: Direction::Reverse,
    check: 0xEA82,
};

/// CRC-16/EN-13757.
pub const CRC_16_EN_13757: Algorithm<u16> = Algorithm {
    name: "CRC-16/EN-13757",
    poly: 0x3D65,
    init: 0x0000,
    xorout: 0xFFFF,
    direction: Direction::Forward,
    check: 0xC2B7,
};

/// CRC-16/GENIBUS.
pub const CRC_16_GENIBUS: Algorithm<u16> = Algorithm {
    name: "CRC-16/GENIBUS",
    poly: 0x1021,
    init: 0xFFFF,
    xorout: 0xFFFF,
    direction: Direction::Forward,
    check: 0xD64E,
};

/// CRC-16/MAXIM.
pub const CRC_16_MAXIM: Algorithm<u16> = Algorithm {
    name: "CRC-16/MAXIM",
    poly: 0x8005,
    init: 0x0000,
    xorout: 0xFFFF,
    direction: Direction::Reverse,
    check: 0x44C2,
};

/// CRC-16/MCRF4XX.
pub const CRC_16_MCRF4XX: Algorithm<u16> = Algorithm {
    name: "CRC-16/MCRF4XX",
    poly: 0x1021,
    init: 0xFFFF,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0x6F91,
};

/// CRC-16/RIELLO.
pub const CRC_16_RIELLO: Algorithm<u16> = Algorithm {
    name: "CRC-16/RIELLO",
    poly: 0x1021,
    init: 0xB2AA,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0x63D0,
};

/// CRC-16/T10-DIF.
pub const CRC_16_T10_DIF: Algorithm<u16> = Algorithm {
    name: "CRC-16/T10-DIF",
    poly: 0x8BB7,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0xD0DB,
};

/// CRC-16/TELEDISK.
pub const CRC_16_TELEDISK: Algorithm<u16> = Algorithm {
    name: "CRC-16/TELEDISK",
    poly: 0xA097,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0x0FB3,
};

/// CRC-16/TMS37157.
pub const CRC_16_TMS37157: Algorithm<u16> = Algorithm {
    name: "CRC-16/TMS37157",
    poly: 0x1021,
    init: 0x89EC,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0x26B1,
};

/// CRC-16/USB.
pub const CRC_16_USB: Algorithm<u16> = Algorithm {
    name: "CRC-16/USB",
    poly: 0x8005,
    init: 0xFFFF,
    xorout: 0xFFFF,
    direction: Direction::Reverse,
    check: 0xB4C8,
};

/// CRC-16/A.
pub const CRC_16_A: Algorithm<u16> = Algorithm {
    name: "CRC-16/A",
    poly: 0x1021,
    init: 0xC6C6,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0xBF05,
};

/// CRC-16/KERMIT, the reflected CCITT polynomial.
pub const CRC_16_KERMIT: Algorithm<u16> = Algorithm {
    name: "CRC-16/KERMIT",
    poly: 0x1021,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0x2189,
};

/// CRC-16/MODBUS, used by Modbus RTU framing.
pub const CRC_16_MODBUS: Algorithm<u16> = Algorithm {
    name: "CRC-16/MODBUS",
    poly: 0x8005,
    init: 0xFFFF,
    xorout: 0x0000,
    direction: Direction::Reverse,
    check: 0x4B37,
};

/// CRC-16/X-25, the HDLC frame check sequence.
pub const CRC_16_X25: Algorithm<u16> = Algorithm {
    name: "CRC-16/X-25",
    poly: 0x1021,
    init: 0xFFFF,
    xorout: 0xFFFF,
    direction: Direction::Reverse,
    check: 0x906E,
};

/// CRC-16/XMODEM.
pub const CRC_16_XMODEM: Algorithm<u16> = Algorithm {
    name: "CRC-16/XMODEM",
    poly: 0x1021,
    init: 0x0000,
    xorout: 0x0000,
    direction: Direction::Forward,
    check: 0x31C3,
};

// CRC-32 family

/// CRC-32 (ISO 3309), used by ZIP, GZIP and PNG.
pub const CRC_32: Algorithm<u32> = Algorithm {
    name: "CRC-32",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
    direction: Direction::Reverse,
    check: 0xCBF4_3926,
};

/// CRC-32/BZIP2.
pub const CRC_32_BZIP2: Algorithm<u32> = Algorithm {
    name: "CRC-32/BZIP2",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
    direction: Direction::Forward,
    check: 0xFC89_1918,
};

/// CRC-32C (Castagnoli), used by iSCSI, ext4 and SCTP.
pub const CRC_32_C: Algorithm<u32> = Algorithm {
    name: "CRC-32C",
    poly: 0x1EDC_6F41,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
    direction: Direction::Reverse,
    check: 0xE306_9283,
};

/// CRC-32D.
pub const CRC_32_D: Algorithm<u32> = Algorithm {
    name: "CRC-32D",
    poly: 0xA833_982B,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
    direction: Direction::Reverse,
    check: 0x8731_5576,
};

/// CRC-32/MPEG-2.
pub const CRC_32_MPEG2: Algorithm<u32> = Algorithm {
    name: "CRC-32/MPEG-2",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xorout: 0x0000_0000,
    direction: Direction::Forward,
    check: 0x0376_E6E7,
};

/// CRC-32/POSIX, as computed by `cksum`.
pub const CRC_32_POSIX: Algorithm<u32> = Algorithm {
    name: "CRC-32/POSIX",
    poly: 0x04C1_1DB7,
    init: 0x0000_0000,
    xorout: 0xFFFF_FFFF,
    direction: Direction::Forward,
    check: 0x765E_7680,
};

/// CRC-32Q.
pub const CRC_32_Q: Algorithm<u32> = Algorithm {
    name: "CRC-32Q",
    poly: 0x8141_41AB,
    init: 0x0000_0000,
    xorout: 0x0000_0000,
    direction: Direction::Forward,
    check: 0x3010_BF7F,
};

/// CRC-32/JAMCRC, CRC-32 without the output inversion.
pub const CRC_32_JAMCRC: Algorithm<u32> = Algorithm {
    name: "CRC-32/JAMCRC",
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    xorout: 0x0000_0000,
    direction: Direction::Reverse,
    check: 0x340B_C6D9,
};

/// CRC-32/XFER.
pub const CRC_32_XFER: Algorithm<u32> = Algorithm {
    name: "CRC-32/XFER",
    poly: 0x0000_00AF,
    init: 0x0000_0000,
    xorout: 0x0000_0000,
    direction: Direction::Forward,
    check: 0xBD0B_E338,
};

// CRC-64 family

/// CRC-64/ECMA-182 in its unreflected form.
pub const CRC_64_ECMA: Algorithm<u64> = Algorithm {
    name: "CRC-64/ECMA",
    poly: 0x42F0_E1EB_A9EA_3693,
    init: 0x0000_0000_0000_0000,
    xorout: 0x0000_0000_0000_0000,
    direction: Direction::Forward,
    check: 0x6C40_DF5F_0B49_7347,
};

/// A named algorithm in the registry.
#[derive(Debug)]
pub struct CatalogEntry {
    algorithm: AnyAlgorithm,
    aliases: &'static [&'static str],
    engines: [OnceLock<DynCrc>; 3],
}

impl CatalogEntry {
    const fn new(algorithm: AnyAlgorithm, aliases: &'static [&'static str]) -> Self {
        Self {
            algorithm,
            aliases,
            engines: [OnceLock::new(), OnceLock::new(), OnceLock::new()],
        }
    }

    /// The algorithm parameters.
    pub fn algorithm(&self) -> AnyAlgorithm {
        self.algorithm
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Alternative names the algorithm is known by.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Whether `name` refers to this algorithm.
    ///
    /// Comparison ignores case and any punctuation, so `crc16_modbus`,
    /// `CRC-16/MODBUS` and `crc16modbus` are all equivalent.
    pub fn matches(&self, name: &str) -> bool {
        let wanted = normalize(name);
        normalize(self.name()) == wanted || self.aliases.iter().any(|alias| normalize(alias) == wanted)
    }

    /// Engine for this algorithm with the given table size.
    ///
    /// The table is built on first use and shared afterwards, including
    /// across threads.
    pub fn engine(&self, kind: TableKind) -> &DynCrc {
        self.engines[kind.index()].get_or_init(|| DynCrc::new(self.algorithm, kind))
    }
}

/// Every catalogued algorithm.
pub static CATALOG: [CatalogEntry; 43] = [
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8), &["CRC-8/SMBUS"]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_CDMA2000), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_DARC), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_DVB_S2), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_EBU), &["CRC-8/TECH-3250"]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_I_CODE), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_ITU), &["CRC-8/I-432-1"]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_MAXIM), &["CRC-8/MAXIM-DOW", "DOW-CRC"]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_ROHC), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc8(&CRC_8_WCDMA), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_CCITT), &["CRC-16/CCITT-FALSE", "CRC-16/IBM-3740"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_ARC), &["CRC-16", "CRC-16/LHA"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_AUG_CCITT), &["CRC-16/SPI-FUJITSU"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_BUYPASS), &["CRC-16/UMTS"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_CDMA2000), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_DDS_110), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_DECT_R), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_DECT_X), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_DNP), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_EN_13757), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_GENIBUS), &["CRC-16/DARC", "CRC-16/EPC"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_MAXIM), &["CRC-16/MAXIM-DOW"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_MCRF4XX), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_RIELLO), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_T10_DIF), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_TELEDISK), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_TMS37157), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_USB), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_A), &["CRC-A", "CRC-16/ISO-IEC-14443-3-A"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_KERMIT), &["CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_MODBUS), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_X25), &["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC"]),
    CatalogEntry::new(AnyAlgorithm::Crc16(&CRC_16_XMODEM), &["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32), &["CRC-32/ISO-HDLC", "CRC-32/ADCCP", "PKZIP"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_BZIP2), &["CRC-32/AAL5"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_C), &["CRC-32/ISCSI", "CRC-32/CASTAGNOLI"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_D), &["CRC-32/BASE91-D"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_MPEG2), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_POSIX), &["CRC-32/CKSUM"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_Q), &["CRC-32/AIXM"]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_JAMCRC), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc32(&CRC_32_XFER), &[]),
    CatalogEntry::new(AnyAlgorithm::Crc64(&CRC_64_ECMA), &["CRC-64/ECMA-182"]),
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Iterate over all catalogued algorithms.
pub fn iter() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter()
}

/// Find an algorithm by name or alias.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    let found = CATALOG.iter().find(|entry| entry.matches(name));
    trace!("catalog lookup {:?} -> {:?}", name, found.map(CatalogEntry::name));
    found
}

/// Find an algorithm by name or alias, failing if it is not catalogued.
pub fn lookup(name: &str) -> Result<&'static CatalogEntry> {
    find(name).ok_or_else(|| OxiCrcError::unknown_algorithm(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CHECKS: [(&str, u64); 43] = [
        (CRC_8.name, 0xF4),
        (CRC_8_CDMA2000.name, 0xDA),
        (CRC_8_DARC.name, 0x15),
        (CRC_8_DVB_S2.name, 0xBC),
        (CRC_8_EBU.name, 0x97),
        (CRC_8_I_CODE.name, 0x7E),
        (CRC_8_ITU.name, 0xA1),
        (CRC_8_MAXIM.name, 0xA1),
        (CRC_8_ROHC.name, 0xD0),
        (CRC_8_WCDMA.name, 0x25),
        (CRC_16_CCITT.name, 0x29B1),
        (CRC_16_ARC.name, 0xBB3D),
        (CRC_16_AUG_CCITT.name, 0xE5CC),
        (CRC_16_BUYPASS.name, 0xFEE8),
        (CRC_16_CDMA2000.name, 0x4C06),
        (CRC_16_DDS_110.name, 0x9ECF),
        (CRC_16_DECT_R.name, 0x007E),
        (CRC_16_DECT_X.name, 0x007F),
        (CRC_16_DNP.name, 0xEA82),
        (CRC_16_EN_13757.name, 0xC2B7),
        (CRC_16_GENIBUS.name, 0xD64E),
        (CRC_16_MAXIM.name, 0x44C2),
        (CRC_16_MCRF4XX.name, 0x6F91),
        (CRC_16_RIELLO.name, 0x63D0),
        (CRC_16_T10_DIF.name, 0xD0DB),
        (CRC_16_TELEDISK.name, 0x0FB3),
        (CRC_16_TMS37157.name, 0x26B1),
        (CRC_16_USB.name, 0xB4C8),
        (CRC_16_A.name, 0xBF05),
        (CRC_16_KERMIT.name, 0x2189),
        (CRC_16_MODBUS.name, 0x4B37),
        (CRC_16_X25.name, 0x906E),
        (CRC_16_XMODEM.name, 0x31C3),
        (CRC_32.name, 0xCBF4_3926),
        (CRC_32_BZIP2.name, 0xFC89_1918),
        (CRC_32_C.name, 0xE306_9283),
        (CRC_32_D.name, 0x8731_5576),
        (CRC_32_MPEG2.name, 0x0376_E6E7),
        (CRC_32_POSIX.name, 0x765E_7680),
        (CRC_32_Q.name, 0x3010_BF7F),
        (CRC_32_JAMCRC.name, 0x340B_C6D9),
        (CRC_32_XFER.name, 0xBD0B_E338),
        (CRC_64_ECMA.name, 0x6C40_DF5F_0B49_7347),
    ];

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG.len(), CHECKS.len());
        assert_eq!(iter().count(), 43);
    }

    #[test]
    fn test_check_values_recorded() {
        for (name, check) in CHECKS {
            let entry = lookup(name).unwrap();
            assert_eq!(entry.algorithm().check(), check, "{}", name);
        }
    }

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for entry in iter() {
            assert!(seen.insert(normalize(entry.name())), "duplicate {}", entry.name());
            for alias in entry.aliases() {
                assert!(seen.insert(normalize(alias)), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_lookup_is_forgiving() {
        assert_eq!(lookup("crc16_modbus").unwrap().name(), "CRC-16/MODBUS");
        assert_eq!(lookup("CRC-16/MODBUS").unwrap().name(), "CRC-16/MODBUS");
        assert_eq!(lookup("crc32").unwrap().name(), "CRC-32");
        assert_eq!(lookup("crc-32/c").unwrap().name(), "CRC-32C");
        assert!(lookup("iso-hdlc").is_err());
    }

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("CRC-16/CCITT-FALSE").unwrap().name(), "CRC-16/CCITT");
        assert_eq!(lookup("crc-32/iscsi").unwrap().name(), "CRC-32C");
        assert_eq!(lookup("CRC-64/ECMA-182").unwrap().name(), "CRC-64/ECMA");
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("crc-7").unwrap_err();
        assert!(matches!(err, OxiCrcError::UnknownAlgorithm { .. }));
    }

    #[test]
    fn test_engine_is_cached() {
        let entry = lookup("crc-8/rohc").unwrap();
        let first = entry.engine(TableKind::Tiny) as *const DynCrc;
        let second = entry.engine(TableKind::Tiny) as *const DynCrc;
        assert_eq!(first, second);
        assert_eq!(entry.engine(TableKind::Tiny).table_kind(), TableKind::Tiny);
        assert_eq!(entry.engine(TableKind::Large).table_kind(), TableKind::Large);
    }

    #[test]
    fn test_engine_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let entry = lookup("crc-32/bzip2").unwrap();
                    entry.engine(TableKind::Small) as *const DynCrc as usize
                })
            })
            .collect();
        let addresses: HashSet<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(addresses.len(), 1);
    }
}
