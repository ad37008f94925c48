//! Error types for OxiCRC operations.
//!
//! Checksum computation itself cannot fail; errors only come from looking
//! up algorithms or table sizes by name, from verification, and from I/O
//! when hashing a reader.

use std::io;
use thiserror::Error;

/// The main error type for OxiCRC operations.
#[derive(Debug, Error)]
pub enum OxiCrcError {
    /// I/O error from an underlying reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No catalogued algorithm matches the requested name.
    #[error("Unknown CRC algorithm: {name}")]
    UnknownAlgorithm {
        /// The requested name.
        name: String,
    },

    /// The requested table size is not one of tiny, small or large.
    #[error("Unknown table size: {value} (expected tiny, small, large, 2, 4 or 8)")]
    UnknownTableSize {
        /// The requested value.
        value: String,
    },

    /// Computed checksum differs from the expected one.
    #[error("CRC mismatch: expected {expected:#x}, computed {computed:#x}")]
    CrcMismatch {
        /// Expected checksum.
        expected: u64,
        /// Computed checksum.
        computed: u64,
    },
}

/// Result type alias for OxiCRC operations.
pub type Result<T> = std::result::Result<T, OxiCrcError>;

impl OxiCrcError {
    /// Create an unknown algorithm error.
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Create an unknown table size error.
    pub fn unknown_table_size(value: impl Into<String>) -> Self {
        Self::UnknownTableSize {
            value: value.into(),
        }
    }

    /// Create a CRC mismatch error.
    pub fn crc_mismatch(expected: u64, computed: u64) -> Self {
        Self::CrcMismatch { expected, computed }
    }
}
