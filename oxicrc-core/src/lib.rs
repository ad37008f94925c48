//! # OxiCRC Core
//!
//! Pure Rust, table-driven CRC computation for 8, 16, 32 and 64-bit
//! algorithms.
//!
//! This crate provides:
//!
//! - [`reverse`]: Bit reversal for every supported width
//! - [`table`]: Lookup table generation in three sizes
//! - [`update`]: Chunked register update, forward and reverse
//! - [`crc`]: The statically typed engine and its digest
//! - [`dynamic`]: Engines selected at runtime
//! - [`catalog`]: 43 named, parameterized algorithms
//! - [`traits`]: The common checksum interface
//! - [`error`]: Error types
//!
//! ## Table sizes
//!
//! Each byte is processed in chunks; one table lookup per chunk.
//!
//! ```text
//! ┌────────┬────────────┬─────────┬───────────────────┐
//! │ Size   │ Chunk bits │ Entries │ Lookups per byte  │
//! ├────────┼────────────┼─────────┼───────────────────┤
//! │ Tiny   │ 2          │ 4       │ 4                 │
//! │ Small  │ 4          │ 16      │ 2                 │
//! │ Large  │ 8          │ 256     │ 1                 │
//! └────────┴────────────┴─────────┴───────────────────┘
//! ```
//!
//! All three sizes produce identical checksums.
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_core::catalog::{self, CRC_16_MODBUS};
//! use oxicrc_core::{Crc, Large, TableKind};
//!
//! // Typed engine, table built at compile time
//! static MODBUS: Crc<u16, Large> = Crc::<u16, Large>::new(&CRC_16_MODBUS);
//! assert_eq!(MODBUS.checksum(b"123456789"), 0x4B37);
//!
//! // Engine chosen by name at runtime
//! let engine = catalog::lookup("CRC-32")?.engine(TableKind::Small);
//! assert_eq!(engine.checksum(b"123456789"), 0xCBF43926);
//! # Ok::<(), oxicrc_core::OxiCrcError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithm;
pub mod catalog;
pub mod crc;
pub mod dynamic;
pub mod error;
pub mod reverse;
pub mod table;
pub mod traits;
pub mod update;
pub mod width;

// Re-exports for convenience
pub use algorithm::{Algorithm, AnyAlgorithm, Direction};
pub use crc::{Crc, Digest, Kernel, checksum_reader};
pub use dynamic::{DynCrc, DynDigest};
pub use error::{OxiCrcError, Result};
pub use table::{Large, Small, TableKind, TableSize, Tiny};
pub use traits::Checksum;
pub use width::Width;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algorithm::{Algorithm, Direction};
    pub use crate::crc::{Crc, Digest};
    pub use crate::dynamic::{DynCrc, DynDigest};
    pub use crate::error::{OxiCrcError, Result};
    pub use crate::table::{Large, Small, TableKind, Tiny};
    pub use crate::traits::Checksum;
}
