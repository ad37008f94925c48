//! Engines selected at runtime.
//!
//! [`Crc`] fixes the accumulator width and table size in its type, which is
//! what embedded and performance sensitive code wants. Tools that pick an
//! algorithm from user input need the opposite: [`DynCrc`] erases both behind
//! a trait object while each digest keeps its register in its native width.
//! Results are reported zero-extended to `u64`.

use crate::algorithm::{Algorithm, AnyAlgorithm};
use crate::catalog;
use crate::crc::{Crc, Digest, Kernel};
use crate::error::{OxiCrcError, Result};
use crate::table::{Large, Small, TableKind, TableSize, Tiny};
use crate::traits::Checksum;
use crate::width::Width;
use log::debug;
use std::fmt;
use std::io::{self, Write};

trait ErasedCrc: Send + Sync + fmt::Debug {
    fn begin(&self) -> Box<dyn ErasedDigest + '_>;
    fn checksum(&self, bytes: &[u8]) -> u64;
}

trait ErasedDigest {
    fn update(&mut self, bytes: &[u8]);
    fn finalize(&self) -> u64;
    fn reset(&mut self);
}

impl<W: Width, S: TableSize> ErasedCrc for Crc<W, S>
where
    Crc<W, S>: Kernel<W>,
{
    fn begin(&self) -> Box<dyn ErasedDigest + '_> {
        Box::new(Digest::new(self))
    }

    fn checksum(&self, bytes: &[u8]) -> u64 {
        let algorithm = self.algorithm();
        (self.fold(algorithm.initial_value(), bytes) ^ algorithm.xorout).into()
    }
}

impl<W: Width, S: TableSize> ErasedDigest for Digest<'_, W, S>
where
    Crc<W, S>: Kernel<W>,
{
    fn update(&mut self, bytes: &[u8]) {
        Digest::update(self, bytes);
    }

    fn finalize(&self) -> u64 {
        Digest::finalize(self).into()
    }

    fn reset(&mut self) {
        Digest::reset(self);
    }
}

fn erase<W: Width>(algorithm: &'static Algorithm<W>, kind: TableKind) -> Box<dyn ErasedCrc>
where
    Crc<W, Tiny>: Kernel<W>,
    Crc<W, Small>: Kernel<W>,
    Crc<W, Large>: Kernel<W>,
{
    match kind {
        TableKind::Tiny => Box::new(<Crc<W, Tiny> as Kernel<W>>::build(algorithm)),
        TableKind::Small => Box::new(<Crc<W, Small> as Kernel<W>>::build(algorithm)),
        TableKind::Large => Box::new(<Crc<W, Large> as Kernel<W>>::build(algorithm)),
    }
}

/// A CRC engine whose width and table size are chosen at runtime.
///
/// The lookup table is built once in [`DynCrc::new`] and shared by every
/// digest created from the engine.
///
/// # Example
///
/// ```
/// use oxicrc_core::catalog::CRC_16_XMODEM;
/// use oxicrc_core::{DynCrc, TableKind};
///
/// let engine = DynCrc::new((&CRC_16_XMODEM).into(), TableKind::Tiny);
/// let mut digest = engine.digest();
/// digest.update(b"123456789");
/// assert_eq!(digest.finalize(), 0x31C3);
/// ```
#[derive(Debug)]
pub struct DynCrc {
    algorithm: AnyAlgorithm,
    kind: TableKind,
    inner: Box<dyn ErasedCrc>,
}

impl DynCrc {
    /// Build an engine, computing its lookup table.
    pub fn new(algorithm: AnyAlgorithm, kind: TableKind) -> Self {
        debug!(
            "building {} table ({} entries of {} bits) for {}",
            kind,
            kind.entries(),
            algorithm.width(),
            algorithm.name()
        );

        let inner = match algorithm {
            AnyAlgorithm::Crc8(a) => erase(a, kind),
            AnyAlgorithm::Crc16(a) => erase(a, kind),
            AnyAlgorithm::Crc32(a) => erase(a, kind),
            AnyAlgorithm::Crc64(a) => erase(a, kind),
        };

        Self {
            algorithm,
            kind,
            inner,
        }
    }

    /// Build an engine for a catalogued algorithm.
    pub fn from_name(name: &str, kind: TableKind) -> Result<Self> {
        let entry = catalog::lookup(name)?;
        Ok(Self::new(entry.algorithm(), kind))
    }

    /// Start a new incremental computation.
    pub fn digest(&self) -> DynDigest<'_> {
        DynDigest {
            engine: self,
            inner: self.inner.begin(),
        }
    }

    /// Compute the checksum of `bytes` in one call.
    pub fn checksum(&self, bytes: &[u8]) -> u64 {
        self.inner.checksum(bytes)
    }

    /// Check `bytes` against an expected checksum.
    pub fn verify(&self, bytes: &[u8], expected: u64) -> Result<()> {
        let computed = self.checksum(bytes);
        if computed != expected {
            return Err(OxiCrcError::crc_mismatch(expected, computed));
        }
        Ok(())
    }

    /// Check the algorithm against its catalogued check value.
    pub fn self_test(&self) -> Result<()> {
        self.verify(b"123456789", self.algorithm.check())
    }

    /// The algorithm parameters.
    pub fn algorithm(&self) -> AnyAlgorithm {
        self.algorithm
    }

    /// Algorithm name.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Accumulator width in bits.
    pub fn width(&self) -> u32 {
        self.algorithm.width()
    }

    /// The table size in use.
    pub fn table_kind(&self) -> TableKind {
        self.kind
    }

    /// Format a result as zero-padded hex for this engine's width.
    pub fn format_value(&self, value: u64) -> String {
        format!("{:0width$X}", value, width = self.algorithm.hex_digits())
    }
}

/// Running state of a [`DynCrc`] computation.
pub struct DynDigest<'a> {
    engine: &'a DynCrc,
    inner: Box<dyn ErasedDigest + 'a>,
}

impl<'a> DynDigest<'a> {
    /// Feed a byte slice.
    pub fn update(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    /// Current checksum, zero-extended to 64 bits.
    ///
    /// Does not modify the state.
    pub fn finalize(&self) -> u64 {
        self.inner.finalize()
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// The engine this digest runs on.
    pub fn engine(&self) -> &'a DynCrc {
        self.engine
    }
}

impl fmt::Debug for DynDigest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynDigest")
            .field("algorithm", &self.engine.name())
            .field("table", &self.engine.table_kind())
            .field("value", &self.engine.format_value(self.finalize()))
            .finish()
    }
}

impl Checksum for DynDigest<'_> {
    type Output = u64;

    fn update(&mut self, data: &[u8]) {
        DynDigest::update(self, data);
    }

    fn finalize(&self) -> u64 {
        DynDigest::finalize(self)
    }

    fn reset(&mut self) {
        DynDigest::reset(self);
    }
}

impl Write for DynDigest<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
