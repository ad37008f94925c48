//! Core traits for checksum computation.

use crate::error::Result;
use std::fmt::Debug;
use std::io::Read;

/// An incremental checksum computation.
///
/// Implemented by [`Digest`](crate::Digest) for statically chosen engines and
/// by [`DynDigest`](crate::DynDigest) for engines picked at runtime.
///
/// - `finalize()` must not consume or modify the state: calling it twice
///   returns the same value, and updates may continue afterwards
/// - `reset()` must restore the state the computation started from
pub trait Checksum {
    /// The checksum value type.
    type Output: Copy + Eq + Debug;

    /// Feed more data.
    fn update(&mut self, data: &[u8]);

    /// Current checksum value.
    fn finalize(&self) -> Self::Output;

    /// Restore the initial state.
    fn reset(&mut self);

    /// Feed everything `reader` yields.
    ///
    /// # Returns
    ///
    /// The number of bytes consumed.
    fn update_reader<R: Read>(&mut self, mut reader: R) -> Result<u64>
    where
        Self: Sized,
    {
        let mut buffer = vec![0u8; 32768];
        let mut total = 0u64;

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.update(&buffer[..read]);
            total += read as u64;
        }

        Ok(total)
    }
}
