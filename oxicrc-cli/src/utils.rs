//! Utility functions for the CLI.

use oxicrc_core::{Checksum, DynCrc, OxiCrcError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Open a file for reading, or standard input for `-`.
pub fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Checksum everything an input yields.
///
/// Returns the checksum and the number of bytes read. I/O errors name the
/// input they came from.
pub fn checksum_input(engine: &DynCrc, path: &Path) -> oxicrc_core::Result<(u64, u64)> {
    let with_path = |e: io::Error| io::Error::new(e.kind(), format!("{}: {}", path.display(), e));

    let reader = open_input(path).map_err(with_path)?;
    let mut digest = engine.digest();
    let bytes = digest.update_reader(reader).map_err(|e| match e {
        OxiCrcError::Io(e) => OxiCrcError::Io(with_path(e)),
        other => other,
    })?;
    Ok((digest.finalize(), bytes))
}

/// Parse a checksum given on the command line.
///
/// Values are hexadecimal, with or without a `0x` prefix.
pub fn parse_checksum(value: &str) -> Result<u64, String> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid checksum {:?}: expected hex digits", value));
    }
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid checksum {:?}: {}", value, e))
}
