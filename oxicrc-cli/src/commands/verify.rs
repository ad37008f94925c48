//! Verify command implementation.

use crate::utils::{checksum_input, parse_checksum};
use oxicrc_core::{OxiCrcError, TableKind, catalog};
use std::path::Path;

pub fn cmd_verify(
    file: &Path,
    expected: &str,
    algorithm: &str,
    table: TableKind,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = parse_checksum(expected)?;
    let engine = catalog::lookup(algorithm)?.engine(table);

    let (computed, bytes) = checksum_input(engine, file)?;
    if computed != expected {
        return Err(OxiCrcError::crc_mismatch(expected, computed).into());
    }

    if verbose {
        println!(
            "{}: OK ({} {}, {} bytes)",
            file.display(),
            engine.name(),
            engine.format_value(computed),
            bytes
        );
    } else {
        println!("{}: OK", file.display());
    }

    Ok(())
}
