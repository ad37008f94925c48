//! Compute command implementation.

use crate::utils::checksum_input;
use log::debug;
use oxicrc_core::{TableKind, catalog};
use serde::Serialize;
use std::path::PathBuf;

/// JSON output for one checksummed input.
#[derive(Debug, Serialize)]
struct ChecksumJson {
    file: String,
    algorithm: &'static str,
    width: u32,
    table: String,
    checksum: String,
    bytes: u64,
}

pub fn cmd_compute(
    files: &[PathBuf],
    algorithm: &str,
    table: TableKind,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = catalog::lookup(algorithm)?.engine(table);

    let stdin = [PathBuf::from("-")];
    let inputs = if files.is_empty() { &stdin[..] } else { files };

    let mut results = Vec::with_capacity(inputs.len());
    for path in inputs {
        let (value, bytes) = checksum_input(engine, path)?;
        debug!("{}: {} bytes", path.display(), bytes);

        let checksum = engine.format_value(value);
        if json {
            results.push(ChecksumJson {
                file: path.display().to_string(),
                algorithm: engine.name(),
                width: engine.width(),
                table: table.to_string(),
                checksum,
                bytes,
            });
        } else {
            println!("{}  {}", checksum, path.display());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}
