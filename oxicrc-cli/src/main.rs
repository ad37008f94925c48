//! OxiCRC CLI - table-driven CRC checksums
//!
//! Computes and verifies checksums with any catalogued CRC algorithm.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compute, cmd_list, cmd_verify};
use oxicrc_core::TableKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxicrc")]
#[command(author, version, about = "Pure Rust table-driven CRC checksums")]
#[command(long_about = "
OxiCRC computes CRC checksums with 43 catalogued algorithms (8, 16, 32 and
64-bit), using 4, 16 or 256 entry lookup tables.

Examples:
  oxicrc compute file.bin
  oxicrc compute -a crc-16/modbus -t large frame.bin
  cat file.bin | oxicrc compute -a crc-32c
  oxicrc compute --json a.bin b.bin
  oxicrc verify file.bin CBF43926
  oxicrc list
  oxicrc list --json

Set RUST_LOG=trace for detailed logging.
")]
struct Cli {
    /// Show verbose output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute checksums of files (standard input if none, or `-`)
    #[command(alias = "c")]
    Compute {
        /// Files to checksum
        files: Vec<PathBuf>,

        /// Algorithm name or alias (see `oxicrc list`)
        #[arg(short, long, default_value = "crc32")]
        algorithm: String,

        /// Lookup table size (tiny, small, large)
        #[arg(short, long, default_value = "small")]
        table: TableKind,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// List catalogued algorithms
    #[command(alias = "l")]
    List {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Verify a file against an expected checksum
    #[command(alias = "v")]
    Verify {
        /// File to check (`-` for standard input)
        file: PathBuf,

        /// Expected checksum in hex
        expected: String,

        /// Algorithm name or alias (see `oxicrc list`)
        #[arg(short, long, default_value = "crc32")]
        algorithm: String,

        /// Lookup table size (tiny, small, large)
        #[arg(short, long, default_value = "small")]
        table: TableKind,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Compute {
            files,
            algorithm,
            table,
            json,
        } => cmd_compute(&files, &algorithm, table, json),
        Commands::List { json } => cmd_list(cli.verbose, json),
        Commands::Verify {
            file,
            expected,
            algorithm,
            table,
        } => cmd_verify(&file, &expected, &algorithm, table, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
