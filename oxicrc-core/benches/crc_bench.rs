//! Performance benchmarks for the table-driven CRC engines
//!
//! This benchmark suite evaluates:
//! - Tiny, small and large tables against each other for every width
//! - Throughput measurements (MB/s) across different data sizes
//! - Incremental vs single-shot calculation
//! - Overhead of the runtime-selected engine

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicrc_core::catalog::{CRC_8, CRC_16_CCITT, CRC_32, CRC_64_ECMA};
use oxicrc_core::{Crc, DynCrc, Large, Small, TableKind, Tiny};
use std::hint::black_box;

static CRC8_TINY: Crc<u8, Tiny> = Crc::<u8, Tiny>::new(&CRC_8);
static CRC8_SMALL: Crc<u8, Small> = Crc::<u8, Small>::new(&CRC_8);
static CRC8_LARGE: Crc<u8, Large> = Crc::<u8, Large>::new(&CRC_8);

static CRC16_TINY: Crc<u16, Tiny> = Crc::<u16, Tiny>::new(&CRC_16_CCITT);
static CRC16_SMALL: Crc<u16, Small> = Crc::<u16, Small>::new(&CRC_16_CCITT);
static CRC16_LARGE: Crc<u16, Large> = Crc::<u16, Large>::new(&CRC_16_CCITT);

static CRC32_TINY: Crc<u32, Tiny> = Crc::<u32, Tiny>::new(&CRC_32);
static CRC32_SMALL: Crc<u32, Small> = Crc::<u32, Small>::new(&CRC_32);
static CRC32_LARGE: Crc<u32, Large> = Crc::<u32, Large>::new(&CRC_32);

static CRC64_TINY: Crc<u64, Tiny> = Crc::<u64, Tiny>::new(&CRC_64_ECMA);
static CRC64_SMALL: Crc<u64, Small> = Crc::<u64, Small>::new(&CRC_64_ECMA);
static CRC64_LARGE: Crc<u64, Large> = Crc::<u64, Large>::new(&CRC_64_ECMA);

/// Generate test data patterns for benchmarking
mod test_data {
    /// Random data - varied byte values
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            data.extend_from_slice(&text[..remaining.min(text.len())]);
        }
        data
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const TINY: usize = 16; // 16 B
    pub const SMALL: usize = 256; // 256 B
    pub const MEDIUM: usize = 4 * 1024; // 4 KB
    pub const LARGE: usize = 64 * 1024; // 64 KB
}

macro_rules! bench_table_sizes {
    ($name:ident, $group:literal, $tiny:ident, $small:ident, $large:ident) => {
        fn $name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);

            let sizes = [
                ("16B", data_sizes::TINY),
                ("256B", data_sizes::SMALL),
                ("4KB", data_sizes::MEDIUM),
                ("64KB", data_sizes::LARGE),
            ];

            for (size_name, size) in sizes {
                let data = test_data::text_like(size);
                group.throughput(Throughput::Bytes(size as u64));

                group.bench_with_input(BenchmarkId::new("tiny", size_name), &data, |b, data| {
                    b.iter(|| black_box($tiny.checksum(black_box(data))));
                });
                group.bench_with_input(BenchmarkId::new("small", size_name), &data, |b, data| {
                    b.iter(|| black_box($small.checksum(black_box(data))));
                });
                group.bench_with_input(BenchmarkId::new("large", size_name), &data, |b, data| {
                    b.iter(|| black_box($large.checksum(black_box(data))));
                });
            }

            group.finish();
        }
    };
}

bench_table_sizes!(bench_crc8_tables, "crc8_tables", CRC8_TINY, CRC8_SMALL, CRC8_LARGE);
bench_table_sizes!(bench_crc16_tables, "crc16_tables", CRC16_TINY, CRC16_SMALL, CRC16_LARGE);
bench_table_sizes!(bench_crc32_tables, "crc32_tables", CRC32_TINY, CRC32_SMALL, CRC32_LARGE);
bench_table_sizes!(bench_crc64_tables, "crc64_tables", CRC64_TINY, CRC64_SMALL, CRC64_LARGE);

/// Benchmark incremental CRC-32 calculation
fn bench_crc32_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32_incremental");

    let size = data_sizes::LARGE;
    let data = test_data::text_like(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(
        BenchmarkId::from_parameter("single_shot"),
        &data,
        |b, data| {
            b.iter(|| black_box(CRC32_SMALL.checksum(black_box(data))));
        },
    );

    for chunk_size in [16, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("chunks_{}", chunk_size)),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut digest = CRC32_SMALL.digest();
                    for chunk in data.chunks(chunk_size) {
                        digest.update(black_box(chunk));
                    }
                    black_box(digest.finalize())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the runtime-selected engine against the typed one
fn bench_dynamic_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_overhead");

    let size = data_sizes::MEDIUM;
    let data = test_data::random(size);
    let engine = DynCrc::new((&CRC_32).into(), TableKind::Small);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter("static"), &data, |b, data| {
        b.iter(|| black_box(CRC32_SMALL.checksum(black_box(data))));
    });
    group.bench_with_input(BenchmarkId::from_parameter("dynamic"), &data, |b, data| {
        b.iter(|| black_box(engine.checksum(black_box(data))));
    });

    group.finish();
}

/// Benchmark table construction cost
fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    for kind in TableKind::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(kind),
            &kind,
            |b, &kind| {
                b.iter(|| black_box(DynCrc::new((&CRC_32).into(), black_box(kind))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_crc8_tables,
    bench_crc16_tables,
    bench_crc32_tables,
    bench_crc64_tables,
    bench_crc32_incremental,
    bench_dynamic_overhead,
    bench_table_build,
);
criterion_main!(benches);
