//! CRC-32C benchmarks.
//!
//! Run: `cargo bench -p crc32c`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p crc32c`
//!
//! Measures the dispatched path, each available backend in isolation, the
//! accumulator with small chunks, and combine.

use core::hint::black_box;

use crc32c::{Backend, Crc32c};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 7] = [64, 256, 1024, 4096, 16384, 65536, 1048576];

fn bench_dispatch(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/dispatch");
  eprintln!("{}", crc32c::DispatchInfo::current());

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| black_box(crc32c::value(data)));
    });
  }

  group.finish();
}

/// Each backend this machine can run, bypassing selection.
fn bench_backends(c: &mut Criterion) {
  for backend in Backend::ALL.into_iter().filter(|b| b.is_available()) {
    let mut group = c.benchmark_group(format!("crc32c/{}", backend.name()));

    for size in SIZES {
      let data = vec![0xABu8; size];
      group.throughput(Throughput::Bytes(size as u64));

      group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
        b.iter(|| black_box(backend.extend(0, data)));
      });
    }

    group.finish();
  }
}

/// Many small updates, as a protocol stack would issue them.
fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/streaming");
  let data = vec![0x5Au8; 65536];
  group.throughput(Throughput::Bytes(data.len() as u64));

  for chunk in [7usize, 48, 512, 4096] {
    group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
      b.iter(|| {
        let mut crc = Crc32c::new();
        for part in data.chunks(chunk) {
          crc.update(part);
        }
        black_box(crc.hexdigest())
      });
    });
  }

  group.finish();
}

fn bench_combine(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/combine");

  for len_b in [64usize, 4096, 1 << 20, 1 << 30] {
    group.bench_with_input(BenchmarkId::from_parameter(len_b), &len_b, |b, &len_b| {
      b.iter(|| black_box(Crc32c::combine(black_box(0xDEAD_BEEF), black_box(0x1234_5678), len_b)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_dispatch, bench_backends, bench_streaming, bench_combine);
criterion_main!(benches);
