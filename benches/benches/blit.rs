//! Benchmark suite for the blit primitive
//!
//! Measures bit-block transfer throughput across phase alignments and
//! raster operations.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use monoblit_benches::{generate_test_plane, sizes};
use monoblit_types::raster::{Rop1, Rop2};
use std::hint::black_box;

/// Benchmark srcCopy blits at the three phase alignments
fn bench_src_copy_phases(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_src_copy");

	// (name, destination x, source x): equal phases run the in-phase
	// fetcher, a larger destination phase the right shift, a smaller one
	// the left shift.
	let cases = [("in_phase", 0, 0), ("shift_right", 5, 0), ("shift_left", 0, 5)];

	for (width, height) in [sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
		let src = generate_test_plane(width, height);
		let mut dst = generate_test_plane(width + 8, height);
		let pixels = (width as u64 - 8) * height as u64;

		for (name, x, x_src) in cases {
			group.throughput(Throughput::Elements(pixels));
			group.bench_with_input(
				BenchmarkId::new(name, format!("{width}x{height}")),
				&(x, x_src),
				|b, &(x, x_src)| {
					b.iter(|| {
						let ok = dst.bit_blt(
							black_box(x),
							0,
							width - 8,
							height,
							black_box(&src),
							black_box(x_src),
							0,
							Rop2::S,
						);
						black_box(ok)
					});
				},
			);
		}
	}

	group.finish();
}

/// Benchmark representative raster operations at a fixed extent
fn bench_raster_ops(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_raster_ops");

	let (width, height) = sizes::MEDIUM;
	let src = generate_test_plane(width, height);
	let mut dst = generate_test_plane(width, height);
	group.throughput(Throughput::Elements(width as u64 * height as u64));

	for op in [Rop2::S, Rop2::DSx, Rop2::DSa, Rop2::Sn] {
		group.bench_with_input(BenchmarkId::new("binary", op.to_string()), &op, |b, &op| {
			b.iter(|| {
				let ok = dst.bit_blt(0, 0, width, height, black_box(&src), 0, 0, op);
				black_box(ok)
			});
		});
	}

	group.finish();
}

/// Benchmark the unary entry point
fn bench_unary_ops(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_unary_ops");

	let (width, height) = sizes::MEDIUM;
	let mut dst = generate_test_plane(width, height);
	group.throughput(Throughput::Elements(width as u64 * height as u64));

	for op in [Rop1::Zero, Rop1::Dn, Rop1::One] {
		group.bench_with_input(BenchmarkId::new("unary", op.to_string()), &op, |b, &op| {
			b.iter(|| {
				let ok = dst.bit_blt_self(0, 0, width, height, op);
				black_box(ok)
			});
		});
	}

	group.finish();
}

/// Benchmark narrow blits where edge masking dominates
fn bench_narrow_blits(c: &mut Criterion) {
	let mut group = c.benchmark_group("blit_narrow");

	let (width, height) = sizes::MEDIUM;
	let src = generate_test_plane(width, height);
	let mut dst = generate_test_plane(width, height);

	for cx in [1i32, 4, 8, 16] {
		group.throughput(Throughput::Elements(cx as u64 * height as u64));
		group.bench_with_input(BenchmarkId::new("copy", format!("{cx}px")), &cx, |b, &cx| {
			b.iter(|| {
				let ok = dst.bit_blt(3, 0, cx, height, black_box(&src), 6, 0, Rop2::S);
				black_box(ok)
			});
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_src_copy_phases,
	bench_raster_ops,
	bench_unary_ops,
	bench_narrow_blits
);
criterion_main!(benches);
