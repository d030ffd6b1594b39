//! # Link Pass Benchmark
//!
//! Compares the brute-force link pass against grid bucketing on fields of
//! the size a full-window image produces at common densities.
//!
//! Run with: `cargo bench --bench linker`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image_particles::components::image_particles::{Color, Particle, linker};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn field(count: usize) -> Vec<Particle> {
	let mut rng = StdRng::seed_from_u64(42);
	(0..count)
		.map(|_| {
			Particle::new(
				rng.gen_range(0.0..1280.0),
				rng.gen_range(0.0..800.0),
				Color::rgb(90, 90, 90),
			)
		})
		.collect()
}

fn bench_links(c: &mut Criterion) {
	let mut group = c.benchmark_group("links");
	for count in [500, 2000, 5000] {
		let particles = field(count);
		group.bench_with_input(BenchmarkId::new("brute", count), &particles, |b, ps| {
			b.iter(|| linker::links(ps, 28.0, 1.0))
		});
		group.bench_with_input(BenchmarkId::new("bucketed", count), &particles, |b, ps| {
			b.iter(|| linker::links_bucketed(ps, 28.0, 1.0))
		});
	}
	group.finish();
}

criterion_group!(benches, bench_links);
criterion_main!(benches);
