// Copyright 2025 Irreducible Inc.

use calc_bigint::BigInt16;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_divmod(c: &mut Criterion) {
	let mut group = c.benchmark_group("divmod");

	for (log_dividend, log_divisor) in [(8, 4), (10, 5), (12, 6)] {
		let mut rng = rand::rng();

		let mut a = BigInt16::new();
		let mut b = BigInt16::new();
		a.gen_random_with(&mut rng, 1 << log_dividend, 0);
		b.gen_random_with(&mut rng, 1 << log_divisor, 15);

		let parameter = format!("limbs=2^{log_dividend}/2^{log_divisor}");
		group.throughput(Throughput::Elements(1u64 << log_dividend));

		group.bench_function(BenchmarkId::new("alg_a", &parameter), |bench| {
			bench.iter(|| BigInt16::div_alg_a(a.clone(), &b))
		});
		group.bench_function(BenchmarkId::new("alg_b", &parameter), |bench| {
			bench.iter(|| BigInt16::div_alg_b(a.clone(), &b))
		});
	}

	group.finish();
}

criterion_group! {
	name = default;
	config = Criterion::default().sample_size(20);
	targets = bench_divmod
}
criterion_main!(default);
