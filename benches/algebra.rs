use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use qualvec::{Matrix, Qubit, gates};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;
use std::time::Duration;

fn hadamard_all(nb_qubits: usize) -> Matrix {
	Matrix::tensor_product_n(&gates::hadamard(), nb_qubits)
}

fn tensor_product_bench(c: &mut Criterion) {
	let mut group = c.benchmark_group("tensor_product");
	group.sample_size(10);
	group.warm_up_time(Duration::from_secs(1));
	group.measurement_time(Duration::from_secs(5));

	for nb_qubits in 2..=6 {
		let id = BenchmarkId::new("matrix", nb_qubits);
		group.bench_with_input(id, &nb_qubits, |b, nb_qubits| {
			b.iter(|| hadamard_all(black_box(*nb_qubits)));
		});

		let id = BenchmarkId::new("qubit", nb_qubits);
		let plus = Qubit::from_real(&[1.0, 1.0]).unwrap();
		group.bench_with_input(id, &nb_qubits, |b, nb_qubits| {
			b.iter(|| {
				let mut register = plus.clone();
				for _ in 1..*nb_qubits {
					register = register.tensor_product(black_box(&plus));
				}
				register
			});
		});
	}
	group.finish();
}

fn apply_bench(c: &mut Criterion) {
	let mut group = c.benchmark_group("apply");
	group.sample_size(10);
	group.warm_up_time(Duration::from_secs(1));
	group.measurement_time(Duration::from_secs(5));

	for nb_qubits in 2..=8 {
		let gate = hadamard_all(nb_qubits);
		let state = Qubit::zero(nb_qubits);

		let id = BenchmarkId::new("hadamard_all", nb_qubits);
		group.bench_with_input(id, &nb_qubits, |b, _| {
			b.iter(|| state.apply(black_box(&gate)).unwrap());
		});
	}
	group.finish();
}

fn measure_bench(c: &mut Criterion) {
	let mut group = c.benchmark_group("measure_at");
	group.sample_size(10);
	group.warm_up_time(Duration::from_secs(1));
	group.measurement_time(Duration::from_secs(5));

	for nb_qubits in 2..=10 {
		let superposed = Qubit::zero(nb_qubits).apply(&hadamard_all(nb_qubits)).unwrap();
		let mut rng = StdRng::seed_from_u64(0);

		let id = BenchmarkId::new("last_qubit", nb_qubits);
		group.bench_with_input(id, &nb_qubits, |b, nb_qubits| {
			b.iter(|| {
				let mut state = superposed.clone();
				state.measure_at(black_box(*nb_qubits - 1), &mut rng).unwrap()
			});
		});
	}
	group.finish();
}

criterion_group!(benches, tensor_product_bench, apply_bench, measure_bench);
criterion_main!(benches);
