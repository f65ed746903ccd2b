use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use trading_post::{BruteForce, CostMatrix, DivideAndConquer, DynamicProgramming, RouteSolver};

/// Dense random matrix with roughly one move in five missing (never the
/// direct move to the destination, so every instance is feasible).
fn random_ports(rng: &mut StdRng, size: usize) -> CostMatrix {
    let mut m = CostMatrix::unreachable(size);
    for i in 0..size {
        for j in i + 1..size {
            if j == size - 1 || rng.gen_range(0..5) != 0 {
                m = m.with_cost(i, j, rng.gen_range(1..50));
            }
        }
    }
    m
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let solvers: [&dyn RouteSolver; 3] = [&BruteForce, &DivideAndConquer, &DynamicProgramming];
    for &size in &[8usize, 12, 16] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let matrix = random_ports(&mut rng, size);
        for solver in solvers {
            group.bench_with_input(BenchmarkId::new(solver.name(), size), &matrix, |b, m| {
                b.iter(|| {
                    let solution = solver.solve(black_box(m)).unwrap();
                    black_box(solution.cost);
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
