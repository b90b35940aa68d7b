use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fifteen_solver::{parse_puzzle, solve, DuplicatePolicy, SearchConfig};

const SIMPLE_INPUT: &str = "
1 2 3 4
5 6 7 8
9 10 11 12
13 14 0 15

1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 0";

const MEDIUM_INPUT: &str = "
5 1 3 4
9 2 7 8
0 6 11 12
13 10 14 15

1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 0";

const HARDER_INPUT: &str = "
2 3 4 8
1 6 7 12
5 10 0 11
9 13 14 15

1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 0";

fn criterion_bench(c: &mut Criterion) {
    for (name, input) in [
        ("simple", SIMPLE_INPUT),
        ("medium", MEDIUM_INPUT),
        ("harder", HARDER_INPUT),
    ] {
        let (initial, goal) = parse_puzzle(input).unwrap();

        c.bench_function(name, |b| {
            let config = SearchConfig::default();
            b.iter(|| solve(black_box(&initial), black_box(&goal), &config))
        });

        c.bench_function(&format!("{}-dedup", name), |b| {
            let config = SearchConfig::default().with_policy(DuplicatePolicy::Dedup);
            b.iter(|| solve(black_box(&initial), black_box(&goal), &config))
        });
    }
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
