use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossgen::{solve, Grid};

fn vocabulary(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let crossing = Grid::parse(
        "
___
_**
_**
",
    )
    .unwrap();
    let small_words = vocabulary(&["cat", "car", "dog", "rat", "tar", "art", "arc"]);

    c.bench_function("solve_crossing_pair", |b| {
        b.iter(|| solve(black_box(&crossing), black_box(&small_words)))
    });

    let full = Grid::parse(
        "
___
___
___
",
    )
    .unwrap();
    let square_words = vocabulary(&[
        "abc", "def", "ghi", "adg", "beh", "cfi", "abd", "xyz", "aaa", "dog", "cab", "fed",
    ]);

    c.bench_function("solve_3x3_square", |b| {
        b.iter(|| solve(black_box(&full), black_box(&square_words)))
    });

    let unsat = vocabulary(&["ant", "bee", "cow"]);
    c.bench_function("solve_unsatisfiable", |b| {
        b.iter(|| solve(black_box(&crossing), black_box(&unsat)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
