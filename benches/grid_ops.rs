use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridloop::core::Grid;

fn bench_construct_bordered(c: &mut Criterion) {
    c.bench_function("grid_new_64_bordered", |b| {
        b.iter(|| Grid::new(black_box(64), black_box(64), true).unwrap())
    });
}

fn bench_construct_bare(c: &mut Criterion) {
    c.bench_function("grid_new_64_bare", |b| {
        b.iter(|| Grid::new(black_box(64), black_box(64), false).unwrap())
    });
}

fn bench_clear(c: &mut Criterion) {
    let mut grid = Grid::new(64, 64, true).unwrap();
    c.bench_function("grid_clear_64", |b| {
        b.iter(|| {
            grid.clear();
        })
    });
}

fn bench_put_str(c: &mut Criterion) {
    let mut grid = Grid::new(64, 64, true).unwrap();
    c.bench_function("grid_put_str_row", |b| {
        b.iter(|| {
            grid.put_str(1, 1, black_box("the quick brown fox jumps over the lazy dog"));
        })
    });
}

criterion_group!(
    benches,
    bench_construct_bordered,
    bench_construct_bare,
    bench_clear,
    bench_put_str
);
criterion_main!(benches);
