use criterion::{black_box, criterion_group, criterion_main, Criterion};
use moser_core::{ColorBehavior, Grid, SharedColorBehavior};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_grid(size: usize, behavior: ColorBehavior) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    Grid::random(
        size,
        size,
        SharedColorBehavior::new(behavior),
        &mut rng,
        0.3,
    )
    .expect("valid dimensions")
}

fn bench_update_default(c: &mut Criterion) {
    let mut grid = seeded_grid(256, ColorBehavior::Default);

    c.bench_function("grid_update_256_default", |b| {
        b.iter(|| {
            grid.update();
            black_box(grid.last_stats())
        })
    });
}

fn bench_update_majority(c: &mut Criterion) {
    let mut grid = seeded_grid(256, ColorBehavior::MajorityColor);

    c.bench_function("grid_update_256_majority", |b| {
        b.iter(|| {
            grid.update();
            black_box(grid.last_stats())
        })
    });
}

fn bench_update_average_large(c: &mut Criterion) {
    let mut grid = seeded_grid(1000, ColorBehavior::AverageColor);

    c.bench_function("grid_update_1000_average", |b| {
        b.iter(|| {
            grid.update();
            black_box(grid.generation())
        })
    });
}

fn bench_random_seed(c: &mut Criterion) {
    c.bench_function("grid_random_256", |b| {
        b.iter(|| black_box(seeded_grid(256, ColorBehavior::AverageColor)))
    });
}

criterion_group!(
    benches,
    bench_update_default,
    bench_update_majority,
    bench_update_average_large,
    bench_random_seed
);
criterion_main!(benches);
