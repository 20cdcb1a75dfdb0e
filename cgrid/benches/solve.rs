use cgrid::{Algorithm, Generator, Grid, Random};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng as _;

const ROWS: usize = 200;
const COLUMNS: usize = 200;

fn solvable_grid() -> Grid {
    let generator = Generator::new(0.8).unwrap();
    let mut rng = Random::seed_from_u64(0);
    loop {
        let mut grid = generator.generate(ROWS, COLUMNS, &mut rng).unwrap();
        if grid.solve_bfs().unwrap() {
            grid.clear_solution();
            return grid;
        }
    }
}

pub fn solve_bfs(c: &mut Criterion) {
    let mut grid = solvable_grid();
    c.bench_function("solve_bfs", |b| {
        b.iter(|| black_box(grid.solve(black_box(Algorithm::Bfs)).unwrap()))
    });
}

pub fn solve_dfs(c: &mut Criterion) {
    let mut grid = solvable_grid();
    c.bench_function("solve_dfs", |b| {
        b.iter(|| black_box(grid.solve(black_box(Algorithm::Dfs)).unwrap()))
    });
}

pub fn generate(c: &mut Criterion) {
    let generator = Generator::default();
    let mut rng = Random::seed_from_u64(1);
    c.bench_function("generate", |b| {
        b.iter(|| generator.generate(black_box(ROWS), black_box(COLUMNS), &mut rng))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = solve_bfs, solve_dfs, generate}
criterion_main!(benches);
