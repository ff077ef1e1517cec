use criterion::{BenchmarkId, Criterion, SamplingMode, Throughput, criterion_group, criterion_main};
use piet_engine::console_interface::parse_program;
use piet_engine::core::{BoundedGrid, BoundsOriginRoot, Color, ConsoleIo, ENTRY_POINT, MachineState, Point, find_region, run};
use rand::SeedableRng;
use rand::prelude::*;
use std::hint::black_box;
use std::io::{Cursor, sink};

const PROGRAMS: &[(&str, &str, u64, usize, SamplingMode)] = &[
    ("push_out", r#"
RRRr6
66666
"#, 10, 100, SamplingMode::Auto),
    ("multiply_out", r#"
rrrrrr111R2r
rrrrr####rrr
"#, 10, 100, SamplingMode::Auto),
    ("white_slide", r#"
r..........1
"#, 10, 100, SamplingMode::Auto),
    // bounces between two blocks until the limit
    ("bounce", r#"
rrrr1111
rrrr1111
"#, 10_000, 20, SamplingMode::Flat),
];

fn bench_program_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("program_run");

    for &(name, program, step_limit, sample_size, sample_mode) in PROGRAMS {
        let grid = parse_program(program).unwrap();
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(BenchmarkId::new("run", name), &grid, |b, grid| {
            b.iter_with_setup(
                || (MachineState::new(ENTRY_POINT), ConsoleIo::new(Cursor::new(Vec::new()), sink())),
                |(mut state, mut io)| {
                    let outcome = run(black_box(&mut state), black_box(grid), &mut io, Some(step_limit)).unwrap();
                    black_box(outcome)
                },
            );
        });
    }
    group.finish();
}

fn random_grid(size: i32, palette: &[Color], seed: u64) -> BoundedGrid<Color> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = BoundedGrid::new(BoundsOriginRoot::new(size, size), Color::Black);
    for y in 0..size {
        for x in 0..size {
            grid[&Point::new(x, y)] = *palette.choose(&mut rng).unwrap();
        }
    }
    grid
}

fn bench_find_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_region");

    for &size in &[16, 64, 256] {
        // a single color floods the whole grid
        let solid = random_grid(size, &[Color::Red], 12345);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("solid", size), &solid, |b, grid| {
            b.iter(|| black_box(find_region(black_box(grid), Point::new(size / 2, size / 2))));
        });

        // two colors give ragged regions around the percolation threshold
        let noisy = random_grid(size, &[Color::Red, Color::Blue], 54321);
        group.bench_with_input(BenchmarkId::new("noisy", size), &noisy, |b, grid| {
            b.iter(|| {
                let mut total = 0;
                for y in (0..size).step_by(4) {
                    let region = find_region(black_box(grid), Point::new(0, y)).unwrap();
                    total += region.area();
                }
                black_box(total)
            });
        });
    }
    group.finish();
}

criterion_group!(engine_benches, bench_program_run, bench_find_region);
criterion_main!(engine_benches);
