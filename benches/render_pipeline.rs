use criterion::{Criterion, criterion_group, criterion_main};
use mandelview::{
    RasterSize, SampleGrid, SinusoidPalette, Viewport, colourise, evaluate_escape_time,
    render_frame,
};
use std::hint::black_box;

const BENCH_WIDTH: u32 = 320;
const BENCH_HEIGHT: u32 = 240;
const BENCH_BUDGET: u32 = 50;

fn bench_viewport() -> Viewport {
    Viewport::new(-2.5, 1.5, -1.5, 1.5).unwrap()
}

fn bench_evaluate(c: &mut Criterion) {
    let size = RasterSize::new(BENCH_WIDTH, BENCH_HEIGHT).unwrap();
    let grid = SampleGrid::new(&bench_viewport(), size);

    c.bench_function("evaluate_escape_time_320x240", |b| {
        b.iter(|| evaluate_escape_time(black_box(&grid), black_box(BENCH_BUDGET)).unwrap());
    });
}

fn bench_colourise(c: &mut Criterion) {
    let size = RasterSize::new(BENCH_WIDTH, BENCH_HEIGHT).unwrap();
    let grid = SampleGrid::new(&bench_viewport(), size);
    let raster = evaluate_escape_time(&grid, BENCH_BUDGET).unwrap();
    let palette = SinusoidPalette::new(BENCH_BUDGET).unwrap();

    c.bench_function("colourise_320x240", |b| {
        b.iter(|| colourise(black_box(&raster), black_box(&palette)).unwrap());
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let viewport = bench_viewport();
    let size = RasterSize::new(BENCH_WIDTH, BENCH_HEIGHT).unwrap();

    c.bench_function("render_frame_320x240", |b| {
        b.iter(|| {
            render_frame(black_box(&viewport), black_box(size), black_box(BENCH_BUDGET)).unwrap()
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_colourise, bench_full_frame);
criterion_main!(benches);
