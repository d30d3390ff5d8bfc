use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use glyphgrid_core::{Color, GridBuffer};
use glyphgrid_render::{CellBox, HeadlessSurface, renderer, row_paint};

fn striped_buffer(cols: u16, rows: u16) -> GridBuffer {
    let mut buffer = GridBuffer::new(cols, rows);
    for y in 0..rows {
        for x in 0..cols {
            let color = if (x + y) % 2 == 0 {
                Color::rgb(200, 40, 40)
            } else {
                Color::Default
            };
            buffer.set_cell(i32::from(x), i32::from(y), '#', color);
        }
    }
    buffer
}

fn bench_row_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_paint");
    for cols in [80u16, 200] {
        let buffer = striped_buffer(cols, 1);
        let cells = buffer.row_cells(0).unwrap().to_vec();
        group.bench_function(format!("{cols}_cols"), |b| {
            b.iter(|| row_paint(black_box(&cells)));
        });
    }
    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    for (cols, rows) in [(80u16, 24u16), (200, 50)] {
        let buffer = striped_buffer(cols, rows);
        let surface = HeadlessSurface::new();
        let cell = CellBox::new(8.0, 16.0);
        group.bench_function(format!("{cols}x{rows}"), |b| {
            b.iter(|| {
                surface.clear_calls();
                renderer::render(black_box(&surface), black_box(&buffer), cell)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_row_paint, bench_full_frame);
criterion_main!(benches);
