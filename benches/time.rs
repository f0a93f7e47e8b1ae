//! Criterion benchmarks measure time of the clearly separated pieces of code.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use piece_codec::chess::cell::Cell;
use piece_codec::chess::core::PieceKind;

fn cells() -> Vec<Cell> {
    (0..=u8::MAX)
        .filter_map(|bits| Cell::try_from(bits).ok())
        .cycle()
        .take(64 * 64)
        .collect()
}

fn count_with_bit_test(cells: &[Cell]) -> usize {
    cells.iter().filter(|cell| cell.is_slider()).count()
}

// Baseline: what the move generator would do without the slider bit.
fn count_with_membership(cells: &[Cell]) -> usize {
    cells
        .iter()
        .filter(|cell| {
            matches!(
                cell.kind(),
                Some(PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
            )
        })
        .count()
}

fn classify(c: &mut Criterion) {
    let cells = cells();
    let mut group = c.benchmark_group("slider classification");
    let _ = group.bench_with_input(
        BenchmarkId::new("bit test", format!("{} cells", cells.len())),
        &cells,
        |b, cells| b.iter(|| count_with_bit_test(black_box(cells))),
    );
    let _ = group.bench_with_input(
        BenchmarkId::new("membership", format!("{} cells", cells.len())),
        &cells,
        |b, cells| b.iter(|| count_with_membership(black_box(cells))),
    );
    group.finish();
}

fn decode(c: &mut Criterion) {
    let _ = c.bench_function("decode every byte", |b| {
        b.iter(|| {
            (0..=u8::MAX)
                .filter_map(|bits| Cell::try_from(black_box(bits)).ok())
                .count()
        });
    });
}

criterion_group! {
    name = codec;
    config = Criterion::default().sample_size(50);
    targets = classify, decode
}

criterion_main!(codec);
