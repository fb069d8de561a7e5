//! Mobility Engine Benchmarks
//!
//! Per-piece query cost on a crowded large board, where the sliding engine's
//! full occupant scan dominates.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mobility_engine::{analyze, build_occupancy, BoardSize, Color, Piece, PieceKind, Position};

/// A 1000x1000 board with pieces on every 7th square of every 5th rank
fn crowded_board() -> (Vec<Piece>, BoardSize) {
    let size = BoardSize::new(1000).unwrap();
    let mut pieces = Vec::new();
    for y in (1..=1000u16).step_by(5) {
        for x in (1..=1000u16).step_by(7) {
            let kind = PieceKind::ALL[usize::from((x + y) % 6)];
            let color = if (x / 7) % 2 == 0 { Color::White } else { Color::Black };
            pieces.push(Piece::new(kind, color, Position::new(x, y)));
        }
    }
    (pieces, size)
}

fn bench_build_occupancy(c: &mut Criterion) {
    let (pieces, _) = crowded_board();

    c.bench_function("build_occupancy_crowded", |b| {
        b.iter(|| black_box(build_occupancy(pieces.iter().copied()).unwrap()))
    });
}

fn bench_queen_query(c: &mut Criterion) {
    let (pieces, size) = crowded_board();
    let index = build_occupancy(pieces.iter().copied()).unwrap();
    let queen = Piece::new(PieceKind::Queen, Color::White, Position::new(500, 502));

    c.bench_function("queen_query_crowded", |b| {
        b.iter(|| black_box(mobility_engine::query_piece(&queen, &index, size)))
    });
}

fn bench_analyze_sample(c: &mut Criterion) {
    let (pieces, size) = crowded_board();
    let index = build_occupancy(pieces.iter().copied()).unwrap();
    let sample: Vec<Piece> = pieces.iter().step_by(97).copied().collect();

    c.bench_function("analyze_sample_crowded", |b| {
        b.iter(|| black_box(analyze(&sample, &index, size)))
    });
}

criterion_group!(
    benches,
    bench_build_occupancy,
    bench_queen_query,
    bench_analyze_sample,
);
criterion_main!(benches);
