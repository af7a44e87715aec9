use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrafall::core::line_clear;
use tetrafall::core::shapes;
use tetrafall::core::{analyze, Board, NullSink, Session, SessionConfig};
use tetrafall::types::{Color, Move, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::start(SessionConfig::default().with_seed(12345)).unwrap();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !session.is_running() {
                session.restart(&mut NullSink).unwrap();
            }
            session.push_input(black_box(Move::Left));
            session.tick(&mut NullSink).unwrap();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(Color::Teal));
                }
            }
            line_clear::evaluate(black_box(&mut board))
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let board = Board::new();
    let shape = shapes::lookup(PieceKind::T, 1).unwrap();

    c.bench_function("analyze_t", |b| {
        b.iter(|| analyze(&shape, &board, black_box(10), black_box(4)))
    });
}

criterion_group!(benches, bench_tick, bench_line_clear, bench_analyze);
criterion_main!(benches);
