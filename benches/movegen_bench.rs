use chessgame::movegen::available_destinations;
use chessgame::{Board, BoardConfig, Color, Coord, Piece};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_candidates(c: &mut Criterion) {
    let queen = Piece::queen(Color::White);
    c.bench_function("queen_candidates_center", |ben| {
        ben.iter(|| {
            let v = available_destinations(black_box(queen), black_box(Coord::new(4, 5)), 8);
            black_box(v)
        })
    });
}

fn bench_legal(c: &mut Criterion) {
    for (name, config) in [("legal_startpos_atomic", BoardConfig::default()), ("legal_startpos_blocking", BoardConfig::default().blocking())] {
        let mut b = Board::with_config(config).expect("valid config");
        b.standard_setup().expect("start position");
        let squares: Vec<Coord> = b.pieces().keys().copied().collect();
        c.bench_function(name, |ben| {
            ben.iter(|| {
                let n: usize = squares.iter().map(|&sq| b.legal_destinations(black_box(sq)).len()).sum();
                black_box(n)
            })
        });
    }
}

criterion_group!(benches, bench_candidates, bench_legal);
criterion_main!(benches);
