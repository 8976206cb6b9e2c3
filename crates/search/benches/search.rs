use blockfall_core::{Board, PieceKind, Position};
use blockfall_engine::RandomPieces;
use blockfall_search::{Expectimax, SearchConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn midgame_board() -> Board {
    let mut board = Board::default();
    let heights = [5, 6, 4, 7, 3, 5, 6, 0, 4, 5];
    for (x, &h) in heights.iter().enumerate() {
        for y in board.height() - h..board.height() {
            board.set(x, y, 1);
        }
    }
    board
}

fn bench_search(c: &mut Criterion) {
    let board = midgame_board();
    let piece = PieceKind::T.shape();

    for (label, config) in [
        ("depth2", SearchConfig::default()),
        ("depth3_seq", SearchConfig::deep().with_parallel(false)),
        ("depth3_par", SearchConfig::deep()),
    ] {
        let search = Expectimax::new(&config);
        c.bench_function(&format!("search_{}", label), |b| {
            b.iter(|| {
                let mut source = RandomPieces::seeded(7);
                search.search(black_box(&board), black_box(&piece), Position::SPAWN, &mut source)
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
