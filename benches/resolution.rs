use criterion::{black_box, criterion_group, criterion_main, Criterion};
use build_match::core::{
    apply_gravity, create_initial_board, find_all_matches, find_valid_swap, run_cascade,
    swap_if_valid, valid_swaps, Board, XorShiftRng,
};
use build_match::types::GameConfig;

fn fresh_board(seed: u32) -> (Board, XorShiftRng) {
    let mut rng = XorShiftRng::new(seed);
    let board = create_initial_board(&GameConfig::default(), &mut rng)
        .expect("default config generates");
    (board, rng)
}

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut seed = 1u32;

    c.bench_function("create_initial_board_12x6", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut rng = XorShiftRng::new(seed);
            create_initial_board(black_box(&config), &mut rng)
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let (board, _) = fresh_board(12345);

    c.bench_function("find_all_matches_12x6", |b| {
        b.iter(|| find_all_matches(black_box(&board), 3))
    });
}

fn bench_gravity(c: &mut Criterion) {
    let (mut board, _) = fresh_board(12345);
    for coord in board.coords().filter(|c| c.row % 3 == 1).collect::<Vec<_>>() {
        board.take(coord);
    }

    c.bench_function("apply_gravity_12x6", |b| {
        b.iter(|| apply_gravity(black_box(&board)))
    });
}

fn bench_hints(c: &mut Criterion) {
    let (board, _) = fresh_board(12345);

    c.bench_function("valid_swaps_12x6", |b| {
        b.iter(|| valid_swaps(black_box(&board), 3))
    });
}

fn bench_cascade(c: &mut Criterion) {
    let config = GameConfig::default();
    let (board, rng) = fresh_board(4);
    let (a, b_) = find_valid_swap(&board, 3).expect("fresh board has a move");
    let swapped = swap_if_valid(&board, a, b_, 3).expect("in bounds").board;

    c.bench_function("run_cascade_after_swap", |b| {
        b.iter(|| {
            let mut rng = rng.clone();
            run_cascade(black_box(&swapped), &mut rng, &config)
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_find_matches,
    bench_gravity,
    bench_hints,
    bench_cascade
);
criterion_main!(benches);
