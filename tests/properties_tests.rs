//! Seed sweeps over generation and play

use build_match::core::{
    create_initial_board, find_all_matches, find_valid_swap, is_dead, XorShiftRng,
};
use build_match::engine::Session;
use build_match::types::{GameConfig, TileKind};

#[test]
fn test_no_initial_matches_for_any_seed() {
    let config = GameConfig::default();
    for seed in 0..200 {
        let mut rng = XorShiftRng::new(seed);
        let board = create_initial_board(&config, &mut rng).unwrap();
        assert_eq!(board.rows(), 12);
        assert!(board.is_full(), "seed {}", seed);
        assert!(board.has_unique_ids(), "seed {}", seed);
        assert!(
            find_all_matches(&board, config.min_match).is_empty(),
            "seed {} starts with a match:\n{}",
            seed,
            board
        );
    }
}

#[test]
fn test_five_kinds_six_by_six_seed_one() {
    let config = GameConfig::with_grid(6, 6).with_kinds(&[
        TileKind::Brick,
        TileKind::Wood,
        TileKind::Steel,
        TileKind::Glass,
        TileKind::Cement,
    ]);
    let mut rng = XorShiftRng::new(1);
    let board = create_initial_board(&config, &mut rng).unwrap();
    assert!(find_all_matches(&board, 3).is_empty());
    assert!(board.tiles().all(|(_, t)| t.kind != TileKind::Stone));
}

#[test]
fn test_generation_is_deterministic() {
    let config = GameConfig::default();
    let a = create_initial_board(&config, &mut XorShiftRng::new(42)).unwrap();
    let b = create_initial_board(&config, &mut XorShiftRng::new(42)).unwrap();
    let c = create_initial_board(&config, &mut XorShiftRng::new(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.to_symbols(), c.to_symbols());
}

#[test]
fn test_seed_zero_behaves_like_seed_one() {
    let config = GameConfig::default();
    let zero = create_initial_board(&config, &mut XorShiftRng::new(0)).unwrap();
    let one = create_initial_board(&config, &mut XorShiftRng::new(1)).unwrap();
    assert_eq!(zero, one);
}

#[test]
fn test_ten_moves_keep_board_invariants() {
    for seed in 1..=10 {
        let mut session = Session::new(GameConfig::default(), seed).unwrap();
        for _ in 0..10 {
            let Some((a, b)) = find_valid_swap(session.board(), 3) else {
                break;
            };
            assert_eq!(session.try_swap(a, b), Ok(true));
            session.resolve_all().unwrap();

            let board = session.board();
            assert!(board.is_full());
            assert!(board.has_unique_ids());
            assert!(find_all_matches(board, 3).is_empty());
        }
        assert!(session.moves() > 0);
        assert_eq!(session.score() % 10, 0);
        assert_eq!(
            is_dead(session.board(), 3),
            find_valid_swap(session.board(), 3).is_none()
        );
    }
}
