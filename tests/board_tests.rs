//! Board tests - grid storage, ids and symbol round-trips

use build_match::core::{Board, BoardSnapshot};
use build_match::types::{Coord, Tile, TileKind, TileState};

#[test]
fn test_board_new_empty() {
    let board = Board::new(12, 6);
    assert_eq!(board.rows(), 12);
    assert_eq!(board.cols(), 6);
    assert_eq!(board.empty_count(), 72);
    assert!(!board.is_full());

    for coord in board.coords() {
        assert!(board.contains(coord), "{:?} should be in bounds", coord);
        assert_eq!(board.get(coord), Some(None));
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(6, 6);
    assert_eq!(board.get(Coord::new(6, 0)), None);
    assert_eq!(board.get(Coord::new(0, 6)), None);

    let err = board.check(Coord::new(9, 9)).unwrap_err();
    assert_eq!(err.code(), "invalid_coordinate");
    assert_eq!(err.to_string(), "cell (9, 9) is outside the 6x6 grid");
}

#[test]
fn test_board_set_and_take() {
    let mut board = Board::new(3, 3);
    let tile = Tile::new(7, TileKind::Glass);
    assert!(board.set(Coord::new(1, 1), Some(tile)));
    assert_eq!(board.tile(Coord::new(1, 1)), Some(&tile));
    assert_eq!(board.kind_at(Coord::new(1, 1)), Some(TileKind::Glass));

    assert_eq!(board.take(Coord::new(1, 1)), Some(tile));
    assert_eq!(board.get(Coord::new(1, 1)), Some(None));

    assert!(!board.set(Coord::new(3, 0), Some(tile)));
}

#[test]
fn test_place_new_never_reuses_ids() {
    let mut board = Board::new(1, 2);
    let first = board.place_new(Coord::new(0, 0), TileKind::Brick).unwrap();
    board.take(Coord::new(0, 0));
    let second = board.place_new(Coord::new(0, 0), TileKind::Brick).unwrap();
    assert!(second > first);
    assert_eq!(board.place_new(Coord::new(5, 5), TileKind::Wood), None);
}

#[test]
fn test_neighbors_at_corner_and_center() {
    let board = Board::new(4, 4);
    let corner = board.neighbors(Coord::new(0, 0));
    assert_eq!(corner.as_slice(), &[Coord::new(0, 1), Coord::new(1, 0)]);

    let center = board.neighbors(Coord::new(2, 2));
    assert_eq!(center.len(), 4);
    assert!(center.iter().all(|n| n.is_adjacent(Coord::new(2, 2))));

    assert!(board.neighbors(Coord::new(4, 0)).is_empty());
}

#[test]
fn test_symbols_round_trip_with_holes() {
    let rows = ["BWS", "G.C", "..T"];
    let board = Board::from_symbols(&rows).unwrap();
    assert_eq!(board.to_symbols(), rows);
    assert_eq!(board.to_string(), "BWS\nG.C\n..T");
    assert_eq!(board.empty_count(), 3);
    assert!(board.has_unique_ids());
    assert_eq!(board.max_id(), 6);
}

#[test]
fn test_from_symbols_rejects_bad_input() {
    assert!(Board::from_symbols(&["BW", "B"]).is_none());
    assert!(Board::from_symbols(&["BX"]).is_none());
}

#[test]
fn test_settled_resets_states() {
    let mut board = Board::new(1, 1);
    board.set(
        Coord::new(0, 0),
        Some(Tile::new(1, TileKind::Stone).with_state(TileState::Falling)),
    );
    let settled = board.settled();
    assert_eq!(settled.tile(Coord::new(0, 0)).unwrap().state, TileState::Idle);
}

#[test]
fn test_snapshot_hash_tracks_kinds_only() {
    let a = Board::from_symbols(&["BW", "SG"]).unwrap();
    let mut b = Board::new(2, 2);
    // Same kinds, different ids.
    for (coord, kind) in [
        (Coord::new(1, 1), TileKind::Glass),
        (Coord::new(1, 0), TileKind::Steel),
        (Coord::new(0, 1), TileKind::Wood),
        (Coord::new(0, 0), TileKind::Brick),
    ] {
        b.place_new(coord, kind);
    }

    let sa = BoardSnapshot::capture(&a);
    let sb = BoardSnapshot::capture(&b);
    assert_ne!(sa.ids, sb.ids);
    assert_eq!(sa.board_hash, sb.board_hash);
    assert_eq!(sa.row(1), &[TileKind::Steel.code(), TileKind::Glass.code()]);
}
