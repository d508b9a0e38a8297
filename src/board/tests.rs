use std::sync::Arc;

use super::*;
use crate::error::BoardError;
use crate::hash::{Fingerprint, StoneKeys};

fn board9() -> Board {
    Board::new(9).unwrap()
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_side() {
    assert_eq!(Stone::Black.side(), 0);
    assert_eq!(Stone::White.side(), 1);
}

#[test]
#[should_panic]
fn test_empty_has_no_side() {
    let _ = Stone::Empty.side();
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.to_index(), 180);
    assert_eq!(Pos::from_index(180), pos);
}

#[test]
fn test_pos_neighbors() {
    let corner: Vec<Pos> = Pos::new(0, 0).neighbors(9).collect();
    assert_eq!(corner, vec![Pos::new(0, 1), Pos::new(1, 0)]);

    let edge: Vec<Pos> = Pos::new(0, 4).neighbors(9).collect();
    assert_eq!(edge.len(), 3);

    let center: Vec<Pos> = Pos::new(4, 4).neighbors(9).collect();
    assert_eq!(center.len(), 4);

    // the far edge depends on the board size, not on BOARD_SIZE
    assert_eq!(Pos::new(8, 8).neighbors(9).count(), 2);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 18) < Pos::new(1, 0));
}

#[test]
fn test_board_sizes() {
    assert!(Board::new(1).is_ok());
    assert!(Board::new(19).is_ok());
    assert_eq!(Board::new(0).unwrap_err(), BoardError::InvalidSize(0));
    assert_eq!(Board::new(20).unwrap_err(), BoardError::InvalidSize(20));
}

#[test]
fn test_place_and_remove() {
    let mut board = board9();
    let pos = Pos::new(2, 3);
    board.place_stone(pos, Stone::Black).unwrap();
    assert_eq!(board.get(pos), Stone::Black);
    assert_eq!(
        board.place_stone(pos, Stone::White),
        Err(BoardError::Occupied(pos))
    );
    assert_eq!(
        board.place_stone(Pos::new(9, 0), Stone::White),
        Err(BoardError::OutOfBounds(Pos::new(9, 0)))
    );
    assert_eq!(board.remove_stone(pos), Stone::Black);
    assert_eq!(board.remove_stone(pos), Stone::Empty);
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.fingerprint(), Fingerprint::EMPTY);
}

#[test]
fn test_play_captures_single_stone() {
    let mut board = board9();
    board.place_stone(Pos::new(0, 0), Stone::White).unwrap();
    board.place_stone(Pos::new(0, 1), Stone::Black).unwrap();

    let record = board.play(Pos::new(1, 0), Stone::Black).unwrap();
    assert_eq!(record.captured, vec![Pos::new(0, 0)]);
    assert!(board.is_empty(Pos::new(0, 0)));

    board.undo(&record);
    assert_eq!(board.get(Pos::new(0, 0)), Stone::White);
    assert!(board.is_empty(Pos::new(1, 0)));
}

#[test]
fn test_suicide_rejected() {
    let mut board = board9();
    board.place_stone(Pos::new(0, 1), Stone::Black).unwrap();
    board.place_stone(Pos::new(1, 0), Stone::Black).unwrap();
    let before = board.fingerprint();

    assert_eq!(
        board.play(Pos::new(0, 0), Stone::White),
        Err(BoardError::Suicide(Pos::new(0, 0)))
    );
    assert!(board.is_empty(Pos::new(0, 0)));
    assert_eq!(board.fingerprint(), before);
}

#[test]
fn test_capture_beats_suicide() {
    // White at (0,0) has a single liberty at (1,0); Black filling it has no
    // liberty of its own but captures, so the move is legal.
    let mut board = board9();
    board.place_stone(Pos::new(0, 0), Stone::White).unwrap();
    board.place_stone(Pos::new(0, 1), Stone::Black).unwrap();
    board.place_stone(Pos::new(1, 1), Stone::White).unwrap();
    board.place_stone(Pos::new(2, 0), Stone::White).unwrap();

    let record = board.play(Pos::new(1, 0), Stone::Black).unwrap();
    assert_eq!(record.captured, vec![Pos::new(0, 0)]);
}

#[test]
fn test_fingerprint_tracks_recompute() {
    let mut board = board9();
    let moves = [
        (Pos::new(4, 4), Stone::Black),
        (Pos::new(4, 5), Stone::White),
        (Pos::new(3, 5), Stone::Black),
        (Pos::new(5, 5), Stone::Black),
        (Pos::new(4, 6), Stone::Black),
    ];
    let mut records = Vec::new();
    for (pos, stone) in moves {
        records.push(board.play(pos, stone).unwrap());
        assert_eq!(board.fingerprint(), board.recompute_fingerprint());
    }
    // the last move captured the white stone
    assert_eq!(records.last().unwrap().captured, vec![Pos::new(4, 5)]);

    for record in records.iter().rev() {
        board.undo(record);
        assert_eq!(board.fingerprint(), board.recompute_fingerprint());
    }
    assert_eq!(board.fingerprint(), Fingerprint::EMPTY);
}

#[test]
fn test_transposition_same_fingerprint() {
    let mut a = board9();
    let mut b = board9();

    a.play(Pos::new(2, 2), Stone::Black).unwrap();
    a.play(Pos::new(6, 6), Stone::White).unwrap();
    a.play(Pos::new(2, 6), Stone::Black).unwrap();

    b.play(Pos::new(2, 6), Stone::Black).unwrap();
    b.play(Pos::new(6, 6), Stone::White).unwrap();
    b.play(Pos::new(2, 2), Stone::Black).unwrap();

    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_colors_hash_differently() {
    let mut a = board9();
    let mut b = board9();
    a.place_stone(Pos::new(3, 3), Stone::Black).unwrap();
    b.place_stone(Pos::new(3, 3), Stone::White).unwrap();
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_board_view_off_board() {
    use crate::filter::BoardView;

    let mut board = board9();
    board.place_stone(Pos::new(0, 0), Stone::White).unwrap();
    assert_eq!(board.stone_at(-1, 0), None);
    assert_eq!(board.stone_at(0, 9), None);
    assert_eq!(board.stone_at(0, 0), Some(Stone::White));
    assert_eq!(board.stone_at(8, 8), Some(Stone::Empty));
}

#[test]
fn test_rekey_recomputes_fingerprint() {
    let mut board = board9();
    board.place_stone(Pos::new(4, 4), Stone::Black).unwrap();
    let before = board.fingerprint();

    board.rekey(Arc::new(StoneKeys::with_seed(12345)));
    assert_ne!(board.fingerprint(), before);
    assert_eq!(board.fingerprint(), board.recompute_fingerprint());
    assert_eq!(board.keys().seed(), 12345);
}
