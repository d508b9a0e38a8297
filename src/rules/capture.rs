//! Capture rules
//!
//! A group is a maximal set of orthogonally connected stones of one color;
//! its liberties are the empty points orthogonally adjacent to it. A group
//! left without liberties after a move is removed from the board.

use crate::board::{Bitboard, Board, Pos, Stone};

/// Flood-fill the group containing `pos`.
///
/// Returns the group's stones and its liberties. An empty `pos` yields two
/// empty sets.
pub fn group(board: &Board, pos: Pos) -> (Bitboard, Bitboard) {
    let mut stones = Bitboard::new();
    let mut libs = Bitboard::new();
    let color = board.get(pos);
    if color == Stone::Empty {
        return (stones, libs);
    }

    let mut stack = vec![pos];
    stones.set(pos);
    while let Some(p) = stack.pop() {
        for n in p.neighbors(board.size()) {
            let s = board.get(n);
            if s == color {
                if stones.insert(n) {
                    stack.push(n);
                }
            } else if s == Stone::Empty {
                libs.set(n);
            }
        }
    }
    (stones, libs)
}

/// Number of liberties of the group at `pos`.
#[inline]
pub fn liberties(board: &Board, pos: Pos) -> u32 {
    group(board, pos).1.count()
}

/// Stones of `stone`'s opponent adjacent to `pos` whose groups have no
/// liberties left, i.e. the stones a move at `pos` captures. The move itself
/// must already be on the board.
///
/// # Returns
/// Captured positions in index order, each listed once.
pub fn dead_neighbors(board: &Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let enemy = stone.opponent();
    let mut dead = Bitboard::new();
    for n in pos.neighbors(board.size()) {
        if board.get(n) != enemy || dead.get(n) {
            continue;
        }
        let (stones, libs) = group(board, n);
        if libs.is_empty() {
            dead.union_with(&stones);
        }
    }
    dead.iter_ones().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let stone = match ch {
                    'X' => Stone::Black,
                    'O' => Stone::White,
                    _ => continue,
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_group_and_liberties() {
        let board = board_from(&[
            "XX...", //
            "X....", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let (stones, libs) = group(&board, Pos::new(0, 0));
        assert_eq!(stones.count(), 3);
        assert_eq!(libs.count(), 3); // (0,2) (1,1) (2,0)
        assert_eq!(liberties(&board, Pos::new(1, 0)), 3);
    }

    #[test]
    fn test_empty_point_has_no_group() {
        let board = board_from(&["...", "...", "..."]);
        let (stones, libs) = group(&board, Pos::new(1, 1));
        assert!(stones.is_empty());
        assert!(libs.is_empty());
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        let board = board_from(&[
            "X.X", //
            "XXX", //
            "OOO",
        ]);
        assert_eq!(liberties(&board, Pos::new(0, 0)), 1);
        assert_eq!(liberties(&board, Pos::new(2, 0)), 0);
    }

    #[test]
    fn test_dead_neighbors_whole_group() {
        let mut board = board_from(&[
            "OO.X.", //
            "XXX..", //
            ".....", //
            ".....", //
            ".....",
        ]);
        board.place_stone(Pos::new(0, 2), Stone::Black).unwrap();
        let dead = dead_neighbors(&board, Pos::new(0, 2), Stone::Black);
        assert_eq!(dead, vec![Pos::new(0, 0), Pos::new(0, 1)]);
    }

    #[test]
    fn test_dead_neighbors_ignores_groups_with_liberties() {
        let mut board = board_from(&[
            ".O...", //
            "OX...", //
            ".....", //
            ".....", //
            ".....",
        ]);
        board.place_stone(Pos::new(0, 0), Stone::Black).unwrap();
        assert!(dead_neighbors(&board, Pos::new(0, 0), Stone::Black).is_empty());
    }
}
