//! Dumb-move detection

use std::sync::{Arc, OnceLock};

use super::pattern::{neighborhood, Pattern};
use super::BoardView;
use crate::board::{Pos, Stone};

/// Shapes in which the move only fills one of the mover's own eyes.
///
/// Ordered most common first; [`DumbMoveFilter::is_dumb`] stops at the
/// first match, so the order never changes the answer.
pub const DEFAULT_PATTERNS: [Pattern; 4] = [
    // edge eye
    Pattern::new([b"###", b"X.X", b"XXX"]),
    // corner eye
    Pattern::new([b"###", b"#.X", b"#XX"]),
    // interior eye
    Pattern::new([b"XXX", b"X.X", b"XXX"]),
    // interior eye with one foreign diagonal: still a real eye
    Pattern::new([b"?XX", b"X.X", b"XXX"]),
];

/// Set of patterns, each expanded to all board symmetries.
#[derive(Debug, Clone)]
pub struct DumbMoveFilter {
    patterns: Vec<Pattern>,
}

impl DumbMoveFilter {
    /// Filter over [`DEFAULT_PATTERNS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_patterns(DEFAULT_PATTERNS)
    }

    /// Filter over `patterns` and their rotations and mirrors.
    pub fn with_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut expanded: Vec<Pattern> = Vec::new();
        for p in patterns {
            for q in p.symmetries() {
                if !expanded.contains(&q) {
                    expanded.push(q);
                }
            }
        }
        log::debug!("dumb-move filter: {} patterns", expanded.len());
        Self { patterns: expanded }
    }

    /// Process-wide filter over the default patterns, built on first use.
    pub fn shared() -> Arc<DumbMoveFilter> {
        static SHARED: OnceLock<Arc<DumbMoveFilter>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(DumbMoveFilter::new())))
    }

    /// Expanded pattern list
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Is playing `color` at `pos` obviously futile?
    #[inline]
    pub fn is_dumb<B: BoardView + ?Sized>(&self, board: &B, pos: Pos, color: Stone) -> bool {
        self.is_dumb_code(neighborhood(
            board,
            i32::from(pos.row),
            i32::from(pos.col),
            color,
        ))
    }

    /// Same test on a precomputed neighborhood code.
    #[inline]
    pub fn is_dumb_code(&self, code: u32) -> bool {
        self.patterns.iter().any(|p| p.matches(code))
    }
}

impl Default for DumbMoveFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use rand::seq::SliceRandom;

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
    fn test_default_expansion() {
        // edge 4 + corner 4 + full eye 1 + one-diagonal eye 4
        assert_eq!(DumbMoveFilter::new().len(), 13);
        assert!(Arc::ptr_eq(
            &DumbMoveFilter::shared(),
            &DumbMoveFilter::shared()
        ));
    }

    #[test]
    fn test_filled_eye_is_dumb() {
        let board = board_from(&[
            ".....", //
            ".XXX.", //
            ".X.X.", //
            ".XXX.", //
            ".....",
        ]);
        let filter = DumbMoveFilter::new();
        assert!(filter.is_dumb(&board, Pos::new(2, 2), Stone::Black));
        // for white it is a point inside enemy stones, not an eye
        assert!(!filter.is_dumb(&board, Pos::new(2, 2), Stone::White));
    }

    #[test]
    fn test_open_liberty_is_not_dumb() {
        let board = board_from(&[
            ".....", //
            ".XXX.", //
            ".X...", //
            ".XXX.", //
            ".....",
        ]);
        let filter = DumbMoveFilter::new();
        assert!(!filter.is_dumb(&board, Pos::new(2, 2), Stone::Black));
        assert!(!filter.is_dumb(&board, Pos::new(0, 0), Stone::Black));
    }

    #[test]
    fn test_one_enemy_diagonal() {
        let interior = board_from(&[
            ".....", //
            ".OXX.", //
            ".X.X.", //
            ".XXX.", //
            ".....",
        ]);
        let filter = DumbMoveFilter::new();
        assert!(filter.is_dumb(&interior, Pos::new(2, 2), Stone::Black));

        let two = board_from(&[
            ".....", //
            ".OXX.", //
            ".X.X.", //
            ".XXO.", //
            ".....",
        ]);
        assert!(!filter.is_dumb(&two, Pos::new(2, 2), Stone::Black));
    }

    #[test]
    fn test_edge_and_corner_eyes() {
        let board = board_from(&[
            ".XX.X", //
            "XXXXX", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let filter = DumbMoveFilter::new();
        assert!(filter.is_dumb(&board, Pos::new(0, 0), Stone::Black));
        assert!(filter.is_dumb(&board, Pos::new(0, 3), Stone::Black));

        // an edge eye with a foreign diagonal is false, filling it may matter
        let false_eye = board_from(&[
            "XX.XX", //
            "XXXOX", //
            ".....", //
            ".....", //
            ".....",
        ]);
        assert!(!filter.is_dumb(&false_eye, Pos::new(0, 2), Stone::Black));
    }

    #[test]
    fn test_pattern_order_does_not_matter() {
        let board = board_from(&[
            "XX.XX", //
            "XXXOX", //
            "X.XXX", //
            "XXXXX", //
            ".X.O.",
        ]);
        let mut rng = crate::rng::Lcg::new(3);
        let reference = DumbMoveFilter::new();
        for _ in 0..10 {
            let mut patterns = DEFAULT_PATTERNS;
            patterns.shuffle(&mut rng);
            let filter = DumbMoveFilter::with_patterns(patterns);
            for idx in 0..25 {
                let pos = Pos::new(idx / 5, idx % 5);
                for color in [Stone::Black, Stone::White] {
                    assert_eq!(
                        filter.is_dumb(&board, pos, color),
                        reference.is_dumb(&board, pos, color),
                        "{pos:?} {color:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_filter_allows_everything() {
        let filter = DumbMoveFilter::with_patterns([]);
        assert!(filter.is_empty());
        assert!(!filter.is_dumb_code(0));
    }
}
