//! 3x3 patterns and neighborhood codes
//!
//! A neighborhood is packed into an 18-bit code, 2 bits per cell, cells in
//! row-major order starting at the upper-left diagonal. A [`Pattern`] keeps
//! one 4-bit mask of accepted [`Cell`] values per cell, so matching is nine
//! shifts and ands.

use std::fmt;
use std::str::FromStr;

use super::BoardView;
use crate::board::Stone;
use crate::error::PatternError;

/// Cells in a neighborhood
pub const CELLS: usize = 9;
/// Width of a neighborhood code
pub const CODE_BITS: u32 = 2 * CELLS as u32;

/// Content of a point relative to the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Own = 0,
    Enemy = 1,
    Empty = 2,
    OffBoard = 3,
}

impl Cell {
    /// Classify a [`BoardView::stone_at`] result for `color`.
    #[inline]
    pub fn classify(stone: Option<Stone>, color: Stone) -> Cell {
        match stone {
            None => Cell::OffBoard,
            Some(Stone::Empty) => Cell::Empty,
            Some(s) if s == color => Cell::Own,
            Some(_) => Cell::Enemy,
        }
    }

    #[inline]
    const fn from_bits(bits: u32) -> Cell {
        match bits & 3 {
            0 => Cell::Own,
            1 => Cell::Enemy,
            2 => Cell::Empty,
            _ => Cell::OffBoard,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Code of the 3x3 neighborhood centred on (row, col), seen by `color`.
pub fn neighborhood<B: BoardView + ?Sized>(board: &B, row: i32, col: i32, color: Stone) -> u32 {
    debug_assert!(color != Stone::Empty);
    let mut code = 0;
    for i in 0..CELLS {
        let dr = (i / 3) as i32 - 1;
        let dc = (i % 3) as i32 - 1;
        let cell = Cell::classify(board.stone_at(row + dr, col + dc), color);
        code |= (cell as u32) << (2 * i);
    }
    code
}

/// Cell `i` of a neighborhood code.
#[inline]
pub fn cell_at(code: u32, i: usize) -> Cell {
    Cell::from_bits(code >> (2 * i))
}

const ANY: u8 = 0b1111;

/// Accepted cells for one pattern symbol.
const fn symbol_mask(symbol: u8) -> Option<u8> {
    Some(match symbol {
        b'X' => Cell::Own.bit(),
        b'O' => Cell::Enemy.bit(),
        b'.' => Cell::Empty.bit(),
        b'#' => Cell::OffBoard.bit(),
        b'?' => ANY,
        _ => return None,
    })
}

/// 3x3 template over `X` own, `O` enemy, `.` empty, `#` off-board and
/// `?` anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    masks: [u8; CELLS],
}

impl Pattern {
    /// Build from three rows, top to bottom.
    ///
    /// # Panics
    ///
    /// On a symbol outside `XO.#?`. In a `const` this is a compile error.
    pub const fn new(rows: [&[u8; 3]; 3]) -> Pattern {
        let mut masks = [0u8; CELLS];
        let mut i = 0;
        while i < CELLS {
            masks[i] = match symbol_mask(rows[i / 3][i % 3]) {
                Some(m) => m,
                None => panic!("unknown pattern symbol"),
            };
            i += 1;
        }
        Pattern { masks }
    }

    /// Does the neighborhood `code` fit this template?
    #[inline]
    pub fn matches(&self, code: u32) -> bool {
        self.masks
            .iter()
            .enumerate()
            .all(|(i, &mask)| (mask >> ((code >> (2 * i)) & 3)) & 1 != 0)
    }

    /// Quarter turn clockwise.
    pub fn rotated(&self) -> Pattern {
        let mut masks = [0; CELLS];
        for r in 0..3 {
            for c in 0..3 {
                masks[r * 3 + c] = self.masks[(2 - c) * 3 + r];
            }
        }
        Pattern { masks }
    }

    /// Left-right mirror.
    pub fn mirrored(&self) -> Pattern {
        let mut masks = [0; CELLS];
        for r in 0..3 {
            for c in 0..3 {
                masks[r * 3 + c] = self.masks[r * 3 + 2 - c];
            }
        }
        Pattern { masks }
    }

    /// The distinct images of this pattern under the 8 board symmetries.
    pub fn symmetries(&self) -> Vec<Pattern> {
        let mut out = Vec::with_capacity(8);
        let mut p = *self;
        for _ in 0..4 {
            for q in [p, p.mirrored()] {
                if !out.contains(&q) {
                    out.push(q);
                }
            }
            p = p.rotated();
        }
        out
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Rows separated by `/` or whitespace, e.g. `"XXX/X.X/XXX"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != 3 || rows.iter().any(|row| row.chars().count() != 3) {
            return Err(PatternError::Shape(s.to_string()));
        }

        let mut masks = [0; CELLS];
        for (i, ch) in rows.iter().flat_map(|row| row.chars()).enumerate() {
            let byte = u8::try_from(ch).map_err(|_| PatternError::Symbol(ch))?;
            masks[i] = symbol_mask(byte).ok_or(PatternError::Symbol(ch))?;
        }
        Ok(Pattern { masks })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(11);
        for (i, &mask) in self.masks.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                s.push('/');
            }
            s.push(match mask {
                m if m == Cell::Own.bit() => 'X',
                m if m == Cell::Enemy.bit() => 'O',
                m if m == Cell::Empty.bit() => '.',
                m if m == Cell::OffBoard.bit() => '#',
                ANY => '?',
                _ => '*',
            });
        }
        write!(f, "Pattern({s})")
    }
}
