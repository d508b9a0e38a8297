//! Go board with an incrementally maintained fingerprint

use std::sync::Arc;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::BoardError;
use crate::filter::BoardView;
use crate::hash::{Fingerprint, StoneKeys};
use crate::rules::capture;

/// Square Go board of side 1..=19.
///
/// Every stone that appears or disappears multiplies or divides the running
/// [`Fingerprint`] by that stone's key, so the fingerprint is always current
/// without ever being recomputed.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
    fingerprint: Fingerprint,
    keys: Arc<StoneKeys>,
}

/// Record of a played move, enough to undo it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
    pub captured: Vec<Pos>,
}

impl Board {
    /// Empty board using the shared stone-key table.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_keys(size, StoneKeys::shared())
    }

    /// Empty board using an explicit stone-key table.
    pub fn with_keys(size: usize, keys: Arc<StoneKeys>) -> Result<Self, BoardError> {
        if size == 0 || size > BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
            fingerprint: Fingerprint::EMPTY,
            keys,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Stone-key table this board hashes with
    #[inline]
    pub fn keys(&self) -> &Arc<StoneKeys> {
        &self.keys
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Current fingerprint
    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Fingerprint computed from scratch; always equals [`Board::fingerprint`].
    pub fn recompute_fingerprint(&self) -> Fingerprint {
        self.keys.fingerprint(self.black.iter_ones(), self.white.iter_ones())
    }

    /// Switch to another key table, recomputing the fingerprint.
    pub fn rekey(&mut self, keys: Arc<StoneKeys>) {
        self.keys = keys;
        self.fingerprint = self.recompute_fingerprint();
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Put a stone on an empty point without applying any rules.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.put(pos, stone);
        Ok(())
    }

    /// Take a stone off the board, returning what was there.
    pub fn remove_stone(&mut self, pos: Pos) -> Stone {
        let stone = self.get(pos);
        if stone != Stone::Empty {
            self.take(pos, stone);
        }
        stone
    }

    /// Play a move: place the stone, remove captured enemy groups, reject
    /// suicide. On error the board is unchanged.
    pub fn play(&mut self, pos: Pos, stone: Stone) -> Result<MoveRecord, BoardError> {
        if !self.contains(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }

        self.put(pos, stone);
        let captured = capture::dead_neighbors(self, pos, stone);
        for &p in &captured {
            self.take(p, stone.opponent());
        }

        if captured.is_empty() && capture::liberties(self, pos) == 0 {
            self.take(pos, stone);
            return Err(BoardError::Suicide(pos));
        }

        Ok(MoveRecord { pos, stone, captured })
    }

    /// Revert a move returned by [`Board::play`]. Moves must be undone in
    /// reverse order.
    pub fn undo(&mut self, record: &MoveRecord) {
        self.take(record.pos, record.stone);
        let enemy = record.stone.opponent();
        for &p in &record.captured {
            self.put(p, enemy);
        }
    }

    #[inline]
    fn put(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return,
        }
        self.fingerprint.add(self.keys.key(pos, stone), stone);
    }

    #[inline]
    fn take(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.clear(pos),
            Stone::White => self.white.clear(pos),
            Stone::Empty => return,
        }
        self.fingerprint.remove(self.keys.key(pos, stone), stone);
    }
}

impl BoardView for Board {
    #[inline]
    fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        let size = self.size as i32;
        if row < 0 || col < 0 || row >= size || col >= size {
            return None;
        }
        Some(self.get(Pos::new(row as u8, col as u8)))
    }
}
