//! Error types

use crate::board::Pos;

/// Violated preconditions of the field / quaternion arithmetic.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Zero has no multiplicative inverse in GF(2^8)
    #[error("zero has no inverse in GF(2^8)")]
    ZeroInverse,

    /// Quaternion with zero norm cannot be inverted
    #[error("quaternion {0:?} has zero norm")]
    SingularQuaternion([u8; 4]),
}

/// Board construction and move errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be in 1..=19, got {0}")]
    InvalidSize(usize),

    #[error("{0:?} is outside the board")]
    OutOfBounds(Pos),

    #[error("{0:?} is already occupied")]
    Occupied(Pos),

    /// Move leaves its own group without liberties and captures nothing
    #[error("move at {0:?} is suicide")]
    Suicide(Pos),
}

/// Malformed pattern text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must be 3 rows of 3 symbols, got {0:?}")]
    Shape(String),

    #[error("unknown pattern symbol {0:?}")]
    Symbol(char),
}

/// Ill-formed life-and-death problem.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("attacker must be black or white")]
    NoAttacker,

    #[error("target {0:?} is not a defender stone")]
    Target(Pos),

    #[error("region point {0:?} is outside the board")]
    Region(Pos),

    #[error("problem has an empty region")]
    EmptyRegion,
}

/// Crate-level error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Result alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;
