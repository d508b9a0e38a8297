//! Tsumego solver core
//!
//! Building blocks of a life-and-death solver for Go:
//! - Positions are hashed by multiplying invertible quaternions over
//!   GF(2^8), so a stone is added or removed in O(1) and move order never
//!   changes the fingerprint
//! - Sharded open-addressed maps store proof / disproof numbers per
//!   fingerprint and side to move
//! - A static 3x3 pattern filter drops moves that only fill one's own eye
//! - A small LCG gives reproducible keys and test data
//!
//! # Architecture
//!
//! - [`hash`]: field arithmetic, quaternions, stone keys and fingerprints
//! - [`table`]: pair / integer / side-indexed hash maps
//! - [`filter`]: dumb-move patterns
//! - [`board`]: Go board with captures, undo and incremental fingerprint
//! - [`rules`]: groups, liberties and captures
//! - [`search`]: df-pn cache and driver
//! - [`solver`]: configuration and entry point
//! - [`rng`]: deterministic generator
//!
//! # Quick Start
//!
//! ```
//! use tsumego::{Pos, Solver, SolveStatus, Stone, Tsumego};
//!
//! let mut solver = Solver::new();
//! let mut board = solver.board(9).unwrap();
//!
//! // white needs the middle point of a straight three to live
//! for (r, c) in [(0, 3), (1, 0), (1, 1), (1, 2), (1, 3)] {
//!     board.place_stone(Pos::new(r, c), Stone::White).unwrap();
//! }
//! for (r, c) in [(0, 4), (1, 4), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4)] {
//!     board.place_stone(Pos::new(r, c), Stone::Black).unwrap();
//! }
//!
//! let region = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)];
//! let problem = Tsumego::new(board, Pos::new(1, 1), region, Stone::Black).unwrap();
//!
//! let result = solver.solve(&problem).unwrap();
//! assert_eq!(result.status, SolveStatus::Proven);
//! assert_eq!(result.best_move, Some(Pos::new(0, 1)));
//! ```

pub mod board;
pub mod error;
pub mod filter;
pub mod hash;
pub mod rng;
pub mod rules;
pub mod search;
pub mod solver;
pub mod table;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use error::{Error, Result};
pub use filter::DumbMoveFilter;
pub use hash::{Fingerprint, Quaternion, StoneKeys};
pub use rng::Lcg;
pub use search::{DfpnCache, DfpnEntry, SolveResult, SolveStatus, Tsumego};
pub use solver::{Solver, SolverConfig};
