//! Solver facade tying the cache, the filter and the df-pn driver together
//!
//! # Example
//!
//! ```
//! use tsumego::{Pos, Solver, SolverConfig, SolveStatus, Stone, Tsumego};
//!
//! let mut solver = Solver::with_config(SolverConfig {
//!     max_nodes: 10_000,
//!     ..SolverConfig::default()
//! });
//!
//! // white stone with a single liberty at (1, 0)
//! let mut board = solver.board(5).unwrap();
//! board.place_stone(Pos::new(0, 0), Stone::White).unwrap();
//! board.place_stone(Pos::new(0, 1), Stone::Black).unwrap();
//!
//! let problem = Tsumego::new(board, Pos::new(0, 0), [Pos::new(1, 0)], Stone::Black).unwrap();
//! let result = solver.solve(&problem).unwrap();
//! assert_eq!(result.status, SolveStatus::Proven);
//! println!("{:?} after {} nodes", result.best_move, result.nodes);
//! ```

use std::sync::Arc;

use crate::board::Board;
use crate::error::Result;
use crate::filter::DumbMoveFilter;
use crate::hash::StoneKeys;
use crate::search::{Dfpn, DfpnCache, NoCache, SolveResult, Tsumego};

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// MID calls before giving up with `SolveStatus::Unknown`
    pub max_nodes: u64,
    /// Share results between transpositions through a [`DfpnCache`]
    pub use_cache: bool,
    /// Skip moves flagged by the [`DumbMoveFilter`]
    pub use_filter: bool,
    /// Seed of the stone key table
    pub key_seed: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: 1_000_000,
            use_cache: true,
            use_filter: true,
            key_seed: StoneKeys::DEFAULT_SEED,
        }
    }
}

/// Reusable solver. Each [`Solver::solve`] call starts a fresh cache
/// session; the cache of the last solve stays readable until the next one.
pub struct Solver {
    config: SolverConfig,
    keys: Arc<StoneKeys>,
    filter: Arc<DumbMoveFilter>,
    cache: DfpnCache,
}

impl Solver {
    /// Create a solver with default settings.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        let keys = if config.key_seed == StoneKeys::DEFAULT_SEED {
            StoneKeys::shared()
        } else {
            Arc::new(StoneKeys::with_seed(config.key_seed))
        };
        Self {
            config,
            keys,
            filter: DumbMoveFilter::shared(),
            cache: DfpnCache::new(),
        }
    }

    /// Replace the dumb-move patterns.
    pub fn with_filter(mut self, filter: DumbMoveFilter) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[inline]
    pub fn keys(&self) -> &Arc<StoneKeys> {
        &self.keys
    }

    /// Cache left by the last solve
    #[inline]
    pub fn cache(&self) -> &DfpnCache {
        &self.cache
    }

    /// Empty board hashed with this solver's keys.
    pub fn board(&self, size: usize) -> Result<Board> {
        Ok(Board::with_keys(size, Arc::clone(&self.keys))?)
    }

    /// Solve `problem` from scratch.
    pub fn solve(&mut self, problem: &Tsumego) -> Result<SolveResult> {
        let rekeyed;
        let problem = if Arc::ptr_eq(problem.board.keys(), &self.keys) {
            problem
        } else {
            log::debug!("solver: rehashing board with seed {:#x}", self.keys.seed());
            let mut copy = problem.clone();
            copy.board.rekey(Arc::clone(&self.keys));
            rekeyed = copy;
            &rekeyed
        };

        self.cache.clear();
        let filter = self.config.use_filter.then_some(&*self.filter);
        let max_nodes = self.config.max_nodes;

        let result = if self.config.use_cache {
            Dfpn::new(problem, &mut self.cache, filter, max_nodes).run()?
        } else {
            Dfpn::new(problem, &mut NoCache::default(), filter, max_nodes).run()?
        };

        log::info!(
            "solved: {:?}, best {:?}, {} nodes, {}ms",
            result.status,
            result.best_move,
            result.nodes,
            result.time_ms
        );
        Ok(result)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
