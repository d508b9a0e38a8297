//! Depth-first proof-number search for life-and-death problems
//!
//! The attacker tries to capture one target stone; the defender tries to
//! keep it. Every node reads and writes its proof / disproof numbers
//! through a [`ProofTable`], so transpositions share work when the table
//! is a [`DfpnCache`](super::DfpnCache).
//!
//! # Example
//!
//! ```
//! use tsumego::board::{Board, Pos, Stone};
//! use tsumego::filter::DumbMoveFilter;
//! use tsumego::search::{Dfpn, DfpnCache, SolveStatus, Tsumego};
//!
//! // lone white stone in the corner, black to capture
//! let mut board = Board::new(5).unwrap();
//! board.place_stone(Pos::new(0, 0), Stone::White).unwrap();
//! board.place_stone(Pos::new(0, 1), Stone::Black).unwrap();
//!
//! let problem = Tsumego::new(board, Pos::new(0, 0), [Pos::new(1, 0)], Stone::Black).unwrap();
//! let mut cache = DfpnCache::new();
//! let filter = DumbMoveFilter::new();
//! let result = Dfpn::new(&problem, &mut cache, Some(&filter), 1_000).run().unwrap();
//!
//! assert_eq!(result.status, SolveStatus::Proven);
//! assert_eq!(result.best_move, Some(Pos::new(1, 0)));
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::error::{BoardError, ProblemError};
use crate::filter::{neighborhood, DumbMoveFilter};
use crate::hash::Fingerprint;
use crate::table::IntMap;

use super::cache::{CacheStats, DfpnEntry, ProofTable};

const INF: u32 = DfpnEntry::INFINITY;

/// Memo key of a neighborhood code. Codes use the low 18 bits only and
/// `IntMap` picks its shard from the top 4, so spread them with an odd
/// (hence bijective) multiplier first.
#[inline]
fn memo_key(code: u32) -> u32 {
    code.wrapping_mul(0x9E37_79B9)
}

/// Life-and-death problem: capture `target` by playing inside `region`.
#[derive(Debug, Clone)]
pub struct Tsumego {
    pub board: Board,
    /// A defender stone; the attacker wins once it leaves the board
    pub target: Pos,
    /// Points either side may play on
    pub region: Vec<Pos>,
    /// Side to move at the root
    pub attacker: Stone,
}

impl Tsumego {
    pub fn new(
        board: Board,
        target: Pos,
        region: impl IntoIterator<Item = Pos>,
        attacker: Stone,
    ) -> Result<Self, ProblemError> {
        if attacker == Stone::Empty {
            return Err(ProblemError::NoAttacker);
        }
        if !board.contains(target) || board.get(target) != attacker.opponent() {
            return Err(ProblemError::Target(target));
        }

        let mut region: Vec<Pos> = region.into_iter().collect();
        if let Some(&p) = region.iter().find(|&&p| !board.contains(p)) {
            return Err(ProblemError::Region(p));
        }
        region.sort_unstable();
        region.dedup();
        if region.is_empty() {
            return Err(ProblemError::EmptyRegion);
        }

        Ok(Self {
            board,
            target,
            region,
            attacker,
        })
    }

    #[inline]
    pub fn defender(&self) -> Stone {
        self.attacker.opponent()
    }
}

/// Outcome of a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The attacker captures the target against any defence
    Proven,
    /// The defender keeps the target against any attack
    Disproven,
    /// Node budget ran out first
    Unknown,
}

/// Search result with statistics.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    /// First attacker move of a shortest proof; `None` unless proven
    pub best_move: Option<Pos>,
    /// Moves (passes included) to the proven outcome
    pub moves: u32,
    /// MID calls made
    pub nodes: u64,
    pub cache: CacheStats,
    /// Wall time in milliseconds
    pub time_ms: u64,
}

/// Child of a node: `None` is a pass.
#[derive(Debug, Clone, Copy)]
struct Child {
    mv: Option<Pos>,
    fp: Fingerprint,
}

/// One df-pn search over a copy of the problem board.
pub struct Dfpn<'a, T: ProofTable + ?Sized> {
    board: Board,
    target: Pos,
    region: Vec<Pos>,
    attacker: Stone,
    table: &'a mut T,
    filter: Option<&'a DumbMoveFilter>,
    /// Filter verdicts by neighborhood code
    dumb: IntMap<bool>,
    /// Positions (and side to move) from the root to the current node
    path: Vec<(Fingerprint, Stone)>,
    /// Root children and their last known entries
    root: Vec<(Option<Pos>, DfpnEntry)>,
    nodes: u64,
    max_nodes: u64,
}

impl<'a, T: ProofTable + ?Sized> Dfpn<'a, T> {
    /// Search `problem`, storing results in `table`. With no filter every
    /// legal region move is tried.
    pub fn new(
        problem: &Tsumego,
        table: &'a mut T,
        filter: Option<&'a DumbMoveFilter>,
        max_nodes: u64,
    ) -> Self {
        Self {
            board: problem.board.clone(),
            target: problem.target,
            region: problem.region.clone(),
            attacker: problem.attacker,
            table,
            filter,
            dumb: IntMap::new(),
            path: Vec::new(),
            root: Vec::new(),
            nodes: 0,
            max_nodes,
        }
    }

    /// Run to a proof, a disproof or the node limit.
    pub fn run(mut self) -> Result<SolveResult, BoardError> {
        let start = Instant::now();
        log::debug!(
            "df-pn: {} region points, attacker {:?}, limit {} nodes",
            self.region.len(),
            self.attacker,
            self.max_nodes
        );

        let entry = self.mid(self.attacker, INF, INF)?;

        let status = if entry.is_proven() {
            SolveStatus::Proven
        } else if entry.is_disproven() {
            SolveStatus::Disproven
        } else {
            log::warn!("df-pn: node limit {} reached", self.max_nodes);
            SolveStatus::Unknown
        };

        // winning replies leave the defender lost: child pn == 0
        let best_move = match status {
            SolveStatus::Proven => self
                .root
                .iter()
                .filter(|(_, e)| e.is_proven())
                .min_by_key(|(_, e)| e.md)
                .and_then(|&(mv, _)| mv),
            _ => None,
        };

        let cache = self.table.stats();
        log::debug!(
            "df-pn: {:?} in {} nodes, best {:?}, {} moves, cache {}/{} hits",
            status,
            self.nodes,
            best_move,
            entry.md,
            cache.hits,
            cache.lookups
        );

        Ok(SolveResult {
            status,
            best_move,
            moves: if status == SolveStatus::Unknown { 0 } else { entry.md },
            nodes: self.nodes,
            cache,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// (phi, delta) of an entry for the side to move.
    #[inline]
    fn relative(&self, entry: DfpnEntry, to_move: Stone) -> (u32, u32) {
        if to_move == self.attacker {
            (entry.pn, entry.dn)
        } else {
            (entry.dn, entry.pn)
        }
    }

    #[inline]
    fn absolute(&self, phi: u32, delta: u32, md: u32, to_move: Stone) -> DfpnEntry {
        if to_move == self.attacker {
            DfpnEntry::new(phi, delta, md)
        } else {
            DfpnEntry::new(delta, phi, md)
        }
    }

    /// Expand the current node until its phi reaches `th_phi` or its delta
    /// reaches `th_delta`.
    fn mid(&mut self, to_move: Stone, th_phi: u32, th_delta: u32) -> Result<DfpnEntry, BoardError> {
        self.nodes += 1;
        let fp = self.board.fingerprint();

        if self.board.get(self.target) != self.attacker.opponent() {
            let entry = DfpnEntry::proven(0);
            self.table.set(fp, to_move, entry);
            return Ok(entry);
        }

        self.path.push((fp, to_move));
        let children = self.expand(to_move)?;
        let next = to_move.opponent();

        if children.is_empty() {
            self.path.pop();
            // nothing to play: the side to move loses
            let entry = self.absolute(INF, 0, 0, to_move);
            self.table.set(fp, to_move, entry);
            return Ok(entry);
        }

        let mut values = vec![DfpnEntry::UNKNOWN; children.len()];
        let (phi, delta) = loop {
            for (value, child) in values.iter_mut().zip(&children) {
                *value = self.table.get(child.fp, next, *value);
            }

            let mut phi = INF;
            let mut delta = 0u32;
            let mut best = 0;
            let mut best_delta = INF;
            let mut second_delta = INF;
            for (i, &value) in values.iter().enumerate() {
                let (phi_c, delta_c) = self.relative(value, next);
                phi = phi.min(delta_c);
                delta = delta.saturating_add(phi_c).min(INF);
                if delta_c < best_delta {
                    second_delta = best_delta;
                    best_delta = delta_c;
                    best = i;
                } else if delta_c < second_delta {
                    second_delta = delta_c;
                }
            }

            if phi >= th_phi || delta >= th_delta || self.nodes >= self.max_nodes {
                break (phi, delta);
            }

            let (phi_best, _) = self.relative(values[best], next);
            let child_th_phi = th_delta
                .saturating_sub(delta)
                .saturating_add(phi_best)
                .min(INF);
            let child_th_delta = th_phi.min(second_delta.saturating_add(1));

            let child = children[best];
            log::trace!(
                "df-pn: {:?} {:?} at depth {} (phi {}, delta {})",
                to_move,
                child.mv,
                self.path.len(),
                phi,
                delta
            );
            let record = match child.mv {
                Some(pos) => Some(self.board.play(pos, to_move)?),
                None => None,
            };
            let result = self.mid(next, child_th_phi, child_th_delta);
            if let Some(record) = &record {
                self.board.undo(record);
            }
            values[best] = result?;
        };

        let md = if phi == 0 {
            values
                .iter()
                .filter(|&&v| self.relative(v, next).1 == 0)
                .map(|v| v.md)
                .min()
                .map_or(0, |m| m + 1)
        } else if delta == 0 {
            values.iter().map(|v| v.md).max().map_or(0, |m| m + 1)
        } else {
            0
        };

        self.path.pop();
        if self.path.is_empty() {
            self.root = children.iter().map(|c| c.mv).zip(values).collect();
        }

        let entry = self.absolute(phi, delta, md, to_move);
        self.table.set(fp, to_move, entry);
        Ok(entry)
    }

    /// Legal, non-dumb region moves for `to_move` that do not repeat a
    /// position on the current path; the defender may also pass.
    fn expand(&mut self, to_move: Stone) -> Result<Vec<Child>, BoardError> {
        let next = to_move.opponent();
        let mut children = Vec::with_capacity(self.region.len() + 1);

        for i in 0..self.region.len() {
            let pos = self.region[i];
            if !self.board.is_empty(pos) || self.is_dumb(pos, to_move) {
                continue;
            }
            let record = match self.board.play(pos, to_move) {
                Ok(record) => record,
                Err(BoardError::Suicide(_)) => continue,
                Err(e) => return Err(e),
            };
            let fp = self.board.fingerprint();
            self.board.undo(&record);

            if !self.on_path(fp, next) {
                children.push(Child { mv: Some(pos), fp });
            }
        }

        if to_move != self.attacker {
            let fp = self.board.fingerprint();
            if !self.on_path(fp, next) {
                children.push(Child { mv: None, fp });
            }
        }

        Ok(children)
    }

    #[inline]
    fn on_path(&self, fp: Fingerprint, to_move: Stone) -> bool {
        self.path.contains(&(fp, to_move))
    }

    fn is_dumb(&mut self, pos: Pos, color: Stone) -> bool {
        let Some(filter) = self.filter else {
            return false;
        };
        let code = neighborhood(&self.board, i32::from(pos.row), i32::from(pos.col), color);
        self.dumb
            .get_or_insert_with(memo_key(code), || filter.is_dumb_code(code))
    }
}
