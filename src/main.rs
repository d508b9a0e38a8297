//! Tsumego solver demo
//!
//! Solves the straight-three corner problem with and without the
//! proof-number cache. Set `RUST_LOG=debug` for search details.

use tsumego::{Pos, Solver, SolverConfig, Stone, Tsumego};

fn corner_problem(solver: &Solver) -> tsumego::Result<Tsumego> {
    let mut board = solver.board(9)?;
    for (r, c) in [(0, 3), (1, 0), (1, 1), (1, 2), (1, 3)] {
        board.place_stone(Pos::new(r, c), Stone::White)?;
    }
    for (r, c) in [(0, 4), (1, 4), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4)] {
        board.place_stone(Pos::new(r, c), Stone::Black)?;
    }
    let region = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)];
    Ok(Tsumego::new(board, Pos::new(1, 1), region, Stone::Black)?)
}

fn main() -> tsumego::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for use_cache in [true, false] {
        let mut solver = Solver::with_config(SolverConfig {
            use_cache,
            ..SolverConfig::default()
        });
        let problem = corner_problem(&solver)?;
        let result = solver.solve(&problem)?;

        println!(
            "cache {:>3}: {:?}, best move {:?}, {} moves, {} nodes, {:.1}% cache hits, {}ms",
            if use_cache { "on" } else { "off" },
            result.status,
            result.best_move,
            result.moves,
            result.nodes,
            result.cache.hit_rate(),
            result.time_ms
        );
    }
    Ok(())
}
