mod ascii_table;

pub use self::ascii_table::AsciiTable;
use minimax::TicTacToeSolver;
use tic_tac_toe::Team;
use tracing::info;

/// Describe a value from X's point of view.
pub fn describe_value(value: i8) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

/// Describe the outcome of a terminal board.
pub fn describe_winner(winner: Option<Team>) -> &'static str {
    match winner {
        Some(Team::X) => "X wins",
        Some(Team::O) => "O wins",
        None => "draw",
    }
}

/// Log cache stats, then clear the cache if asked to.
pub fn finish_game(solver: &mut TicTacToeSolver, clear_cache: bool) {
    let stats = solver.cache_stats();
    info!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        "action value cache stats"
    );

    if clear_cache {
        solver.clear_cache();
    }
}
