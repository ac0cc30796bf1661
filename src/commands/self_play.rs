use crate::{
    config::Config,
    util::{
        describe_winner,
        finish_game,
    },
};
use anyhow::Context;
use minimax::TicTacToeSolver;
use tic_tac_toe::{
    Action,
    Board,
    Team,
};
use tracing::info;

#[derive(Debug, Copy, Clone, argh::FromArgs)]
#[argh(
    subcommand,
    name = "self-play",
    description = "play a game out with both sides moving optimally"
)]
pub struct Options {
    #[argh(option, description = "the board to start from, defaults to an empty board")]
    pub board: Option<Board>,
}

pub fn exec(solver: &mut TicTacToeSolver, config: &Config, options: Options) -> anyhow::Result<()> {
    let board = options.board.unwrap_or_default();
    println!("{board}");
    println!();

    let moves = solver.play_out(&board).context("failed to play out game")?;
    let mut last = board;
    for (team, action, board) in with_movers(board, moves) {
        info!(board_id = board.encode_u16(), %team, %action, "played move");

        println!("{team} plays {action}");
        println!("{board}");
        println!();

        last = board;
    }

    match last.get_winner_info() {
        Some(info) => println!(
            "{} wins with a {:?} line on tiles {:?}",
            info.team, info.win_type, info.tile_indexes
        ),
        None => println!("{}", describe_winner(last.get_winner())),
    }

    finish_game(solver, config.clear_cache_between_games());

    Ok(())
}

/// Pair each move with the team that made it.
///
/// The mover is whoever was to move on the board before the action.
fn with_movers(start: Board, moves: Vec<(Action, Board)>) -> Vec<(Team, Action, Board)> {
    let mut before = start;
    moves
        .into_iter()
        .map(|(action, board)| {
            let team = before.get_turn();
            before = board;
            (team, action, board)
        })
        .collect()
}
