use crate::{
    config::Config,
    util::{
        describe_value,
        finish_game,
    },
};
use anyhow::Context;
use minimax::TicTacToeSolver;
use tic_tac_toe::Board;
use tracing::info;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "best-move",
    description = "print the optimal move for each board"
)]
pub struct Options {
    #[argh(
        positional,
        description = "boards like `XO./.X./...`, rows may be split with `/` or `|`"
    )]
    pub boards: Vec<Board>,
}

pub fn exec(solver: &mut TicTacToeSolver, config: &Config, options: Options) -> anyhow::Result<()> {
    for board in options.boards {
        let team = board.get_turn();
        let (action, value) = solver
            .best_action(&board)
            .with_context(|| format!("failed to find a move for\n{board}"))?;
        info!(board_id = board.encode_u16(), %team, %action, value, "found best move");

        println!("{board}");
        println!("{team} plays {action}, {}", describe_value(value));
        println!();

        finish_game(solver, config.clear_cache_between_games());
    }

    Ok(())
}
