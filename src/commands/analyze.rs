use crate::{
    config::Config,
    util::{
        describe_value,
        finish_game,
        AsciiTable,
    },
};
use anyhow::Context;
use minimax::TicTacToeSolver;
use tic_tac_toe::Board;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "analyze",
    description = "print the value of every legal move for each board"
)]
pub struct Options {
    #[argh(positional, description = "the boards to analyze")]
    pub boards: Vec<Board>,
}

pub fn exec(solver: &mut TicTacToeSolver, config: &Config, options: Options) -> anyhow::Result<()> {
    for board in options.boards {
        println!("{board}");

        if board.is_terminal() {
            println!("game over, {}", describe_value(board.utility()));
            println!();
            continue;
        }

        let scored = solver
            .scored_actions(&board)
            .with_context(|| format!("failed to score\n{board}"))?;

        let mut table = AsciiTable::new(3, scored.len() + 1);
        table.set_cell(0, 0, "Action");
        table.set_cell(1, 0, "Value");
        table.set_cell(2, 0, "Outcome");
        for (i, (action, value)) in scored.iter().enumerate() {
            table.set_cell(0, i + 1, action.to_string());
            table.set_cell(1, i + 1, value.to_string());
            table.set_cell(2, i + 1, describe_value(*value));
        }

        println!("{} to move", board.get_turn());
        println!("{table}");

        finish_game(solver, config.clear_cache_between_games());
    }

    Ok(())
}
