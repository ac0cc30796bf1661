//! Tic-Tac-Toe rules over an immutable 3x3 board.
//!
//! The free functions mirror the [`Board`] methods of the same meaning.

mod action;
mod board;
mod error;
mod team;

pub use self::{
    action::{
        Action,
        BOARD_WIDTH,
    },
    board::{
        Board,
        WinType,
        WinnerInfo,
    },
    error::Error,
    team::{
        InvalidCharError,
        InvalidStrError,
        Team,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// A tile. `None` is empty.
pub type Cell = Option<Team>;

/// Get the starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Get the team whos turn it is.
pub fn player(board: &Board) -> Team {
    board.get_turn()
}

/// Get every legal action on the board, in row-major order.
pub fn actions(board: &Board) -> Vec<Action> {
    board.actions()
}

/// Get the board after the team whos turn it is plays the action.
///
/// # Errors
/// Returns an error if the tile is already taken.
pub fn result(board: &Board, action: Action) -> Result<Board, Error> {
    board.result(action)
}

/// Get the board after the given team plays the action.
///
/// # Errors
/// Returns an error if the tile is already taken.
pub fn result_with_player(board: &Board, action: Action, team: Team) -> Result<Board, Error> {
    board.result_with_player(action, team)
}

/// Get the winner, if there is one.
pub fn winner(board: &Board) -> Option<Team> {
    board.get_winner()
}

/// Get the winning line, if there is one.
pub fn winner_info(board: &Board) -> Option<WinnerInfo> {
    board.get_winner_info()
}

/// Returns true if the game is over.
pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Score a terminal board from X's perspective.
pub fn utility(board: &Board) -> i8 {
    board.utility()
}
