use crate::{
    Error,
    RuleSet,
    Solver,
};
use ::tic_tac_toe::{
    Action,
    Board,
    Team,
};

/// A [`Solver`] for Tic-Tac-Toe
pub type TicTacToeSolver = Solver<TicTacToeRuleSet>;

/// Tic-Tac-Toe RuleSet
///
/// X maximizes, O minimizes.
#[derive(Debug, Copy, Clone)]
pub struct TicTacToeRuleSet;

impl RuleSet for TicTacToeRuleSet {
    type State = Board;
    type Action = Action;
    type Team = Team;
    type Error = ::tic_tac_toe::Error;

    fn get_start_state() -> Self::State {
        ::tic_tac_toe::initial_state()
    }

    fn get_team(state: &Self::State) -> Self::Team {
        state.get_turn()
    }

    fn get_opponent(team: &Self::Team) -> Self::Team {
        team.inverse()
    }

    fn get_actions(state: &Self::State) -> Vec<Self::Action> {
        state.actions()
    }

    fn apply_action(
        state: &Self::State,
        action: &Self::Action,
        team: &Self::Team,
    ) -> Result<Self::State, Self::Error> {
        state.result_with_player(*action, *team)
    }

    fn is_terminal(state: &Self::State) -> bool {
        state.is_terminal()
    }

    fn score_terminal(state: &Self::State) -> i8 {
        state.utility()
    }

    fn is_maximizer(team: &Self::Team) -> bool {
        *team == Team::X
    }
}

/// Get the optimal action for the team whos turn it is.
///
/// This uses a fresh [`TicTacToeSolver`] each call.
/// Hold onto a solver to reuse its cache.
pub fn minimax(board: &Board) -> Result<Action, Error> {
    TicTacToeSolver::new().minimax(board)
}
