//! Memoized minimax search over an abstract [`RuleSet`].

mod cache;
mod solver;

/// Built-in tic-tac-toe support
///
pub mod tic_tac_toe;

pub use self::{
    cache::{
        ActionValueCache,
        CacheKey,
        CacheStats,
    },
    solver::Solver,
    tic_tac_toe::{
        TicTacToeRuleSet,
        TicTacToeSolver,
    },
};
use std::{
    fmt::Debug,
    hash::Hash,
};

/// Library Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The state is terminal, so there is nothing to choose from.
    #[error("no legal actions")]
    NoLegalActions,

    /// The [`RuleSet`] rejected an action.
    #[error("invalid action")]
    InvalidAction(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// An abstract set of rules for a two-team, zero-sum game.
///
/// Scores are from the maximizer's point of view.
pub trait RuleSet {
    /// The game state
    ///
    type State: Debug + Eq + Hash + Clone;

    /// A move that can be played on a [`Self::State`].
    ///
    type Action: Debug + Eq + Hash + Clone;

    /// The game teams
    ///
    type Team: Debug + Eq + Hash + Clone;

    /// The error returned when an action cannot be played.
    ///
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the starting state.
    ///
    fn get_start_state() -> Self::State;

    /// Get the team whos turn it is for a [`Self::State`].
    ///
    fn get_team(state: &Self::State) -> Self::Team;

    /// Get the team that moves after the given team.
    ///
    fn get_opponent(team: &Self::Team) -> Self::Team;

    /// Get the legal actions for a [`Self::State`].
    ///
    /// The order of this list decides ties, so it should be stable.
    fn get_actions(state: &Self::State) -> Vec<Self::Action>;

    /// Get the state after `team` plays `action`.
    ///
    fn apply_action(
        state: &Self::State,
        action: &Self::Action,
        team: &Self::Team,
    ) -> Result<Self::State, Self::Error>;

    /// Check if the game is over.
    ///
    fn is_terminal(state: &Self::State) -> bool;

    /// Score a terminal state.
    ///
    fn score_terminal(state: &Self::State) -> i8;

    /// Check if the team wants high scores.
    ///
    fn is_maximizer(team: &Self::Team) -> bool;
}
