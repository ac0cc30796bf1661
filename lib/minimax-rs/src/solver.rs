use crate::{
    ActionValueCache,
    CacheStats,
    Error,
    RuleSet,
};
use tracing::{
    debug,
    trace,
};

/// A memoized minimax solver.
///
/// The solver owns its cache, so independent solvers never share results.
/// Values are always from the maximizer's perspective.
pub struct Solver<R>
where
    R: RuleSet,
{
    cache: ActionValueCache<R>,
}

impl<R> Solver<R>
where
    R: RuleSet,
{
    /// Make a new [`Solver`] with an empty cache.
    ///
    pub fn new() -> Self {
        Self {
            cache: ActionValueCache::new(),
        }
    }

    /// Make a new [`Solver`] with room for `capacity` cache entries.
    ///
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: ActionValueCache::with_capacity(capacity),
        }
    }

    /// Get the value of `team` playing `action` on `state`, assuming optimal play afterwards.
    ///
    /// # Errors
    /// Returns an error if the action cannot be played on the state.
    pub fn action_value(
        &mut self,
        state: &R::State,
        action: &R::Action,
        team: &R::Team,
    ) -> Result<i8, Error> {
        let key = (state.clone(), action.clone(), team.clone());
        if let Some(value) = self.cache.get(&key) {
            return Ok(value);
        }

        let outcome =
            R::apply_action(state, action, team).map_err(|e| Error::InvalidAction(Box::new(e)))?;

        let value = if R::is_terminal(&outcome) {
            R::score_terminal(&outcome)
        } else {
            // The opponent moves next.
            // If we maximize, they minimize, and vice-versa.
            let opponent = R::get_opponent(team);
            let minimize = R::is_maximizer(team);

            let mut best = None;
            for next_action in R::get_actions(&outcome) {
                let value = self.action_value(&outcome, &next_action, &opponent)?;
                best = Some(match best {
                    None => value,
                    Some(best) if minimize => std::cmp::min(best, value),
                    Some(best) => std::cmp::max(best, value),
                });
            }

            best.ok_or(Error::NoLegalActions)?
        };

        self.cache.insert(key, value);

        Ok(value)
    }

    /// Score every legal action for the team whos turn it is.
    ///
    /// Actions are in the order the [`RuleSet`] lists them.
    pub fn scored_actions(&mut self, state: &R::State) -> Result<Vec<(R::Action, i8)>, Error> {
        let team = R::get_team(state);

        R::get_actions(state)
            .into_iter()
            .map(|action| {
                let value = self.action_value(state, &action, &team)?;
                trace!(?action, value, "scored action");
                Ok((action, value))
            })
            .collect()
    }

    /// Get the best action and its value for the team whos turn it is.
    ///
    /// Ties go to the action listed first by the [`RuleSet`].
    ///
    /// # Errors
    /// Returns an error if the state is terminal.
    pub fn best_action(&mut self, state: &R::State) -> Result<(R::Action, i8), Error> {
        if R::is_terminal(state) {
            return Err(Error::NoLegalActions);
        }

        let team = R::get_team(state);
        let maximize = R::is_maximizer(&team);

        let mut best: Option<(R::Action, i8)> = None;
        for (action, value) in self.scored_actions(state)? {
            let is_better = match &best {
                None => true,
                Some((_, best_value)) if maximize => value > *best_value,
                Some((_, best_value)) => value < *best_value,
            };

            if is_better {
                best = Some((action, value));
            }
        }

        let (action, value) = best.ok_or(Error::NoLegalActions)?;
        debug!(?team, ?action, value, cache_entries = self.cache.len(), "chose action");

        Ok((action, value))
    }

    /// Get the optimal action for the team whos turn it is.
    ///
    /// # Errors
    /// Returns an error if the state is terminal.
    pub fn minimax(&mut self, state: &R::State) -> Result<R::Action, Error> {
        self.best_action(state).map(|(action, _value)| action)
    }

    /// Play the game out from `state`, with both teams using [`Self::minimax`].
    ///
    /// # Returns
    /// Returns each action played, paired with the state it produced.
    /// This is empty if `state` is terminal.
    pub fn play_out(&mut self, state: &R::State) -> Result<Vec<(R::Action, R::State)>, Error> {
        let mut moves = Vec::new();
        let mut state = state.clone();

        while !R::is_terminal(&state) {
            let team = R::get_team(&state);
            let action = self.minimax(&state)?;
            state = R::apply_action(&state, &action, &team)
                .map_err(|e| Error::InvalidAction(Box::new(e)))?;
            moves.push((action, state.clone()));
        }

        Ok(moves)
    }

    /// Forget every cached value.
    ///
    pub fn clear_cache(&mut self) {
        debug!(entries = self.cache.len(), "clearing action value cache");
        self.cache.clear();
    }

    /// Get cache usage stats.
    ///
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Get the cache.
    ///
    pub fn cache(&self) -> &ActionValueCache<R> {
        &self.cache
    }
}

impl<R> Default for Solver<R>
where
    R: RuleSet,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for Solver<R>
where
    R: RuleSet,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver").field("cache", &self.cache).finish()
    }
}
