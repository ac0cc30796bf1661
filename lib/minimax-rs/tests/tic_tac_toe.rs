use minimax::{
    CacheStats,
    Error,
    RuleSet,
    TicTacToeRuleSet,
    TicTacToeSolver,
};
use tic_tac_toe::{
    Action,
    Board,
    Team,
};

fn action(row: u8, col: u8) -> Action {
    Action::new(row, col).expect("invalid action")
}

fn board(s: &str) -> Board {
    s.parse().expect("invalid board")
}

/// Plain minimax, without a cache.
fn naive_value(board: Board) -> i8 {
    if board.is_terminal() {
        return board.utility();
    }

    let values = board
        .actions()
        .into_iter()
        .map(|action| naive_value(board.result(action).expect("illegal action")));

    let value = match board.get_turn() {
        Team::X => values.max(),
        Team::O => values.min(),
    };
    value.expect("non-terminal board without actions")
}

/// Collect every non-terminal board reachable from the start.
fn reachable_boards() -> Vec<Board> {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if board.is_terminal() || !seen.insert(board) {
            continue;
        }

        for action in board.actions() {
            stack.push(board.result(action).expect("illegal action"));
        }
    }

    let mut boards: Vec<_> = seen.into_iter().collect();
    boards.sort_by_key(|board| board.encode_u16());
    boards
}

#[test]
fn self_play_draws() {
    let mut solver = TicTacToeSolver::new();
    let moves = solver
        .play_out(&TicTacToeRuleSet::get_start_state())
        .expect("failed to play out");

    let (_, last) = moves.last().expect("no moves were played");
    assert!(last.is_terminal());
    assert_eq!(last.get_winner(), None);
    assert_eq!(last.utility(), 0);
    assert_eq!(moves.len(), 9);
}

#[test]
fn play_out_of_terminal_board_is_empty() {
    let mut solver = TicTacToeSolver::new();
    let moves = solver
        .play_out(&board("XXX/OO./..."))
        .expect("failed to play out");
    assert!(moves.is_empty());
}

#[test]
fn x_completes_row() {
    // Two each, so X is to move and takes the row.
    let mut solver = TicTacToeSolver::new();
    let board = board("XX./OO./...");
    assert_eq!(board.get_turn(), Team::X);
    assert_eq!(
        solver.best_action(&board).expect("no action"),
        (action(0, 2), 1)
    );
}

#[test]
fn o_blocks_row() {
    let mut solver = TicTacToeSolver::new();
    let board = board("XX./.O./...");
    assert_eq!(board.get_turn(), Team::O);

    let scored = solver.scored_actions(&board).expect("failed to score");
    for (action, value) in scored.iter() {
        if *action == self::action(0, 2) {
            assert_eq!(*value, 0, "blocking should hold the draw");
        } else {
            assert_eq!(*value, 1, "{action} should lose");
        }
    }

    assert_eq!(solver.minimax(&board).expect("no action"), action(0, 2));
}

#[test]
fn chosen_value_is_extreme() {
    let mut solver = TicTacToeSolver::new();
    for board in reachable_boards() {
        let scored = solver.scored_actions(&board).expect("failed to score");
        let (chosen, chosen_value) = solver.best_action(&board).expect("no action");

        let values = scored.iter().map(|(_, value)| *value);
        let extreme = match board.get_turn() {
            Team::X => values.max(),
            Team::O => values.min(),
        }
        .expect("no actions");
        assert_eq!(chosen_value, extreme);

        // Ties go to the first action in row-major order.
        let first = scored
            .iter()
            .find(|(_, value)| *value == extreme)
            .map(|(action, _)| *action);
        assert_eq!(Some(chosen), first);
    }
}

#[test]
fn memoized_matches_naive() {
    let mut solver = TicTacToeSolver::new();
    for board in reachable_boards().into_iter().filter(|b| b.num_empty() <= 6) {
        let (_, value) = solver.best_action(&board).expect("no action");
        assert_eq!(value, naive_value(board), "mismatch on\n{board}");
    }
}

#[test]
fn clearing_cache_is_transparent() {
    let boards = reachable_boards();
    let mut solver = TicTacToeSolver::new();

    let before: Vec<_> = boards
        .iter()
        .map(|board| solver.scored_actions(board).expect("failed to score"))
        .collect();

    let stats = solver.cache_stats();
    assert!(stats.entries > 0);
    assert!(stats.hits > 0);

    solver.clear_cache();
    assert_eq!(solver.cache_stats(), CacheStats::default());

    // Walk in reverse so the cache fills in a different order.
    for (board, expected) in boards.iter().zip(before.iter()).rev() {
        let after = solver.scored_actions(board).expect("failed to score");
        assert_eq!(&after, expected);
    }

    let mut fresh = TicTacToeSolver::with_capacity(1024);
    for (board, expected) in boards.iter().zip(before.iter()).step_by(97) {
        assert_eq!(&fresh.scored_actions(board).expect("failed to score"), expected);
    }
}

#[test]
fn repeated_queries_hit_cache() {
    let mut solver = TicTacToeSolver::new();
    let board = Board::new();
    let team = board.get_turn();

    let first = solver
        .action_value(&board, &action(1, 1), &team)
        .expect("invalid action");
    let entries = solver.cache_stats().entries;
    let hits = solver.cache_stats().hits;

    let second = solver
        .action_value(&board, &action(1, 1), &team)
        .expect("invalid action");
    assert_eq!(first, second);
    assert_eq!(solver.cache_stats().entries, entries);
    assert_eq!(solver.cache_stats().hits, hits + 1);
}

#[test]
fn minimax_on_terminal_board_fails() {
    let mut solver = TicTacToeSolver::new();
    assert!(matches!(
        solver.minimax(&board("XOX/OXO/X..")),
        Err(Error::NoLegalActions)
    ));
    assert!(matches!(
        solver.best_action(&board("XOX/XOO/OXX")),
        Err(Error::NoLegalActions)
    ));
}

#[test]
fn every_legal_value_is_bounded() {
    let mut solver = TicTacToeSolver::new();
    for board in reachable_boards() {
        for (_, value) in solver.scored_actions(&board).expect("failed to score") {
            assert!((-1..=1).contains(&value));
        }
    }
}
