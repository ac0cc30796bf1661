use crate::{
    Action,
    Cell,
    Error,
    Team,
    NUM_TILES,
};

// Allow unusual_byte_groupings as we group by 3 to visualize the board.
// Bit `i` is tile `i`, so the top row is the lowest group.
// Vertical Wins
#[allow(clippy::unusual_byte_groupings)]
const VERTICAL_WIN_1: u16 = 0b001_001_001;
#[allow(clippy::unusual_byte_groupings)]
const VERTICAL_WIN_2: u16 = 0b010_010_010;
#[allow(clippy::unusual_byte_groupings)]
const VERTICAL_WIN_3: u16 = 0b100_100_100;

// Horizontal Wins
#[allow(clippy::unusual_byte_groupings)]
const HORIZONTAL_WIN_1: u16 = 0b000_000_111;
#[allow(clippy::unusual_byte_groupings)]
const HORIZONTAL_WIN_2: u16 = 0b000_111_000;
#[allow(clippy::unusual_byte_groupings)]
const HORIZONTAL_WIN_3: u16 = 0b111_000_000;

// Diagonal win
#[allow(clippy::unusual_byte_groupings)]
const DIAGONAL_WIN: u16 = 0b100_010_001;

// Anti-Diagonal win
#[allow(clippy::unusual_byte_groupings)]
const ANTI_DIAGONAL_WIN: u16 = 0b001_010_100;

/// Every line, in the order they are reported by [`Board::get_winner_info`].
const WIN_LINES: [(u16, [u8; 3], WinType); 8] = [
    (HORIZONTAL_WIN_1, [0, 1, 2], WinType::Horizontal),
    (HORIZONTAL_WIN_2, [3, 4, 5], WinType::Horizontal),
    (HORIZONTAL_WIN_3, [6, 7, 8], WinType::Horizontal),
    (VERTICAL_WIN_1, [0, 3, 6], WinType::Vertical),
    (VERTICAL_WIN_2, [1, 4, 7], WinType::Vertical),
    (VERTICAL_WIN_3, [2, 5, 8], WinType::Vertical),
    (DIAGONAL_WIN, [0, 4, 8], WinType::Diagonal),
    (ANTI_DIAGONAL_WIN, [2, 4, 6], WinType::AntiDiagonal),
];

/// 3 ^ 9, the # of encodable boards
const NUM_ENCODED_STATES: u16 = 19_683;

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning team
    pub team: Team,

    /// The tile_indexes that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

impl WinnerInfo {
    /// Get the least tile index
    pub fn start_tile_index(&self) -> u8 {
        self.tile_indexes[0]
    }

    /// Get the highest tile index
    pub fn end_tile_index(&self) -> u8 {
        self.tile_indexes[2]
    }
}

/// A Tic Tac Toe board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboard
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    x_state: u16,
    o_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            x_state: 0,
            o_state: 0,
        }
    }

    fn team_state(self, team: Team) -> u16 {
        match team {
            Team::X => self.x_state,
            Team::O => self.o_state,
        }
    }

    /// Count the tiles the given team holds.
    pub fn count(self, team: Team) -> u8 {
        // At most 9 bits can be set.
        self.team_state(team).count_ones() as u8
    }

    /// Count the empty tiles.
    pub fn num_empty(self) -> u8 {
        NUM_TILES - (self.x_state | self.o_state).count_ones() as u8
    }

    /// Get the team whos turn it is.
    pub fn get_turn(self) -> Team {
        if self.count(Team::X) > self.count(Team::O) {
            Team::O
        } else {
            Team::X
        }
    }

    /// Returns true if every tile is taken.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        (self.x_state | self.o_state).count_ones() >= u32::from(NUM_TILES)
    }

    /// Check if the given team won.
    ///
    /// This is designed to be fast.
    pub fn has_won(self, team: Team) -> bool {
        let state = self.team_state(team);

        ((state & VERTICAL_WIN_1) == VERTICAL_WIN_1)
            || ((state & VERTICAL_WIN_2) == VERTICAL_WIN_2)
            || ((state & VERTICAL_WIN_3) == VERTICAL_WIN_3)
            || ((state & HORIZONTAL_WIN_1) == HORIZONTAL_WIN_1)
            || ((state & HORIZONTAL_WIN_2) == HORIZONTAL_WIN_2)
            || ((state & HORIZONTAL_WIN_3) == HORIZONTAL_WIN_3)
            || ((state & DIAGONAL_WIN) == DIAGONAL_WIN)
            || ((state & ANTI_DIAGONAL_WIN) == ANTI_DIAGONAL_WIN)
    }

    /// Get the winner if they exist.
    ///
    /// If both teams have a line, which cannot happen in a valid game, X is returned.
    pub fn get_winner(self) -> Option<Team> {
        if self.has_won(Team::X) {
            Some(Team::X)
        } else if self.has_won(Team::O) {
            Some(Team::O)
        } else {
            None
        }
    }

    /// Get the winner info, if there is a winner
    ///
    /// This is slower than [`Self::get_winner`].
    pub fn get_winner_info(self) -> Option<WinnerInfo> {
        let team = self.get_winner()?;
        let state = self.team_state(team);

        WIN_LINES
            .iter()
            .find(|(mask, _, _)| (state & mask) == *mask)
            .map(|(_, tile_indexes, win_type)| WinnerInfo {
                team,
                tile_indexes: *tile_indexes,
                win_type: *win_type,
            })
    }

    /// Returns true if the game is over.
    pub fn is_terminal(self) -> bool {
        self.get_winner().is_some() || self.is_full()
    }

    /// Score this board from X's perspective.
    ///
    /// `1` is an X win, `-1` is an O win, and `0` is anything else.
    /// This is only meaningful for terminal boards.
    pub fn utility(self) -> i8 {
        match self.get_winner() {
            Some(Team::X) => 1,
            Some(Team::O) => -1,
            None => 0,
        }
    }

    /// Set the tile for an action.
    ///
    /// This will overwrite whatever is there.
    /// Use [`Self::result`] to only allow moves into empty tiles.
    #[must_use]
    pub fn set(mut self, action: Action, cell: Cell) -> Self {
        let mask = 1 << action.index();
        match cell {
            Some(Team::X) => {
                self.x_state |= mask;
                self.o_state &= !mask;
            }
            Some(Team::O) => {
                self.x_state &= !mask;
                self.o_state |= mask;
            }
            None => {
                self.x_state &= !mask;
                self.o_state &= !mask;
            }
        }
        self
    }

    /// Get the tile for an action.
    pub fn get(self, action: Action) -> Cell {
        let mask = 1 << action.index();
        if self.x_state & mask != 0 {
            Some(Team::X)
        } else if self.o_state & mask != 0 {
            Some(Team::O)
        } else {
            None
        }
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at the top left and ends at the bottom right.
    pub fn iter(self) -> impl Iterator<Item = (Action, Cell)> {
        Action::all().map(move |action| (action, self.get(action)))
    }

    /// Get every legal action, in tile index order.
    ///
    /// This is empty for a full board.
    pub fn actions(self) -> Vec<Action> {
        let taken = self.x_state | self.o_state;
        Action::all()
            .filter(|action| taken & (1 << action.index()) == 0)
            .collect()
    }

    /// Place the team whos turn it is at the action.
    ///
    /// # Errors
    /// Returns an error if the tile is taken.
    pub fn result(self, action: Action) -> Result<Self, Error> {
        self.result_with_player(action, self.get_turn())
    }

    /// Place the given team at the action.
    ///
    /// # Errors
    /// Returns an error if the tile is taken.
    pub fn result_with_player(self, action: Action, team: Team) -> Result<Self, Error> {
        if self.get(action).is_some() {
            return Err(Error::Occupied(action));
        }

        Ok(self.set(action, Some(team)))
    }

    /// Check that this board could be reached by alternating play.
    pub fn validate(self) -> Result<(), Error> {
        let x_count = self.count(Team::X);
        let o_count = self.count(Team::O);
        if x_count < o_count || x_count - o_count > 1 {
            return Err(Error::InvalidCounts { x_count, o_count });
        }

        if self.has_won(Team::X) && self.has_won(Team::O) {
            return Err(Error::MultipleWinners);
        }

        Ok(())
    }

    /// Encode this board as a [`u16`].
    ///
    /// Each tile is a base 3 digit, with tile 0 as the least significant digit.
    /// Empty is 0, X is 1, and O is 2.
    pub fn encode_u16(self) -> u16 {
        let mut ret = 0;
        for action in Action::all().rev() {
            ret *= 3;
            ret += match self.get(action) {
                None => 0,
                Some(Team::X) => 1,
                Some(Team::O) => 2,
            };
        }
        ret
    }

    /// Decode a board from a [`u16`] made with [`Self::encode_u16`].
    ///
    /// Returns `None` if the value is too big to be a board.
    /// This does not validate the board.
    pub fn decode_u16(mut data: u16) -> Option<Self> {
        if data >= NUM_ENCODED_STATES {
            return None;
        }

        let mut board = Self::new();
        for action in Action::all() {
            let cell = match data % 3 {
                0 => None,
                1 => Some(Team::X),
                _ => Some(Team::O),
            };
            board = board.set(action, cell);
            data /= 3;
        }

        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (action, cell) in self.iter() {
            let c = cell.map_or('.', Team::as_char);
            write!(f, "{c}")?;

            if action.col() == 2 && action.row() != 2 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(usize::from(NUM_TILES));
        for c in s.chars() {
            match c {
                '/' | '|' | '\n' | '\r' => {}
                '.' | '_' | '-' | ' ' => cells.push(None),
                c => cells.push(Some(Team::from_char(c).map_err(|_| Error::InvalidTile(c))?)),
            }
        }

        if cells.len() != usize::from(NUM_TILES) {
            return Err(Error::InvalidBoardLength(cells.len()));
        }

        let board = Action::all()
            .zip(cells)
            .fold(Self::new(), |board, (action, cell)| board.set(action, cell));
        board.validate()?;

        Ok(board)
    }
}
