use crate::Action;

/// Library Error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The coordinates do not name a tile on the board.
    #[error("({row}, {col}) is not on the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The action targets a tile that is already taken.
    #[error("the tile at {0} is already occupied")]
    Occupied(Action),

    /// The X/O counts could not come from alternating play.
    #[error("invalid tile counts, X has {x_count} and O has {o_count}")]
    InvalidCounts { x_count: u8, o_count: u8 },

    /// Both teams have a completed line.
    #[error("both teams have a completed line")]
    MultipleWinners,

    /// A board string had the wrong number of tiles.
    #[error("expected 9 tiles, got {0}")]
    InvalidBoardLength(usize),

    /// A board string had a char that is not a tile or separator.
    #[error("'{0}' is not a valid tile")]
    InvalidTile(char),

    /// An action string could not be parsed.
    #[error("'{0}' is not a valid action, expected `row,col`")]
    InvalidActionString(String),
}

impl Error {
    /// Returns true if this is an invalid action error.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::Occupied(_))
    }

    /// Returns true if this is a malformed board error.
    pub fn is_malformed_board(&self) -> bool {
        matches!(self, Self::InvalidCounts { .. } | Self::MultipleWinners)
    }

    /// Returns true if this is a board string parse error.
    pub fn is_invalid_board_string(&self) -> bool {
        matches!(self, Self::InvalidBoardLength(_) | Self::InvalidTile(_))
    }
}
