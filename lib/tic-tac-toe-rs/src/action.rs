use crate::{
    Error,
    NUM_TILES,
};

/// The # of rows and columns
pub const BOARD_WIDTH: u8 = 3;

/// A move target on the board.
///
/// Always in bounds. Orders by `(row, col)`, which is the same as tile index order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    row: u8,
    col: u8,
}

impl Action {
    /// Make a new [`Action`].
    pub fn new(row: u8, col: u8) -> Result<Self, Error> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            return Err(Error::OutOfBounds { row, col });
        }

        Ok(Self { row, col })
    }

    /// Make an [`Action`] from a tile index.
    ///
    /// The index starts at 0 at the top left and ends at 8 at the bottom right.
    pub fn from_index(index: u8) -> Result<Self, Error> {
        if index >= NUM_TILES {
            return Err(Error::OutOfBounds {
                row: index / BOARD_WIDTH,
                col: index % BOARD_WIDTH,
            });
        }

        Ok(Self {
            row: index / BOARD_WIDTH,
            col: index % BOARD_WIDTH,
        })
    }

    /// Get the row
    pub fn row(self) -> u8 {
        self.row
    }

    /// Get the column
    pub fn col(self) -> u8 {
        self.col
    }

    /// Get the tile index
    pub fn index(self) -> u8 {
        self.row * BOARD_WIDTH + self.col
    }

    /// Iterate over every action on the board, in tile index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..NUM_TILES).map(|index| Self {
            row: index / BOARD_WIDTH,
            col: index % BOARD_WIDTH,
        })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidActionString(s.to_string());

        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut iter = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = iter.next().ok_or_else(invalid)?;
        let col = iter.next().ok_or_else(invalid)?;
        if iter.next().is_some() {
            return Err(invalid());
        }

        let row = row.parse().map_err(|_| invalid())?;
        let col = col.parse().map_err(|_| invalid())?;

        Self::new(row, col)
    }
}
