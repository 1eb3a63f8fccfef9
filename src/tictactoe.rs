//! # TicTacToe
//!
//! Board state for a 3x3 game and classification of its outcome

use std::fmt;

use itertools::Itertools;
use strum_macros::{Display, EnumIter};

/// Number of rows and columns on the playmat
pub const SIZE: usize = 3;

/// Represents symbols on game playmat
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum Tile {
    Cross,
    Circle,
    Empty,
}

impl Tile {
    fn to_char(self) -> char {
        match self {
            Tile::Cross => 'X',
            Tile::Circle => 'O',
            Tile::Empty => ' ',
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumIter)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns player tile
    pub fn tile(self) -> Tile {
        match self {
            Player::X => Tile::Cross,
            Player::O => Tile::Circle,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Outcome of the board as it currently stands.
///
/// `Display` yields the message shown to players.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum GameState {
    #[strum(serialize = "Game not finished")]
    NotFinished,
    #[strum(serialize = "Impossible")]
    Impossible,
    #[strum(serialize = "X wins")]
    XWins,
    #[strum(serialize = "O wins")]
    OWins,
    #[strum(serialize = "Draw")]
    Draw,
}

impl GameState {
    /// Returns true when no further moves should be played
    pub fn is_terminal(self) -> bool {
        self != GameState::NotFinished
    }
}

/// Represents 3x3 playmat, row-major
type State = [[Tile; SIZE]; SIZE];

/// Every row, column and both diagonals
const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Main structure holding the board
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    state: State,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

impl Grid {
    /// Creates an empty board
    pub fn new() -> Grid {
        Grid {
            state: [[Tile::Empty; SIZE]; SIZE],
        }
    }

    /// Indices are zero-based and must be in range.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.state[row][col] == Tile::Empty
    }

    /// Puts the player's mark on the cell, overwriting whatever was there.
    /// Occupancy is the caller's concern.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.state[row][col] = player.tile();
    }

    /// Classifies the board from its cells alone.
    ///
    /// Boards that alternating play can never produce (both players holding
    /// a line, or one player ahead by two or more marks) are `Impossible`,
    /// which takes precedence over any win.
    pub fn evaluate_state(&self) -> GameState {
        let x_line = self.has_line(Tile::Cross);
        let o_line = self.has_line(Tile::Circle);

        let counts = self.tiles().counts();
        let count = |tile: Tile| counts.get(&tile).copied().unwrap_or(0);
        let (crosses, circles) = (count(Tile::Cross), count(Tile::Circle));

        if (x_line && o_line) || crosses.abs_diff(circles) >= 2 {
            GameState::Impossible
        } else if x_line {
            GameState::XWins
        } else if o_line {
            GameState::OWins
        } else if count(Tile::Empty) == 0 {
            GameState::Draw
        } else {
            GameState::NotFinished
        }
    }

    fn has_line(&self, tile: Tile) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.state[row][col] == tile))
    }

    fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.state.iter().flatten().copied()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(3 * SIZE);
        writeln!(f, "{}", border)?;
        for row in self.state.iter() {
            writeln!(f, "| {} |", row.iter().map(|tile| tile.to_char()).join(" "))?;
        }
        write!(f, "{}", border)
    }
}
