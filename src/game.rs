pub mod input;

use std::fmt;

use log::{debug, info};

use crate::error::{MoveError, SessionError};
use crate::tictactoe::{GameState, Grid, Player, SIZE};

/// Zero-based (row, column)
pub type Coordinates = (usize, usize);

/// Everything the game shows to the players.
pub enum OutputEvents {
    Board(Grid),
    InvalidMove(MoveError),
    GameOver(GameState),
}

impl fmt::Display for OutputEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEvents::Board(grid) => write!(f, "{}", grid),
            OutputEvents::InvalidMove(err) => write!(f, "{}", err),
            OutputEvents::GameOver(state) => write!(f, "{}", state),
        }
    }
}

/// Drives one session: owns the board and whose turn it is.
pub struct Game {
    grid: Grid,
    current_player: Player,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// X always moves first.
    pub fn new() -> Game {
        Game {
            grid: Grid::new(),
            current_player: Player::X,
        }
    }

    /// Plays until the board reaches a terminal state and returns it.
    pub async fn run<UserInt: input::Input<String, OutputEvents>>(
        &mut self,
        user_interface: &mut UserInt,
    ) -> Result<GameState, SessionError> {
        user_interface.print_to_output(OutputEvents::Board(self.grid.clone()));

        loop {
            let (row, col) = self.obtain_validated_move(user_interface).await?;
            self.play_round(row, col);
            user_interface.print_to_output(OutputEvents::Board(self.grid.clone()));

            let state = self.grid.evaluate_state();
            if state.is_terminal() {
                info!("game over: {}", state);
                user_interface.print_to_output(OutputEvents::GameOver(state));
                return Ok(state);
            }
        }
    }

    /// Reads lines until one passes validation. Rejected lines are reported
    /// and leave the board and the turn untouched.
    async fn obtain_validated_move<UserInt: input::Input<String, OutputEvents>>(
        &self,
        user_interface: &mut UserInt,
    ) -> Result<Coordinates, SessionError> {
        loop {
            let line = user_interface
                .get_input()
                .await?
                .ok_or(SessionError::InputClosed)?;

            match validate_move(&line, &self.grid) {
                Ok(coords) => return Ok(coords),
                Err(err) => {
                    debug!("rejected {:?}: {:?}", line, err);
                    user_interface.print_to_output(OutputEvents::InvalidMove(err));
                }
            }
        }
    }

    fn play_round(&mut self, row: usize, col: usize) {
        debug!("{:?} plays ({}, {})", self.current_player, row, col);
        self.grid.place(row, col, self.current_player);
        self.current_player = self.current_player.opponent();
    }
}

/// Checks a raw `<row> <col>` line against the board, in order: both values
/// numeric, both within 1..=3, target cell empty.
pub fn validate_move(line: &str, grid: &Grid) -> Result<Coordinates, MoveError> {
    let (row, col) = parse_coords(line)?;
    let (row, col) = convert_coords(row, col)?;

    if grid.is_empty_at(row, col) {
        Ok((row, col))
    } else {
        Err(MoveError::OccupiedCell)
    }
}

fn parse_coords(line: &str) -> Result<(i64, i64), MoveError> {
    let mut tokens = line.split_whitespace();
    let mut next = || {
        tokens
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or(MoveError::NonNumericInput)
    };

    let row = next()?;
    let col = next()?;
    Ok((row, col))
}

fn convert_coords(row: i64, col: i64) -> Result<Coordinates, MoveError> {
    let range = 1..=SIZE as i64;
    if range.contains(&row) && range.contains(&col) {
        Ok(((row - 1) as usize, (col - 1) as usize))
    } else {
        Err(MoveError::OutOfRangeInput)
    }
}
