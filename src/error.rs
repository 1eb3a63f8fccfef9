use thiserror::Error;

/// A move the player typed that cannot be applied.
///
/// The message is what the player sees before being asked again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("You should enter numbers!")]
    NonNumericInput,

    #[error("Coordinates should be from 1 to 3!")]
    OutOfRangeInput,

    #[error("This cell is occupied! Choose another one!")]
    OccupiedCell,
}

/// Failures of the input stream itself, which end the session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("cannot read move: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}
