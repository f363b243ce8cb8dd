//! Common types for Broadside: shot outcomes and errors.

use alloc::string::String;
use core::fmt;

use crate::game::Side;
use crate::ship::ShipType;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// The cell was already hit or missed; nothing changed.
    AlreadyTried,
    /// The shot landed on open water.
    Miss,
    /// The shot hit a ship that is still afloat.
    Hit,
    /// The shot sank a ship of the given type.
    Sunk(ShipType),
}

impl FireOutcome {
    /// Whether the shot struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, FireOutcome::Hit | FireOutcome::Sunk(_))
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireOutcome::AlreadyTried => write!(f, "Already tried"),
            FireOutcome::Miss => write!(f, "MISS"),
            FireOutcome::Hit => write!(f, "HIT"),
            FireOutcome::Sunk(ship) => write!(f, "SUNK {}", ship),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Position lies outside the grid.
    OutOfBounds { row: i32, col: i32 },
    /// Ship placement runs off the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Board dimensions must both be non-zero and within `MAX_CELLS`.
    InvalidDimensions { rows: usize, cols: usize },
    /// No legal spot is left for this ship; the grid is too small for the fleet.
    FleetDoesNotFit(ShipType),
    /// Every cell has already been fired at.
    NoTargetsRemaining,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Out of bounds: ({},{})", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}", rows, cols)
            }
            BoardError::FleetDoesNotFit(ship) => {
                write!(f, "Unable to place {}: board too small for the fleet", ship)
            }
            BoardError::NoTargetsRemaining => write!(f, "No unresolved cells left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by game sessions and move sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Ships are still being placed.
    NotInProgress,
    /// Setup already ran for this session.
    AlreadyStarted,
    /// The game has a winner; no further moves are accepted.
    GameOver,
    /// A side finished placement without the full fleet on its board.
    IncompleteFleet {
        side: Side,
        placed: usize,
        expected: usize,
    },
    /// The move source's input stream ended.
    InputClosed,
    /// The move source failed to read or write.
    Io(String),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err.to_string())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::NotInProgress => write!(f, "Game has not started"),
            GameError::AlreadyStarted => write!(f, "Ships are already placed"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::IncompleteFleet {
                side,
                placed,
                expected,
            } => write!(
                f,
                "{:?} side placed {} of {} ships",
                side, placed, expected
            ),
            GameError::InputClosed => write!(f, "Input closed"),
            GameError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}
