//! Grid coordinates.

use core::fmt;

/// A cell coordinate on a board, `(row, col)`, zero-based.
///
/// Coordinates are signed so that positions off the top or left edge can be
/// expressed and rejected by the board rather than wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by `dr` rows and `dc` columns.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Like `offset`, but `None` if either coordinate overflows.
    pub const fn checked_offset(self, dr: i32, dc: i32) -> Option<Self> {
        match (self.row.checked_add(dr), self.col.checked_add(dc)) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }

    /// Whether `(row + col)` is even.
    pub const fn is_even_parity(self) -> bool {
        (self.row.rem_euclid(2) + self.col.rem_euclid(2)) % 2 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
