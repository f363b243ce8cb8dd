//! Game board state: cell grid, placed ships, shot resolution.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use rand::Rng;

use crate::common::{BoardError, FireOutcome};
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS, FLEET, MAX_CELLS, PLACEMENT_ATTEMPTS};
use crate::position::Position;
use crate::ship::{Orientation, Ship, ShipType};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

impl CellState {
    /// `Hit` and `Miss` are terminal: firing there again has no effect.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    fn symbol(self, reveal_ships: bool) -> char {
        match self {
            CellState::Empty => '.',
            CellState::ShipPresent if reveal_ships => 'S',
            CellState::ShipPresent => '.',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
        }
    }
}

/// A `rows × cols` grid together with the ships placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board. Both dimensions must be non-zero and the grid
    /// may hold at most `MAX_CELLS` cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let cells = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if rows == 0 || cols == 0 || cells > MAX_CELLS {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![CellState::Empty; rows * cols],
            ships: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    fn checked_index(&self, pos: Position) -> Result<usize, BoardError> {
        self.index(pos).ok_or(BoardError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        })
    }

    /// Every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }

    /// State of the cell at `pos`.
    pub fn cell_state(&self, pos: Position) -> Result<CellState, BoardError> {
        let idx = self.checked_index(pos)?;
        Ok(self.cells[idx])
    }

    /// Whether `pos` is on the board and already hit or missed.
    pub fn is_resolved(&self, pos: Position) -> bool {
        self.index(pos)
            .is_some_and(|idx| self.cells[idx].is_resolved())
    }

    /// In-bounds cells that have not been fired at, row-major.
    pub fn unresolved(&self) -> Vec<Position> {
        self.positions()
            .filter(|&p| !self.is_resolved(p))
            .collect()
    }

    /// The ship that would occupy `start`, if every hull cell is on the board and empty.
    fn check_placement(
        &self,
        ship_type: ShipType,
        start: Position,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let ship =
            Ship::try_new(ship_type, start, orientation).ok_or(BoardError::ShipOutOfBounds)?;
        for &pos in ship.hull() {
            let idx = self.index(pos).ok_or(BoardError::ShipOutOfBounds)?;
            if self.cells[idx] != CellState::Empty {
                return Err(BoardError::ShipOverlaps);
            }
        }
        Ok(ship)
    }

    /// Place a ship, reporting why a rejected placement failed.
    /// The board is untouched on error.
    pub fn try_place_ship(
        &mut self,
        ship_type: ShipType,
        start: Position,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.check_placement(ship_type, start, orientation)?;
        for &pos in ship.hull() {
            let idx = self.checked_index(pos)?;
            self.cells[idx] = CellState::ShipPresent;
        }
        log::debug!(
            "placed {} at {} {:?}",
            ship_type,
            start,
            orientation
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Place a ship. Returns `false`, leaving the board unchanged, if any
    /// cell is out of bounds or already taken.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        start: Position,
        orientation: Orientation,
    ) -> bool {
        self.try_place_ship(ship_type, start, orientation).is_ok()
    }

    /// Fire at `pos` and report what happened.
    pub fn fire_at(&mut self, pos: Position) -> Result<FireOutcome, BoardError> {
        let idx = self.checked_index(pos)?;
        if self.cells[idx].is_resolved() {
            return Ok(FireOutcome::AlreadyTried);
        }
        if self.cells[idx] == CellState::ShipPresent {
            if let Some(ship) = self.ships.iter_mut().find(|s| s.occupies(pos)) {
                self.cells[idx] = CellState::Hit;
                ship.register_hit(pos);
                if ship.is_sunk() {
                    log::info!("{} sunk at {}", ship.ship_type(), pos);
                    return Ok(FireOutcome::Sunk(ship.ship_type()));
                }
                return Ok(FireOutcome::Hit);
            }
        }
        self.cells[idx] = CellState::Miss;
        Ok(FireOutcome::Miss)
    }

    /// Returns `true` when all ships are sunk. A board without ships counts
    /// as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Text grid with row and column indices. Ships are drawn only when
    /// `reveal_ships` is set; hits and misses are always drawn.
    pub fn render(&self, reveal_ships: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out, reveal_ships);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, reveal_ships: bool) -> fmt::Result {
        out.write_str("   ")?;
        for c in 0..self.cols {
            write!(out, "{:2} ", c)?;
        }
        out.write_char('\n')?;
        for r in 0..self.rows {
            write!(out, "{:2} ", r)?;
            for cell in &self.cells[r * self.cols..(r + 1) * self.cols] {
                write!(out, " {} ", cell.symbol(reveal_ships))?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Returns a random legal (start, orientation) for `ship_type`.
    ///
    /// After `PLACEMENT_ATTEMPTS` failed random picks the board is scanned in
    /// row-major order, trying horizontal then vertical at each cell.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Position, Orientation), BoardError> {
        let len = ship_type.size();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // start offsets across and along the ship's length
            let (across_span, along_span) = match orient {
                Orientation::Horizontal => (self.rows, (self.cols + 1).saturating_sub(len)),
                Orientation::Vertical => (self.cols, (self.rows + 1).saturating_sub(len)),
            };
            if along_span == 0 {
                continue;
            }
            let across = rng.random_range(0..across_span) as i32;
            let along = rng.random_range(0..along_span) as i32;
            let start = match orient {
                Orientation::Horizontal => Position::new(across, along),
                Orientation::Vertical => Position::new(along, across),
            };
            if self.check_placement(ship_type, start, orient).is_ok() {
                return Ok((start, orient));
            }
        }

        log::warn!(
            "random placement of {} failed {} times, scanning board",
            ship_type,
            PLACEMENT_ATTEMPTS
        );
        for start in self.positions() {
            for orient in [Orientation::Horizontal, Orientation::Vertical] {
                if self.check_placement(ship_type, start, orient).is_ok() {
                    return Ok((start, orient));
                }
            }
        }
        Err(BoardError::FleetDoesNotFit(ship_type))
    }

    /// Place every ship of the fleet at random, in catalog order.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for ship_type in FLEET {
            let (start, orient) = self.random_placement(rng, ship_type)?;
            self.try_place_ship(ship_type, start, orient)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![CellState::Empty; DEFAULT_ROWS * DEFAULT_COLS],
            ships: Vec::new(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows, self.cols)?;
        self.write_grid(f, true)?;
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
