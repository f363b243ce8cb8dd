// Opponent targeting: uniform random, hunt/target, and hunt/target with
// checkerboard parity. Every strategy reads cell state straight off the board,
// so shots fired by anyone else are taken into account.

use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::position::Position;

/// Neighbor probe order around a confirmed hit: down, up, right, left.
const HUNT_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// CPU difficulty tier, each backed by a targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum Difficulty {
    /// Uniform choice among unresolved cells.
    Easy,
    /// Probe around known hits, otherwise random.
    #[default]
    Medium,
    /// Probe around known hits, otherwise random over even-parity cells.
    Hard,
}

impl Difficulty {
    /// Pick the next cell to fire at on `board`. Never returns a cell that is
    /// already hit or missed.
    pub fn next_target<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, BoardError> {
        match self {
            Difficulty::Easy => random_target(board, rng),
            Difficulty::Medium => match hunt_target(board) {
                Some(pos) => Ok(pos),
                None => random_target(board, rng),
            },
            Difficulty::Hard => match hunt_target(board) {
                Some(pos) => Ok(pos),
                None => parity_target(board, rng),
            },
        }
    }

    /// Menu number used by the console prompt.
    pub const fn menu_index(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 1, 2, 3, easy, medium or hard")
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

/// Uniform choice among every unresolved cell.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, BoardError> {
    let candidates = board.unresolved();
    pick(&candidates, rng).ok_or(BoardError::NoTargetsRemaining)
}

/// First unresolved neighbor of a hit cell, scanning hits in row-major order
/// and neighbors down, up, right, left. Deterministic.
pub fn hunt_target(board: &Board) -> Option<Position> {
    board
        .positions()
        .filter(|&p| board.cell_state(p) == Ok(CellState::Hit))
        .flat_map(|hit| HUNT_DIRECTIONS.iter().map(move |&(dr, dc)| hit.offset(dr, dc)))
        .find(|&n| board.in_bounds(n) && !board.is_resolved(n))
}

/// Uniform choice among unresolved cells with even `(row + col)`, falling back
/// to any unresolved cell. With no ship shorter than two cells, every ship
/// covers at least one even cell.
pub fn parity_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, BoardError> {
    let candidates: alloc::vec::Vec<Position> = board
        .unresolved()
        .into_iter()
        .filter(|p| p.is_even_parity())
        .collect();
    match pick(&candidates, rng) {
        Some(pos) => Ok(pos),
        None => random_target(board, rng),
    }
}

fn pick<R: Rng + ?Sized>(candidates: &[Position], rng: &mut R) -> Option<Position> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
