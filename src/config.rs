use core::fmt;
use core::str::FromStr;

use crate::ai::Difficulty;
use crate::ship::ShipType;

pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 8;

/// Largest board, in cells, that `Board::new` accepts.
pub const MAX_CELLS: usize = u16::MAX as usize;

/// Ships each side places, in placement order.
pub const FLEET: [ShipType; 5] = ShipType::ALL;

/// Random tries per ship before automated placement falls back to a full scan.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

/// What happens when a side fires at a cell it already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum RepeatShotPolicy {
    /// The shot is wasted and the turn passes to the opponent.
    #[default]
    #[cfg_attr(feature = "std", value(name = "consume"))]
    ConsumeTurn,
    /// The same side keeps the turn and must pick again.
    Retry,
}

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum GameMode {
    #[cfg_attr(feature = "std", value(name = "hvh"))]
    HumanVsHuman,
    #[default]
    #[cfg_attr(feature = "std", value(name = "hvc"))]
    HumanVsCpu,
    #[cfg_attr(feature = "std", value(name = "cvc"))]
    CpuVsCpu,
}

impl GameMode {
    /// Menu number used by the console prompt.
    pub const fn menu_index(self) -> u8 {
        match self {
            GameMode::HumanVsHuman => 1,
            GameMode::HumanVsCpu => 2,
            GameMode::CpuVsCpu => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGameModeError;

impl fmt::Display for ParseGameModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 1, 2, 3, hvh, hvc or cvc")
    }
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "hvh" => Ok(GameMode::HumanVsHuman),
            "2" | "hvc" => Ok(GameMode::HumanVsCpu),
            "3" | "cvc" => Ok(GameMode::CpuVsCpu),
            _ => Err(ParseGameModeError),
        }
    }
}

/// Settings for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mode: GameMode,
    /// Difficulty of the CPU opponent in human-vs-CPU games.
    pub difficulty: Difficulty,
    pub repeat_shots: RepeatShotPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            repeat_shots: RepeatShotPolicy::default(),
        }
    }
}
