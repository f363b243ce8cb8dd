use alloc::format;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{ai::Difficulty, board::Board, position::Position, GameError};

use crate::player::Player;

/// CPU player: random fleet placement, difficulty-driven targeting.
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(name: &str, difficulty: Difficulty) -> Self {
        Self {
            name: format!("{} (CPU-{})", name, difficulty),
            difficulty,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        board.place_fleet_randomly(rng)?;
        Ok(())
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Position, GameError> {
        Ok(self.difficulty.next_target(opponent, rng)?)
    }
}
