use rand::rngs::SmallRng;

use crate::{board::Board, common::FireOutcome, position::Position, GameError};

/// Interface implemented by different player types.
///
/// A player is a move source: it places its own fleet during setup and picks
/// targets on the opponent's board during play. It only ever sees the
/// opponent board through shared references.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Place the whole fleet onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError>;

    /// Choose the next cell to fire at on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board)
        -> Result<Position, GameError>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _target: Position, _outcome: FireOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_guess(&mut self, _target: Position, _outcome: FireOutcome) {}
}
