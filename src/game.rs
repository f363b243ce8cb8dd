use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, FireOutcome, GameError},
    config::{GameConfig, RepeatShotPolicy, FLEET},
    player::Player,
    position::Position,
    ship::ShipType,
};

/// One of the two sides in a game. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fleets are being placed.
    Setup,
    /// Sides alternate shots.
    InProgress,
    /// `winner` sank the whole opposing fleet.
    Finished { winner: Side },
}

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Side that fired.
    pub side: Side,
    pub target: Position,
    pub outcome: FireOutcome,
    /// `false` when the same side must fire again.
    pub turn_consumed: bool,
    /// Set on the shot that ends the game.
    pub winner: Option<Side>,
}

/// One game between two move sources, each with its own board.
pub struct GameSession {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    phase: GamePhase,
    to_move: Side,
    repeat_shots: RepeatShotPolicy,
    shots_fired: [usize; 2],
}

impl GameSession {
    /// Create a session with two empty `config.rows × config.cols` boards.
    pub fn new(
        config: &GameConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Result<Self, BoardError> {
        Ok(Self {
            boards: [
                Board::new(config.rows, config.cols)?,
                Board::new(config.rows, config.cols)?,
            ],
            players: [first, second],
            phase: GamePhase::Setup,
            to_move: Side::First,
            repeat_shots: config.repeat_shots,
            shots_fired: [0; 2],
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side whose shot comes next.
    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Board owned by `side` (the one its opponent fires at).
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    /// Shots `side` has fired, including wasted repeats.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots_fired[side.index()]
    }

    pub fn repeat_shot_policy(&self) -> RepeatShotPolicy {
        self.repeat_shots
    }

    /// Let both sides place their fleets, first side first.
    ///
    /// Each board must end up holding exactly the fleet in catalog order;
    /// anything else aborts the game.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::AlreadyStarted);
        }
        for side in [Side::First, Side::Second] {
            let idx = side.index();
            self.players[idx].place_ships(rng, &mut self.boards[idx])?;
            let placed: Vec<ShipType> = self.boards[idx]
                .ships()
                .iter()
                .map(|s| s.ship_type())
                .collect();
            if placed != FLEET {
                return Err(GameError::IncompleteFleet {
                    side,
                    placed: placed.len(),
                    expected: FLEET.len(),
                });
            }
            log::debug!("{} placed fleet", self.players[idx].name());
        }
        self.phase = GamePhase::InProgress;
        self.to_move = Side::First;
        log::info!(
            "{} vs {}: all ships placed",
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Setup => Err(GameError::NotInProgress),
            GamePhase::Finished { .. } => Err(GameError::GameOver),
            GamePhase::InProgress => Ok(()),
        }
    }

    /// Ask the side to move for a target and fire it.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<TurnReport, GameError> {
        self.ensure_in_progress()?;
        let side = self.to_move;
        let target = self.players[side.index()]
            .select_target(rng, &self.boards[side.opponent().index()])?;
        self.apply_move(target)
    }

    /// Fire at `target` on behalf of the side to move.
    ///
    /// An out-of-bounds target is rejected without using up the turn. A shot
    /// at an already resolved cell changes nothing on the board; whether it
    /// still passes the turn depends on the session's `RepeatShotPolicy`.
    pub fn apply_move(&mut self, target: Position) -> Result<TurnReport, GameError> {
        self.ensure_in_progress()?;
        let side = self.to_move;
        let opp = side.opponent();

        let outcome = self.boards[opp.index()].fire_at(target)?;
        self.shots_fired[side.index()] += 1;
        log::debug!(
            "{} fires at {}: {}",
            self.players[side.index()].name(),
            target,
            outcome
        );
        self.players[side.index()].handle_guess_result(target, outcome);
        self.players[opp.index()].handle_opponent_guess(target, outcome);

        let winner = if self.boards[opp.index()].all_sunk() {
            self.phase = GamePhase::Finished { winner: side };
            log::info!(
                "{} wins after {} shots",
                self.players[side.index()].name(),
                self.shots_fired[side.index()]
            );
            Some(side)
        } else {
            None
        };

        let turn_consumed = !(outcome == FireOutcome::AlreadyTried
            && self.repeat_shots == RepeatShotPolicy::Retry);
        if winner.is_none() && turn_consumed {
            self.to_move = opp;
        }

        Ok(TurnReport {
            side,
            target,
            outcome,
            turn_consumed,
            winner,
        })
    }

    /// Place fleets if not done yet, then play until one side wins.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Side, GameError> {
        if self.phase == GamePhase::Setup {
            self.setup(rng)?;
        }
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_turn(rng)?;
        }
    }
}
