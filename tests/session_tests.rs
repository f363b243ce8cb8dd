use std::collections::VecDeque;

use broadside::{
    AiPlayer, Board, BoardError, Difficulty, FireOutcome, GameConfig, GameError, GamePhase,
    GameSession, Orientation, Player, Position, RepeatShotPolicy, ShipType, Side, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Places the fleet in rows 0..5 starting at column 0 and fires a fixed
/// list of targets.
struct ScriptedPlayer {
    name: String,
    ships: Vec<ShipType>,
    targets: VecDeque<Position>,
}

impl ScriptedPlayer {
    fn new(name: &str, targets: &[Position]) -> Self {
        Self {
            name: name.to_string(),
            ships: FLEET.to_vec(),
            targets: targets.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        for (row, ship) in self.ships.iter().enumerate() {
            board.try_place_ship(*ship, pos(row as i32, 0), Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> Result<Position, GameError> {
        self.targets.pop_front().ok_or(GameError::InputClosed)
    }
}

/// Every cell of the scripted fleet layout.
fn fleet_cells() -> Vec<Position> {
    FLEET
        .iter()
        .enumerate()
        .flat_map(|(row, ship)| (0..ship.size() as i32).map(move |c| pos(row as i32, c)))
        .collect()
}

fn config(repeat_shots: RepeatShotPolicy) -> GameConfig {
    GameConfig {
        repeat_shots,
        ..GameConfig::default()
    }
}

fn scripted_session(
    repeat_shots: RepeatShotPolicy,
    first: &[Position],
    second: &[Position],
) -> (GameSession, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(
        &config(repeat_shots),
        Box::new(ScriptedPlayer::new("one", first)),
        Box::new(ScriptedPlayer::new("two", second)),
    )
    .unwrap();
    session.setup(&mut rng).unwrap();
    (session, rng)
}

#[test]
fn test_ai_vs_ai_game_finishes() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut session = GameSession::new(
        &GameConfig::default(),
        Box::new(AiPlayer::new("CPU-1", Difficulty::Hard)),
        Box::new(AiPlayer::new("CPU-2", Difficulty::Medium)),
    )
    .unwrap();
    assert_eq!(session.phase(), GamePhase::Setup);

    let winner = session.run(&mut rng).unwrap();
    assert_eq!(session.phase(), GamePhase::Finished { winner });
    assert!(session.board(winner.opponent()).all_sunk());
    assert!(!session.board(winner).all_sunk());
    assert!(session.shots_fired(winner) <= 64);
    assert!(session.shots_fired(winner) >= FLEET.iter().map(|s| s.size()).sum::<usize>());
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(
            &GameConfig::default(),
            Box::new(AiPlayer::new("a", Difficulty::Easy)),
            Box::new(AiPlayer::new("b", Difficulty::Hard)),
        )
        .unwrap();
        let winner = session.run(&mut rng).unwrap();
        (
            winner,
            session.shots_fired(Side::First),
            session.board(Side::First).render(true),
        )
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_moves_rejected_before_setup() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(
        &GameConfig::default(),
        Box::new(ScriptedPlayer::new("one", &[])),
        Box::new(ScriptedPlayer::new("two", &[])),
    )
    .unwrap();
    assert_eq!(session.apply_move(pos(0, 0)), Err(GameError::NotInProgress));
    assert_eq!(session.play_turn(&mut rng), Err(GameError::NotInProgress));
    session.setup(&mut rng).unwrap();
    assert_eq!(session.phase(), GamePhase::InProgress);
    assert_eq!(session.setup(&mut rng), Err(GameError::AlreadyStarted));
}

#[test]
fn test_turns_alternate() {
    let (mut session, mut rng) =
        scripted_session(RepeatShotPolicy::ConsumeTurn, &[pos(7, 7)], &[pos(0, 0)]);
    assert_eq!(session.side_to_move(), Side::First);

    let r1 = session.play_turn(&mut rng).unwrap();
    assert_eq!((r1.side, r1.outcome, r1.turn_consumed), (Side::First, FireOutcome::Miss, true));
    assert_eq!(session.side_to_move(), Side::Second);

    let r2 = session.play_turn(&mut rng).unwrap();
    assert_eq!((r2.side, r2.outcome), (Side::Second, FireOutcome::Hit));
    assert_eq!(session.side_to_move(), Side::First);
}

#[test]
fn test_repeat_shot_consumes_turn_by_default() {
    assert_eq!(GameConfig::default().repeat_shots, RepeatShotPolicy::ConsumeTurn);
    let (mut session, _rng) = scripted_session(RepeatShotPolicy::ConsumeTurn, &[], &[]);
    assert_eq!(session.repeat_shot_policy(), RepeatShotPolicy::ConsumeTurn);

    session.apply_move(pos(7, 7)).unwrap();
    session.apply_move(pos(7, 7)).unwrap();
    let before = session.board(Side::Second).clone();
    let report = session.apply_move(pos(7, 7)).unwrap();
    assert_eq!(report.outcome, FireOutcome::AlreadyTried);
    assert!(report.turn_consumed);
    assert_eq!(session.side_to_move(), Side::Second);
    assert_eq!(session.board(Side::Second), &before);
    assert_eq!(session.shots_fired(Side::First), 2);
}

#[test]
fn test_repeat_shot_retry_keeps_turn() {
    let (mut session, _rng) = scripted_session(RepeatShotPolicy::Retry, &[], &[]);
    assert_eq!(session.repeat_shot_policy(), RepeatShotPolicy::Retry);

    session.apply_move(pos(7, 7)).unwrap();
    session.apply_move(pos(7, 7)).unwrap();
    let report = session.apply_move(pos(7, 7)).unwrap();
    assert_eq!(report.outcome, FireOutcome::AlreadyTried);
    assert!(!report.turn_consumed);
    assert_eq!(session.side_to_move(), Side::First);

    let report = session.apply_move(pos(7, 6)).unwrap();
    assert_eq!(report.outcome, FireOutcome::Miss);
    assert_eq!(session.side_to_move(), Side::Second);
}

#[test]
fn test_out_of_bounds_move_keeps_turn() {
    let (mut session, _rng) = scripted_session(RepeatShotPolicy::ConsumeTurn, &[], &[]);
    assert_eq!(
        session.apply_move(pos(-1, 0)),
        Err(GameError::Board(BoardError::OutOfBounds { row: -1, col: 0 }))
    );
    assert_eq!(session.side_to_move(), Side::First);
    assert_eq!(session.shots_fired(Side::First), 0);
}

#[test]
fn test_game_finishes_on_last_sink() {
    let (mut session, mut rng) = scripted_session(RepeatShotPolicy::ConsumeTurn, &[], &[]);
    let cells = fleet_cells();
    // second side only fires at empty water
    let mut filler = (0..8).map(|c| pos(7, c));

    let mut last = None;
    for (i, &target) in cells.iter().enumerate() {
        let report = session.apply_move(target).unwrap();
        assert_eq!(report.side, Side::First);
        assert!(report.outcome.is_hit());
        if i + 1 < cells.len() {
            assert_eq!(report.winner, None);
            let reply = session.apply_move(filler.next().unwrap_or(pos(6, 7))).unwrap();
            assert_eq!(reply.side, Side::Second);
        }
        last = Some(report);
    }
    let last = last.unwrap();
    assert_eq!(last.outcome, FireOutcome::Sunk(ShipType::Destroyer));
    assert_eq!(last.winner, Some(Side::First));
    assert_eq!(session.winner(), Some(Side::First));
    assert_eq!(session.phase(), GamePhase::Finished { winner: Side::First });

    assert_eq!(session.apply_move(pos(7, 7)), Err(GameError::GameOver));
    assert_eq!(session.play_turn(&mut rng), Err(GameError::GameOver));
    assert_eq!(session.run(&mut rng), Ok(Side::First));
}

#[test]
fn test_incomplete_fleet_aborts_setup() {
    let mut short = ScriptedPlayer::new("short", &[]);
    short.ships.pop();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(
        &GameConfig::default(),
        Box::new(ScriptedPlayer::new("full", &[])),
        Box::new(short),
    )
    .unwrap();
    assert_eq!(
        session.setup(&mut rng),
        Err(GameError::IncompleteFleet {
            side: Side::Second,
            placed: 4,
            expected: 5
        })
    );
    assert_eq!(session.phase(), GamePhase::Setup);
}

#[test]
fn test_grid_too_small_aborts_construction() {
    let mut rng = SmallRng::seed_from_u64(0);
    let config = GameConfig {
        rows: 3,
        cols: 3,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(
        &config,
        Box::new(AiPlayer::new("a", Difficulty::Easy)),
        Box::new(AiPlayer::new("b", Difficulty::Easy)),
    )
    .unwrap();
    assert_eq!(
        session.setup(&mut rng),
        Err(GameError::Board(BoardError::FleetDoesNotFit(ShipType::Carrier)))
    );
}

#[test]
fn test_zero_sized_grid_rejected() {
    let config = GameConfig {
        rows: 0,
        ..GameConfig::default()
    };
    let result = GameSession::new(
        &config,
        Box::new(AiPlayer::new("a", Difficulty::Easy)),
        Box::new(AiPlayer::new("b", Difficulty::Easy)),
    );
    assert!(matches!(
        result,
        Err(BoardError::InvalidDimensions { rows: 0, cols: 8 })
    ));
}

#[test]
fn test_ai_player_name_includes_difficulty() {
    let ai = AiPlayer::new("Computer", Difficulty::Hard);
    assert_eq!(ai.name(), "Computer (CPU-HARD)");
    assert_eq!(ai.difficulty(), Difficulty::Hard);
}
