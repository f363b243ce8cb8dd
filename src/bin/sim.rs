use broadside::{AiPlayer, Difficulty, GameConfig, GameMode, GameSession, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn program_name(args: &[String]) -> &str {
    args.first().map_or("sim", String::as_str)
}

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(3..=5).contains(&args.len()) {
        eprintln!(
            "Usage: {} <seed1> <seed2> [difficulty1] [difficulty2]",
            program_name(&args)
        );
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let parse_difficulty = |arg: Option<&String>, default: Difficulty| match arg {
        Some(s) => s
            .parse::<Difficulty>()
            .map_err(|e| anyhow::anyhow!("{}: {}", s, e)),
        None => Ok(default),
    };
    let d1 = parse_difficulty(args.get(3), Difficulty::Hard)?;
    let d2 = parse_difficulty(args.get(4), Difficulty::Medium)?;

    // Placement and targeting share one stream, seeded from both inputs.
    let mut rng = SmallRng::seed_from_u64(seed1.rotate_left(32) ^ seed2);

    let config = GameConfig {
        mode: GameMode::CpuVsCpu,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(
        &config,
        Box::new(AiPlayer::new("player1", d1)),
        Box::new(AiPlayer::new("player2", d2)),
    )?;
    let winner = session.run(&mut rng)?;

    let result = json!({
        "player1": {"difficulty": d1, "shots": session.shots_fired(Side::First)},
        "player2": {"difficulty": d2, "shots": session.shots_fired(Side::Second)},
        "winner": match winner {
            Side::First => "player1",
            Side::Second => "player2",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
