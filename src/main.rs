#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{prompt_config, prompt_name, SetupAnswers},
    init_logging, AiPlayer, CliPlayer, Difficulty, FireOutcome, GameConfig, GameMode,
    GameSession, Player, RepeatShotPolicy, Side,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a console game. Settings not given as flags are asked for.
    Play {
        #[arg(long)]
        rows: Option<usize>,
        #[arg(long)]
        cols: Option<usize>,
        #[arg(long, value_enum)]
        mode: Option<GameMode>,
        #[arg(long, value_enum, help = "Difficulty of the computer opponent")]
        difficulty: Option<Difficulty>,
        #[arg(long, value_enum, default_value_t = RepeatShotPolicy::ConsumeTurn,
              help = "What a shot at an already resolved cell does")]
        repeat_shots: RepeatShotPolicy,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            rows,
            cols,
            mode,
            difficulty,
            repeat_shots,
            seed,
        } => {
            println!("Battleship (Console)");
            let mut stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let answers = SetupAnswers {
                rows,
                cols,
                mode,
                difficulty,
                repeat_shots,
            };
            let config = prompt_config(&mut stdin, &mut stdout, answers)?;

            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let (first, second) = players_for(&config)?;
            let mut session = GameSession::new(&config, first, second)?;
            println!("\n--- Battleship Setup ---");
            session.setup(&mut rng)?;
            println!("\nAll ships placed. Let the battle begin!\n");
            let winner = play(&mut session, &mut rng, config.mode)?;

            println!("\n=== GAME OVER ===");
            for side in [Side::First, Side::Second] {
                println!("{}'s board:", session.player(side).name());
                println!("{}", session.board(side).render(true));
            }
            println!(
                "{} wins after {} shots!",
                session.player(winner).name(),
                session.shots_fired(winner)
            );
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn players_for(config: &GameConfig) -> anyhow::Result<(Box<dyn Player>, Box<dyn Player>)> {
    let mut stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let pair = match config.mode {
        GameMode::HumanVsHuman => {
            let n1 = prompt_name(&mut stdin, &mut stdout, "Enter name for Player 1:", "Player1")?;
            let n2 = prompt_name(&mut stdin, &mut stdout, "Enter name for Player 2:", "Player2")?;
            (
                boxed(CliPlayer::stdio(&n1)),
                boxed(CliPlayer::stdio(&n2)),
            )
        }
        GameMode::HumanVsCpu => {
            let name = prompt_name(&mut stdin, &mut stdout, "Enter your name:", "Player")?;
            (
                boxed(CliPlayer::stdio(&name)),
                boxed(AiPlayer::new("Computer", config.difficulty)),
            )
        }
        GameMode::CpuVsCpu => (
            boxed(AiPlayer::new("CPU-1", Difficulty::Hard)),
            boxed(AiPlayer::new("CPU-2", config.difficulty)),
        ),
    };
    Ok(pair)
}

#[cfg(feature = "std")]
fn boxed<P: Player + 'static>(player: P) -> Box<dyn Player> {
    Box::new(player)
}

#[cfg(feature = "std")]
fn play(session: &mut GameSession, rng: &mut SmallRng, mode: GameMode) -> anyhow::Result<Side> {
    loop {
        let report = session.play_turn(rng)?;
        let shooter = session.player(report.side).name().to_string();
        if mode == GameMode::CpuVsCpu {
            println!("{} fires at {} -> {}", shooter, report.target, report.outcome);
        } else if report.outcome == FireOutcome::AlreadyTried && !report.turn_consumed {
            println!("{} already fired there, pick another cell.", shooter);
        } else if report.outcome == FireOutcome::AlreadyTried {
            println!("{} already fired there and loses the turn.", shooter);
        }
        if let Some(winner) = report.winner {
            return Ok(winner);
        }
    }
}
