#![cfg(feature = "std")]

//! Text parsing and setup prompts for the console front end. Malformed
//! answers to setup questions fall back to the defaults instead of aborting.

use std::io::Write;

use crate::{
    ai::Difficulty,
    config::{GameConfig, GameMode, RepeatShotPolicy, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS},
    player_cli::{read_trimmed, LineSource},
    position::Position,
    ship::Orientation,
    GameError,
};

/// Parse `row col`.
pub fn parse_target(input: &str) -> Option<Position> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Position::new(row, col))
}

/// Parse `row col h|v`; any word starting with `h` or `v` names the orientation.
pub fn parse_placement(input: &str) -> Option<(Position, Orientation)> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let orient = match parts.next()?.chars().next()?.to_ascii_lowercase() {
        'h' => Orientation::Horizontal,
        'v' => Orientation::Vertical,
        _ => return None,
    };
    Some((Position::new(row, col), orient))
}

/// Parse `rows cols` (or `rows x cols`). Both must be positive and the grid
/// no larger than `MAX_CELLS`.
pub fn parse_dimensions(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == 'x' || c == 'X')
        .filter(|s| !s.is_empty());
    let rows: usize = parts.next()?.parse().ok()?;
    let cols: usize = parts.next()?.parse().ok()?;
    let fits = rows.checked_mul(cols).is_some_and(|n| n <= MAX_CELLS);
    (rows > 0 && cols > 0 && fits).then_some((rows, cols))
}

/// Values fixed on the command line; anything left `None` is prompted for.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupAnswers {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub repeat_shots: RepeatShotPolicy,
}

const MODE_LABELS: [(GameMode, &str); 3] = [
    (GameMode::HumanVsHuman, "human vs human"),
    (GameMode::HumanVsCpu, "human vs computer"),
    (GameMode::CpuVsCpu, "computer vs computer"),
];

fn mode_menu() -> String {
    let options: Vec<String> = MODE_LABELS
        .iter()
        .map(|(mode, label)| format!("{}) {}", mode.menu_index(), label))
        .collect();
    format!(
        "Game mode: {} (default {})",
        options.join(" "),
        GameMode::default().menu_index()
    )
}

fn difficulty_menu() -> String {
    let options: Vec<String> = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .iter()
        .map(|d| format!("{}) {}", d.menu_index(), d))
        .collect();
    format!(
        "Choose computer difficulty: {} (default {})",
        options.join(" "),
        Difficulty::default()
    )
}

fn ask<I: LineSource, O: Write>(
    input: &mut I,
    output: &mut O,
    question: &str,
) -> Result<String, GameError> {
    writeln!(output, "{}", question)?;
    write!(output, "> ")?;
    output.flush()?;
    match read_trimmed(input) {
        Err(GameError::InputClosed) => Ok(String::new()),
        other => other,
    }
}

/// Fill in a `GameConfig`, asking only for what `answers` leaves open.
pub fn prompt_config<I: LineSource, O: Write>(
    input: &mut I,
    output: &mut O,
    answers: SetupAnswers,
) -> Result<GameConfig, GameError> {
    let mut config = GameConfig {
        repeat_shots: answers.repeat_shots,
        ..GameConfig::default()
    };

    match (answers.rows, answers.cols) {
        (Some(rows), Some(cols)) => {
            config.rows = rows;
            config.cols = cols;
        }
        (rows, cols) => {
            let line = ask(
                input,
                output,
                &format!(
                    "Board size as rows cols (default {}x{}). Press Enter to continue:",
                    DEFAULT_ROWS, DEFAULT_COLS
                ),
            )?;
            if !line.is_empty() {
                match parse_dimensions(&line) {
                    Some((r, c)) => {
                        config.rows = r;
                        config.cols = c;
                    }
                    None => writeln!(output, "Using default {}x{}.", DEFAULT_ROWS, DEFAULT_COLS)?,
                }
            }
            config.rows = rows.unwrap_or(config.rows);
            config.cols = cols.unwrap_or(config.cols);
        }
    }

    config.mode = match answers.mode {
        Some(mode) => mode,
        None => {
            let line = ask(input, output, &mode_menu())?;
            line.parse().unwrap_or_default()
        }
    };

    if config.mode == GameMode::HumanVsCpu {
        config.difficulty = match answers.difficulty {
            Some(d) => d,
            None => {
                let line = ask(input, output, &difficulty_menu())?;
                line.parse().unwrap_or_default()
            }
        };
    } else if let Some(d) = answers.difficulty {
        config.difficulty = d;
    }

    Ok(config)
}

/// Ask for a player name, using `default` when the answer is blank.
pub fn prompt_name<I: LineSource, O: Write>(
    input: &mut I,
    output: &mut O,
    question: &str,
    default: &str,
) -> Result<String, GameError> {
    let line = ask(input, output, question)?;
    Ok(if line.is_empty() {
        default.to_string()
    } else {
        line
    })
}
