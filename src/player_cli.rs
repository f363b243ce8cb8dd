#![cfg(feature = "std")]

use std::io::{self, BufRead, BufReader, Cursor, Read, Write};

use crate::{
    board::Board,
    cli::{parse_placement, parse_target},
    common::FireOutcome,
    config::FLEET,
    position::Position,
    GameError,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Something a console player can read whole lines from.
///
/// `Stdin` takes its lock per call, so several players can share the
/// terminal in one process.
pub trait LineSource {
    /// Append the next line to `buf`; `Ok(0)` at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Read one trimmed line, failing with `InputClosed` at end of input.
pub fn read_trimmed<I: LineSource>(input: &mut I) -> Result<String, GameError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Human player driven by text prompts.
pub struct CliPlayer<I, O> {
    name: String,
    input: I,
    output: O,
}

impl CliPlayer<io::Stdin, io::Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio(name: &str) -> Self {
        Self::new(name, io::stdin(), io::stdout())
    }
}

impl<I: LineSource, O: Write> CliPlayer<I, O> {
    pub fn new(name: &str, input: I, output: O) -> Self {
        Self {
            name: name.to_string(),
            input,
            output,
        }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &O {
        &self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        read_trimmed(&mut self.input)
    }
}

impl<I: LineSource, O: Write> Player for CliPlayer<I, O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        writeln!(
            self.output,
            "{}: place your ships. Enter start row col and orientation, e.g. 0 0 h. \
             Press enter for random placement.",
            self.name
        )?;
        for ship_type in FLEET {
            loop {
                write!(self.output, "{}", board.render(true))?;
                let line = self.prompt(&format!(
                    "Place {} (size {}) > ",
                    ship_type,
                    ship_type.size()
                ))?;
                if line.is_empty() {
                    let (start, orient) = board.random_placement(rng, ship_type)?;
                    board.try_place_ship(ship_type, start, orient)?;
                    writeln!(self.output, "{} placed at {} {:?}", ship_type, start, orient)?;
                    break;
                }
                match parse_placement(&line) {
                    Some((start, orient)) => match board.try_place_ship(ship_type, start, orient) {
                        Ok(()) => break,
                        Err(e) => writeln!(self.output, "Invalid placement: {}. Try again.", e)?,
                    },
                    None => writeln!(self.output, "Format: row col h|v (example: 2 3 h)")?,
                }
            }
        }
        write!(self.output, "{}", board.render(true))?;
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Position, GameError> {
        loop {
            writeln!(self.output, "Opponent board (your hits/misses so far):")?;
            write!(self.output, "{}", opponent.render(false))?;
            let question = format!("{}, enter row and col to fire at (e.g. 0 0) > ", self.name);
            let line = self.prompt(&question)?;
            match parse_target(&line) {
                Some(pos) if opponent.in_bounds(pos) => return Ok(pos),
                Some(_) => writeln!(self.output, "Out of bounds. Try again.")?,
                None => writeln!(self.output, "Invalid input. Example: 3 4")?,
            }
        }
    }

    fn handle_guess_result(&mut self, target: Position, outcome: FireOutcome) {
        let _ = writeln!(self.output, "You fired at {} -> {}", target, outcome);
    }

    fn handle_opponent_guess(&mut self, target: Position, outcome: FireOutcome) {
        let _ = writeln!(self.output, "Opponent fired at {} -> {}", target, outcome);
    }
}
