use std::{
    env,
    io::{self, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};

use broadside::{
    board::Board,
    game::{GameLoop, Player, TurnError},
    grid::{Spot, SIZE},
    player::{InteractiveStrategy, RandomStrategy, Terminal},
};

fn main() {
    init_logging();
    let matches = App::new("Broadside")
        .version("0.1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship: you against a random-shot computer, or two computers against each other.")
        .arg(
            Arg::with_name("mode")
                .value_name("MODE")
                .help("play: interactive game against the computer; auto: watch two computers play")
                .possible_values(&["play", "auto"])
                .default_value("play"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("fix the random seed for a reproducible game")
                .takes_value(true)
                .validator(|v| v.parse::<u64>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .get_matches();

    let result = match matches.value_of("mode") {
        Some("auto") => watch_game(&matches),
        _ => play_game(&matches),
    };
    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

/// Interactive game: the human is player 1 and classifies the computer's
/// shots against their own paper board.
fn play_game(matches: &ArgMatches) -> Result<(), TurnError> {
    let human = InteractiveStrategy::new("Human", StandardTerminal);
    let computer = RandomStrategy::with_random_fleet("Computer", rng_for(matches, 0));

    println!("The computer has hidden its fleet. Call shots like B7; answer its");
    println!("shots with hit or miss, and name the ship when one sinks.");

    let mut game = GameLoop::new(Box::new(human), Box::new(computer));
    let winner = loop {
        if let Some(winner) = game.turn()? {
            break winner;
        }
        if game.current() == Player::P1 {
            // A full round has passed; show the human their shots so far.
            println!("Your shots:");
            print!("{}", render_board(game.state().player(Player::P2).board()));
        }
    };
    announce(&game, winner);
    Ok(())
}

/// Computer-vs-computer game: run to completion and show the outcome.
fn watch_game(matches: &ArgMatches) -> Result<(), TurnError> {
    let port = RandomStrategy::with_random_fleet("Port", rng_for(matches, 0));
    let starboard = RandomStrategy::with_random_fleet("Starboard", rng_for(matches, 1));

    let mut game = GameLoop::new(Box::new(port), Box::new(starboard));
    let winner = game.run()?;
    for &player in &[Player::P1, Player::P2] {
        println!("Shots against {}:", player);
        print!("{}", render_board(game.state().player(player).board()));
    }
    announce(&game, winner);
    Ok(())
}

fn announce(game: &GameLoop, winner: Player) {
    let shots = game.state().player(winner.opponent()).board().shot_count();
    println!("{} is the winner, in {} shots", winner, shots);
}

/// Build the generator for one player: seeded (offset per player, so the two
/// computers do not mirror each other) or from entropy.
fn rng_for(matches: &ArgMatches, stream: u64) -> StdRng {
    match matches.value_of("seed") {
        // Validated by clap.
        Some(seed) => StdRng::seed_from_u64(seed.parse::<u64>().unwrap().wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

/// Render a shot record as the fixed 10x10 text grid: columns 1-10 across
/// the header, rows A-J down the side, `.` for no shot, `O` for a miss, `X`
/// for a hit.
fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity((SIZE + 3) * (SIZE + 1));
    out.push_str("  1234567890\n");
    for row in 0..SIZE {
        out.push((b'A' + row as u8) as char);
        out.push(' ');
        for col in 0..SIZE {
            let spot = Spot::new(row, col);
            out.push(if board.is_hit(spot) {
                'X'
            } else if board.is_miss(spot) {
                'O'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

/// The stdin/stdout console the interactive strategy speaks through.
struct StandardTerminal;

impl Terminal for StandardTerminal {
    fn query(&mut self, prompt: &str) -> io::Result<String> {
        println!("{}", prompt);
        print!("> ");
        io::stdout().flush()?;
        let mut buf = String::new();
        if io::stdin().read_line(&mut buf)? == 0 {
            // End of input: quit quietly rather than looping on empty reads.
            println!();
            process::exit(0);
        }
        Ok(buf)
    }

    fn info(&mut self, message: &str) {
        println!("{}", message);
    }
}

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Initialize logging with a level taken from the `BROADSIDE_LOG`
/// environment variable. Defaults to warn so game output stays clean.
fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_the_fixed_grid_format() {
        let board = Board::new()
            .with_shot("A1".parse().unwrap(), true)
            .unwrap()
            .with_shot("B2".parse().unwrap(), false)
            .unwrap()
            .with_shot("J10".parse().unwrap(), true)
            .unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  1234567890");
        assert_eq!(lines[1], "A X.........");
        assert_eq!(lines[2], "B .O........");
        assert_eq!(lines[10], "J .........X");
    }
}
