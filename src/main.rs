// Terminal driver: renders the arena as text and reads w/a/s/d from stdin
//
// Usage:
//   lightcycle [config_path]

use log::{error, info};
use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use lightcycle::config::Config;
use lightcycle::game::{Game, TurnOutcome};
use lightcycle::types::Direction;

fn render(game: &Game) {
    println!("{}", game.board());
    println!(
        "Turn {} | you (1) at {} | agent (2) at {}",
        game.turn(),
        game.human_position(),
        game.agent_position()
    );
    print!("Move [w/a/s/d]: ");
    let _ = io::stdout().flush();
}

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        }),
        None => Config::load_or_default(),
    };

    let mut game = match Game::new(&config) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = game.start() {
        error!("{}", e);
        process::exit(1);
    }

    info!("Playing against \"{}\" agent type.", game.strategy());
    render(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        for direction in line.chars().filter_map(Direction::from_key) {
            match game.play_turn(direction) {
                Ok(TurnOutcome::Continue { .. }) => {}
                Ok(TurnOutcome::Finished { winner }) => {
                    println!("{}", game.board());
                    println!("Player {} wins!", winner.number());
                    return;
                }
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }

        render(&game);
    }
}
