// Standalone replay tool for lightcycle debug logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --validate <T:M,...>   Validate logged agent directions
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Arena.toml (default: Arena.toml)

use std::env;
use std::process;

use lightcycle::config::Config;
use lightcycle::replay::ReplayEngine;
use lightcycle::types::Direction;

fn print_usage() {
    eprintln!("Lightcycle Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --validate <T:M,...>    Validate agent moves (format: turn:move|move,...)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Arena.toml (default: Arena.toml)");
    eprintln!("  --help                  Show this help message");
}

fn parse_turns(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn parse_expected_moves(s: &str) -> Result<Vec<(u32, Vec<Direction>)>, String> {
    s.split(',')
        .map(|pair| {
            let parts: Vec<&str> = pair.trim().split(':').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid format '{}'. Expected 'turn:move'", pair));
            }

            let turn = parts[0]
                .parse::<u32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", parts[0], e))?;

            let moves: Result<Vec<Direction>, String> =
                parts[1].split('|').map(|m| m.trim().parse::<Direction>()).collect();

            Ok((turn, moves?))
        })
        .collect()
}

enum Mode {
    All,
    Turns(Vec<u32>),
    Validate(Vec<(u32, Vec<Direction>)>),
}

fn fail(message: String) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(if args.iter().any(|a| a == "--help") { 0 } else { 1 });
    }

    let log_file = &args[1];
    let mut config_path = "Arena.toml".to_string();
    let mut verbose = false;
    let mut mode = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--all", _) => mode = Some(Mode::All),
            ("--verbose", _) => verbose = true,
            ("--turns", Some(v)) => {
                mode = Some(Mode::Turns(parse_turns(v).unwrap_or_else(|e| fail(e))));
                i += 1;
            }
            ("--validate", Some(v)) => {
                mode = Some(Mode::Validate(
                    parse_expected_moves(v).unwrap_or_else(|e| fail(e)),
                ));
                i += 1;
            }
            ("--config", Some(v)) => {
                config_path = v.clone();
                i += 1;
            }
            (flag, _) => {
                print_usage();
                fail(format!("Unknown option or missing argument '{}'", flag));
            }
        }
        i += 1;
    }

    let mode = mode.unwrap_or_else(|| fail("Must specify --all, --turns, or --validate".to_string()));

    let config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });

    println!("Loaded configuration from: {}", config_path);
    println!("Replay log file: {}", log_file);
    println!();

    let engine = ReplayEngine::new(config, verbose);

    let entries = engine
        .load_log_file(log_file)
        .unwrap_or_else(|e| fail(format!("Could not load log file: {}", e)));

    if entries.is_empty() {
        fail("Log file is empty".to_string());
    }

    println!("Loaded {} log entries\n", entries.len());

    match mode {
        Mode::All => {
            println!("Replaying all {} turns...", entries.len());
            let results = engine.replay_all(&entries);
            engine.print_report(&results);
        }
        Mode::Turns(turns) => {
            println!("Replaying {} specific turn(s)...", turns.len());
            let results = engine
                .replay_turns(&entries, &turns)
                .unwrap_or_else(|e| fail(format!("Replay failed: {}", e)));
            engine.print_report(&results);
        }
        Mode::Validate(expected) => {
            println!("Validating {} expected move(s)...\n", expected.len());
            match engine.validate_expected_moves(&entries, &expected) {
                Ok(()) => println!("All expected moves validated successfully!"),
                Err(e) => fail(format!("Validation failed: {}", e)),
            }
        }
    }
}
