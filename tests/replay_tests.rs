//! Replay Tests
//!
//! Plays a logged game, then re-runs every minimax decision from the log.

use lightcycle::config::Config;
use lightcycle::game::{Game, TurnOutcome};
use lightcycle::replay::ReplayEngine;
use lightcycle::types::{Direction, Position};
use std::fs;
use std::path::PathBuf;

fn log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lightcycle_{}_{}.jsonl", name, std::process::id()))
}

fn logged_config(path: &PathBuf, mode: &str) -> Config {
    let mut config = Config::default_hardcoded();
    config.arena.rows = 8;
    config.arena.cols = 8;
    config.players.human_start = Position::new(0, 0);
    config.players.agent_start = Position::new(7, 7);
    config.agent.mode = mode.to_string();
    config.agent.depth_limit = 2;
    config.agent.seed = Some(5);
    config.debug.enabled = true;
    config.debug.log_file_path = path.to_string_lossy().into_owned();
    config
}

/// Human walks down the left edge, then along the bottom row
fn play_scripted_game(config: &Config, turns: usize) {
    let mut game = Game::new(config).unwrap();
    game.start().unwrap();
    let script = std::iter::repeat(Direction::Down)
        .take(7)
        .chain(std::iter::repeat(Direction::Right).take(7));
    for direction in script.take(turns) {
        if let TurnOutcome::Finished { .. } = game.play_turn(direction).unwrap() {
            break;
        }
    }
}

#[test]
fn test_minimax_log_replays_exactly() {
    let path = log_path("minimax");
    let config = logged_config(&path, "minimax");
    play_scripted_game(&config, 6);

    let engine = ReplayEngine::new(config.clone(), false);
    let entries = engine.load_log_file(&path).unwrap();
    assert!(!entries.is_empty());
    assert_eq!(entries[0].turn, 1);
    assert_eq!(entries[0].human_position, Position::new(1, 0));
    assert!(entries.iter().all(|e| e.mode == "minimax"));

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), entries.len());
    assert!(results.iter().all(|r| r.matches));

    let stats = engine.generate_stats(&results);
    assert_eq!(stats.mismatches, 0);
    assert_eq!(stats.match_rate, 100.0);

    let first = &entries[0];
    let direction = Direction::between(&first.agent_position, &first.agent_move.unwrap()).unwrap();
    assert!(engine
        .validate_expected_moves(&entries, &[(1, vec![direction])])
        .is_ok());

    let wrong: Vec<Direction> = Direction::all()
        .iter()
        .copied()
        .filter(|d| *d != direction)
        .collect();
    assert!(engine.validate_expected_moves(&entries, &[(1, wrong)]).is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_random_entries_are_not_replayed() {
    let path = log_path("random");
    let config = logged_config(&path, "random");
    play_scripted_game(&config, 3);

    let engine = ReplayEngine::new(config, false);
    let entries = engine.load_log_file(&path).unwrap();
    assert!(!entries.is_empty());
    assert!(engine.replay_entry(&entries[0]).is_err());
    assert!(engine.replay_all(&entries).is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_turn_is_reported() {
    let path = log_path("missing");
    let config = logged_config(&path, "minimax");
    play_scripted_game(&config, 2);

    let engine = ReplayEngine::new(config, false);
    let entries = engine.load_log_file(&path).unwrap();
    assert!(engine.replay_turns(&entries, &[99]).is_err());
    assert_eq!(engine.replay_turns(&entries, &[1]).unwrap().len(), 1);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_replay_uses_logged_search_settings() {
    let path = log_path("settings");
    let config = logged_config(&path, "minimax");
    play_scripted_game(&config, 4);

    let mut later = config.clone();
    later.agent.depth_limit = 5;
    later.agent.alpha_beta = false;
    let engine = ReplayEngine::new(later, false);

    let entries = engine.load_log_file(&path).unwrap();
    assert!(!entries.is_empty());
    assert!(entries
        .iter()
        .all(|e| e.depth_limit == Some(2) && e.alpha_beta == Some(true)));

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), entries.len());
    assert!(results.iter().all(|r| r.matches && r.depth == 2));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_random_entries_carry_no_search_settings() {
    let path = log_path("random_settings");
    let config = logged_config(&path, "random");
    play_scripted_game(&config, 2);

    let engine = ReplayEngine::new(config, false);
    let entries = engine.load_log_file(&path).unwrap();
    assert!(entries
        .iter()
        .all(|e| e.depth_limit.is_none() && e.alpha_beta.is_none()));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_board_with_missing_cells_is_an_error() {
    let path = log_path("short_board");
    let line = concat!(
        r#"{"turn":1,"mode":"minimax","depth_limit":2,"alpha_beta":true,"#,
        r#""human_position":{"row":0,"col":0},"agent_position":{"row":2,"col":2},"#,
        r#""agent_move":null,"board":{"rows":3,"cols":3,"cells":["Empty"]},"#,
        r#""timestamp":"2024-01-01T00:00:00+00:00"}"#
    );
    fs::write(&path, format!("{}\n", line)).unwrap();

    let engine = ReplayEngine::new(Config::default_hardcoded(), false);
    let err = engine.load_log_file(&path).unwrap_err();
    assert!(err.contains("line 1"));
    assert!(err.contains("needs 9 cells"));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_malformed_log_line_is_an_error() {
    let path = log_path("malformed");
    fs::write(&path, "{\"turn\": 1}\n").unwrap();

    let engine = ReplayEngine::new(Config::default_hardcoded(), false);
    assert!(engine.load_log_file(&path).is_err());

    let _ = fs::remove_file(&path);
}
