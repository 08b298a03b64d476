//! Game Controller Tests
//!
//! Phase transitions, win conditions and full games against both strategies.

use lightcycle::config::Config;
use lightcycle::game::{Game, Phase, TurnOutcome, AGENT, HUMAN};
use lightcycle::types::{Direction, Player, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

fn small_config(rows: i32, cols: i32, human: Position, agent: Position, mode: &str) -> Config {
    let mut config = Config::default_hardcoded();
    config.arena.rows = rows;
    config.arena.cols = cols;
    config.players.human_start = human;
    config.players.agent_start = agent;
    config.agent.mode = mode.to_string();
    config.agent.depth_limit = 2;
    config.agent.seed = Some(11);
    config
}

fn started(config: &Config) -> Game {
    let mut game = Game::new(config).expect("config should be valid");
    game.start().expect("game should start");
    game
}

/// Picks a random safe direction for the human, or Up when boxed in
fn human_direction(game: &Game, rng: &mut StdRng) -> Direction {
    let safe: Vec<Direction> = Direction::all()
        .iter()
        .copied()
        .filter(|d| game.board().is_free(&d.apply(&game.human_position())))
        .collect();
    safe.choose(rng).copied().unwrap_or(Direction::Up)
}

#[test]
fn test_unknown_mode_is_rejected_at_creation() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(4, 4), "greedy");
    let err = Game::new(&config).err().expect("unknown mode must fail");
    assert!(err.contains("Unrecognized mode"), "unexpected error: {}", err);
}

#[test]
fn test_invalid_geometry_is_rejected_at_creation() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(5, 5), "random");
    assert!(Game::new(&config).is_err());
}

#[test]
fn test_turn_before_start_is_an_error() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(4, 4), "random");
    let mut game = Game::new(&config).unwrap();
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.play_turn(Direction::Down).is_err());
}

#[test]
fn test_start_marks_both_agents() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(4, 4), "random");
    let mut game = started(&config);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.board().occupied_count(HUMAN), 1);
    assert_eq!(game.board().occupied_count(AGENT), 1);
    assert!(game.start().is_err(), "a game can only start once");
}

#[test]
fn test_human_leaving_arena_loses() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(4, 4), "minimax");
    let mut game = started(&config);

    let outcome = game.play_turn(Direction::Up).unwrap();
    assert_eq!(outcome, TurnOutcome::Finished { winner: Player::Two });
    assert_eq!(game.winner(), Some(Player::Two));
}

#[test]
fn test_human_hitting_own_trail_loses() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(4, 4), "minimax");
    let mut game = started(&config);

    assert!(matches!(
        game.play_turn(Direction::Down).unwrap(),
        TurnOutcome::Continue { .. }
    ));
    let outcome = game.play_turn(Direction::Up).unwrap();
    assert_eq!(outcome, TurnOutcome::Finished { winner: Player::Two });
}

#[test]
fn test_stuck_agent_loses() {
    // 1x3 corridor: once the human steps to the middle the agent has nowhere to go
    let config = small_config(1, 3, Position::new(0, 0), Position::new(0, 2), "minimax");
    let mut game = started(&config);

    let outcome = game.play_turn(Direction::Right).unwrap();
    assert_eq!(outcome, TurnOutcome::Finished { winner: Player::One });
    assert_eq!(game.human_position(), Position::new(0, 1));
    assert_eq!(game.agent_position(), Position::new(0, 2));
}

#[test]
fn test_finished_game_ignores_further_input() {
    let config = small_config(5, 5, Position::new(0, 0), Position::new(4, 4), "random");
    let mut game = started(&config);
    game.play_turn(Direction::Left).unwrap();

    let board = game.board().clone();
    let turn = game.turn();
    let outcome = game.play_turn(Direction::Down).unwrap();

    assert_eq!(outcome, TurnOutcome::Finished { winner: Player::Two });
    assert_eq!(game.board(), &board);
    assert_eq!(game.turn(), turn);
}

#[test]
fn test_full_games_keep_trail_invariant() {
    for (seed, mode) in [(1u64, "random"), (2, "minimax"), (3, "random"), (4, "minimax")] {
        let config = small_config(6, 6, Position::new(0, 0), Position::new(5, 5), mode);
        let mut game = started(&config);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut finished = false;
        for _ in 0..36 {
            let direction = human_direction(&game, &mut rng);
            match game.play_turn(direction).unwrap() {
                TurnOutcome::Continue { human, agent } => {
                    let steps = game.turn() as usize + 1;
                    assert_eq!(game.board().occupied_count(HUMAN), steps);
                    assert_eq!(game.board().occupied_count(AGENT), steps);
                    assert_ne!(human, agent);
                }
                TurnOutcome::Finished { .. } => {
                    finished = true;
                    break;
                }
            }
        }
        assert!(finished, "{} game did not end on a 6x6 arena", mode);
    }
}
