// Game controller: turn alternation and the win condition
//
// Idle -> Playing on start(); each accepted human direction plays one full
// turn (human move, then the agent's reply). Finished is terminal.

use log::info;

use crate::agent::{Agent, Strategy};
use crate::board::Board;
use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::types::{Direction, Player, Position};

/// The human always plays as player one, the agent as player two
pub const HUMAN: Player = Player::One;
pub const AGENT: Player = Player::Two;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Finished { winner: Player },
}

/// Signal reported to the presentation layer after each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue { human: Position, agent: Position },
    Finished { winner: Player },
}

pub struct Game {
    board: Board,
    human: Position,
    agent_position: Position,
    agent: Agent,
    phase: Phase,
    turn: u32,
    logger: DebugLogger,
}

impl Game {
    /// Creates an idle game from the configuration.
    /// Fails on invalid geometry or an unrecognized agent mode.
    pub fn new(config: &Config) -> Result<Self, String> {
        config.validate()?;
        let strategy = Strategy::from_config(&config.agent)?;
        let logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);

        Ok(Game {
            board: Board::from_config(&config.arena),
            human: config.players.human_start,
            agent_position: config.players.agent_start,
            agent: Agent::new(AGENT, strategy, config.agent.seed),
            phase: Phase::Idle,
            turn: 0,
            logger,
        })
    }

    /// Places both agents on their starting cells and begins play
    pub fn start(&mut self) -> Result<(), String> {
        if self.phase != Phase::Idle {
            return Err(format!("Cannot start a game in phase {:?}", self.phase));
        }

        self.board.mark_occupied(self.human, HUMAN);
        self.board.mark_occupied(self.agent_position, AGENT);
        self.phase = Phase::Playing;

        info!(
            "GAME START: {}x{} arena, human at {}, agent at {}",
            self.board.dimensions().0,
            self.board.dimensions().1,
            self.human,
            self.agent_position
        );
        Ok(())
    }

    /// Plays one turn for the given human direction.
    ///
    /// # Returns
    /// * `Ok(TurnOutcome)` - Whether the game continues or who won
    /// * `Err(String)` - The game has not been started
    pub fn play_turn(&mut self, direction: Direction) -> Result<TurnOutcome, String> {
        match self.phase {
            Phase::Idle => return Err("Game has not started".to_string()),
            Phase::Finished { winner } => return Ok(TurnOutcome::Finished { winner }),
            Phase::Playing => {}
        }

        self.turn += 1;

        let target = direction.apply(&self.human);
        if !self.board.is_free(&target) {
            info!("Turn {}: human move {} to {} is illegal", self.turn, direction.as_str(), target);
            return Ok(self.finish(AGENT));
        }
        self.board.mark_occupied(target, HUMAN);
        self.human = target;

        let decision = self
            .agent
            .decide_move(&mut self.board, self.agent_position, self.human);

        if self.logger.is_enabled() {
            self.logger.log_decision(
                self.turn,
                self.agent.strategy(),
                self.human,
                self.agent_position,
                decision,
                &self.board,
            );
        }

        match decision {
            Some(next) => {
                self.board.mark_occupied(next, AGENT);
                self.agent_position = next;
                Ok(TurnOutcome::Continue {
                    human: self.human,
                    agent: self.agent_position,
                })
            }
            None => {
                info!("Turn {}: agent has no move", self.turn);
                Ok(self.finish(HUMAN))
            }
        }
    }

    fn finish(&mut self, winner: Player) -> TurnOutcome {
        self.phase = Phase::Finished { winner };
        info!("GAME OVER after {} turns: player {} wins", self.turn, winner.number());
        TurnOutcome::Finished { winner }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn human_position(&self) -> Position {
        self.human
    }

    pub fn agent_position(&self) -> Position {
        self.agent_position
    }

    pub fn strategy(&self) -> Strategy {
        self.agent.strategy()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}
