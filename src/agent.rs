// Computer agent strategies
//
// The configured mode string is resolved once into a closed `Strategy` enum
// when the game is created; an unknown mode is a configuration error.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::fmt;

use crate::board::Board;
use crate::config::AgentConfig;
use crate::search::Minimax;
use crate::types::{Player, Position};

/// How the computer agent picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random legal move
    Random,
    /// Depth-limited minimax over the territory heuristic
    Minimax { depth_limit: u8, alpha_beta: bool },
}

impl Strategy {
    /// Resolves a mode name ("random" or "minimax") with its parameters
    ///
    /// # Arguments
    /// * `config` - Agent section of the configuration
    ///
    /// # Returns
    /// * `Result<Strategy, String>` - Resolved strategy or error message for unknown modes
    pub fn from_config(config: &AgentConfig) -> Result<Self, String> {
        match config.mode.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "minimax" => Ok(Strategy::Minimax {
                depth_limit: config.depth_limit,
                alpha_beta: config.alpha_beta,
            }),
            _ => Err(format!("Unrecognized mode {}", config.mode)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Minimax { .. } => "minimax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Minimax { depth_limit, alpha_beta } => write!(
                f,
                "minimax (depth {}, alpha-beta {})",
                depth_limit,
                if *alpha_beta { "on" } else { "off" }
            ),
        }
    }
}

/// Computer-controlled agent
pub struct Agent {
    player: Player,
    strategy: Strategy,
    rng: StdRng,
}

impl Agent {
    /// Creates an agent playing as `player`.
    /// The random strategy is reproducible when a seed is given.
    pub fn new(player: Player, strategy: Strategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!("Agent {} using {} strategy", player.number(), strategy);
        Agent { player, strategy, rng }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Chooses the agent's next position, or None when it concedes.
    /// The board is borrowed mutably for simulation but returned unchanged.
    pub fn decide_move(
        &mut self,
        board: &mut Board,
        position: Position,
        opponent: Position,
    ) -> Option<Position> {
        match self.strategy {
            Strategy::Random => {
                let moves = board.legal_moves(&position);
                let choice = moves.choose(&mut self.rng).copied();
                debug!("Random agent picked {:?} from {} moves", choice, moves.len());
                choice
            }
            Strategy::Minimax { depth_limit, alpha_beta } => {
                let mut search = Minimax::new(self.player, depth_limit).with_alpha_beta(alpha_beta);
                search.search(board, position, opponent).best_move
            }
        }
    }
}
