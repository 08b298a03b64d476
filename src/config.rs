// Configuration module for reading Arena.toml
// Geometry, start positions and the agent mode are passed explicitly to the
// board and controller, so independent games can coexist.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::board::checked_cell_count;
use crate::search::DEFAULT_DEPTH_LIMIT;
use crate::types::Position;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub arena: ArenaConfig,
    pub players: PlayersConfig,
    pub agent: AgentConfig,
    pub debug: DebugConfig,
}

/// Grid dimensions
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ArenaConfig {
    pub rows: i32,
    pub cols: i32,
}

/// Starting cells of both agents
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlayersConfig {
    pub human_start: Position,
    pub agent_start: Position,
}

/// Computer agent settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AgentConfig {
    /// "random" or "minimax"
    pub mode: String,
    pub depth_limit: u8,
    pub alpha_beta: bool,
    /// Seed for the random strategy; drawn from the OS when absent
    pub seed: Option<u64>,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Arena.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Arena.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Arena.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the values in Arena.toml
    pub fn default_hardcoded() -> Self {
        Config {
            arena: ArenaConfig { rows: 30, cols: 30 },
            players: PlayersConfig {
                human_start: Position::new(0, 0),
                agent_start: Position::new(13, 4),
            },
            agent: AgentConfig {
                mode: "minimax".to_string(),
                depth_limit: DEFAULT_DEPTH_LIMIT,
                alpha_beta: true,
                seed: None,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "lightcycle_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Arena.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }

    /// Checks geometry and start positions
    pub fn validate(&self) -> Result<(), String> {
        let ArenaConfig { rows, cols } = self.arena;
        checked_cell_count(rows, cols)?;

        let in_bounds = |p: &Position| p.row >= 0 && p.row < rows && p.col >= 0 && p.col < cols;
        let PlayersConfig { human_start, agent_start } = self.players;
        if !in_bounds(&human_start) {
            return Err(format!("Human start {} is outside the arena", human_start));
        }
        if !in_bounds(&agent_start) {
            return Err(format!("Agent start {} is outside the arena", agent_start));
        }
        if human_start == agent_start {
            return Err(format!("Both agents start on {}", human_start));
        }

        Ok(())
    }
}
