// Debug logging module for per-turn decision records
//
// Each agent decision is appended to a JSONL file together with the board it
// was made on, so the replay engine can re-run the search later.

use log::error;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use crate::agent::Strategy;
use crate::board::Board;
use crate::types::Position;

/// A single debug log entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DebugLogEntry {
    pub turn: u32,
    /// Mode name of the deciding agent
    pub mode: String,
    /// Search depth of a minimax decision
    pub depth_limit: Option<u8>,
    pub alpha_beta: Option<bool>,
    pub human_position: Position,
    /// Agent position before its move
    pub agent_position: Position,
    /// Chosen move, null when the agent could not move
    pub agent_move: Option<Position>,
    /// Board the decision was made on
    pub board: Board,
    pub timestamp: String,
}

/// Synchronous JSONL writer; a disabled logger ignores every call
pub struct DebugLogger {
    writer: Option<BufWriter<File>>,
}

impl DebugLogger {
    /// Creates a new debug logger.
    /// If enabled, the log file is created (truncating an existing one).
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return DebugLogger::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    writer: Some(BufWriter::new(file)),
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                DebugLogger::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger { writer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Appends one decision record. Write failures are logged, never propagated.
    pub fn log_decision(
        &mut self,
        turn: u32,
        strategy: Strategy,
        human_position: Position,
        agent_position: Position,
        agent_move: Option<Position>,
        board: &Board,
    ) {
        let writer = match self.writer.as_mut() {
            Some(writer) => writer,
            None => return,
        };

        let (depth_limit, alpha_beta) = match strategy {
            Strategy::Minimax { depth_limit, alpha_beta } => (Some(depth_limit), Some(alpha_beta)),
            Strategy::Random => (None, None),
        };

        let entry = DebugLogEntry {
            turn,
            mode: strategy.name().to_string(),
            depth_limit,
            alpha_beta,
            human_position,
            agent_position,
            agent_move,
            board: board.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match serde_json::to_string(&entry) {
            Ok(json_line) => {
                if let Err(e) = writeln!(writer, "{}", json_line) {
                    error!("Failed to write debug log entry: {}", e);
                } else if let Err(e) = writer.flush() {
                    error!("Failed to flush debug log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
            }
        }
    }
}
