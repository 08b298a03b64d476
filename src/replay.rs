// Replay module for re-running logged agent decisions
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Re-run the minimax search on each logged board
// 3. Compare logged vs replayed moves
// 4. Generate a summary report

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogEntry;
use crate::game::AGENT;
use crate::search::Minimax;
use crate::types::{Direction, Position};

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: u32,
    pub original_move: Option<Position>,
    pub replayed_move: Option<Position>,
    pub matches: bool,
    pub replayed_utility: f64,
    /// Depth limit the turn was replayed with
    pub depth: u8,
    pub nodes: u64,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    config: Config,
    verbose: bool,
}

impl ReplayEngine {
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine { config, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DebugLogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DebugLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result.
    /// Only minimax decisions are reproducible; random ones are rejected.
    /// The logged depth and alpha-beta setting win over the current config,
    /// which only fills in for entries that lack them.
    pub fn replay_entry(&self, entry: &DebugLogEntry) -> Result<ReplayResult, String> {
        if entry.mode != "minimax" {
            return Err(format!(
                "Turn {} was decided by the {} strategy and cannot be replayed",
                entry.turn, entry.mode
            ));
        }

        let start_time = Instant::now();
        let mut board = entry.board.clone();
        let depth_limit = entry.depth_limit.unwrap_or(self.config.agent.depth_limit);
        let alpha_beta = entry.alpha_beta.unwrap_or(self.config.agent.alpha_beta);
        let mut search = Minimax::new(AGENT, depth_limit).with_alpha_beta(alpha_beta);
        let result = search.search(&mut board, entry.agent_position, entry.human_position);

        if board != entry.board {
            return Err(format!("Turn {}: search left the board modified", entry.turn));
        }

        let matches = result.best_move == entry.agent_move;
        let replay = ReplayResult {
            turn: entry.turn,
            original_move: entry.agent_move,
            replayed_move: result.best_move,
            matches,
            replayed_utility: result.utility,
            depth: result.depth,
            nodes: result.nodes,
            computation_time_us: start_time.elapsed().as_micros(),
        };

        if self.verbose {
            if matches {
                info!(
                    "Turn {}: MATCH - {:?} (utility: {}, nodes: {}, time: {}us)",
                    replay.turn,
                    replay.replayed_move,
                    replay.replayed_utility,
                    replay.nodes,
                    replay.computation_time_us
                );
            } else {
                warn!(
                    "Turn {}: MISMATCH - Original: {:?}, Replayed: {:?} (utility: {})",
                    replay.turn, replay.original_move, replay.replayed_move, replay.replayed_utility
                );
            }
        }

        Ok(replay)
    }

    /// Replays all entries, skipping the ones that cannot be replayed
    pub fn replay_all(&self, entries: &[DebugLogEntry]) -> Vec<ReplayResult> {
        let mut results = Vec::new();

        for entry in entries {
            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                }
            }
        }

        results
    }

    /// Replays specific turns
    pub fn replay_turns(
        &self,
        entries: &[DebugLogEntry],
        turn_numbers: &[u32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;

            results.push(self.replay_entry(entry)?);
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a summary report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n===========================================================");
        println!("                    REPLAY REPORT");
        println!("===========================================================");
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("===========================================================\n");

        if !results.is_empty() {
            let avg_time: f64 = results.iter().map(|r| r.computation_time_us as f64).sum::<f64>()
                / results.len() as f64;
            let avg_nodes: f64 =
                results.iter().map(|r| r.nodes as f64).sum::<f64>() / results.len() as f64;

            let max_depth = results.iter().map(|r| r.depth).max().unwrap_or(0);
            println!("Max Search Depth:           {}", max_depth);
            println!("Average Nodes:              {:.1}", avg_nodes);
            println!("Average Computation Time:   {:.1}us\n", avg_time);
        }

        for result in results.iter().filter(|r| !r.matches) {
            println!(
                "Turn {}: {:?} -> {:?} (utility: {})",
                result.turn, result.original_move, result.replayed_move, result.replayed_utility
            );
        }
    }

    /// Validates that the logged agent moves at the given turns went in one
    /// of the acceptable directions
    pub fn validate_expected_moves(
        &self,
        entries: &[DebugLogEntry],
        expected_moves: &[(u32, Vec<Direction>)],
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn)
                .ok_or_else(|| format!("Turn {} not found in log", turn))?;

            let actual = entry
                .agent_move
                .and_then(|to| Direction::between(&entry.agent_position, &to))
                .ok_or_else(|| format!("Turn {}: agent did not move", turn))?;

            if !acceptable.contains(&actual) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    actual.as_str()
                ));
            }
        }

        Ok(())
    }
}
