// Voronoi territory heuristic
//
// Every cell is credited to whichever agent reaches it first. Ties go to the
// maximizer. The score is the ratio of maximizer cells to minimizer cells.

use crate::board::Board;
use crate::reachability::reachability;
use crate::types::Position;

/// Heuristic value; `f64::INFINITY` when the minimizer owns no territory
pub type Score = f64;

/// Adjusted territory counts for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerritoryCounts {
    pub maximizer: i64,
    pub minimizer: i64,
}

impl TerritoryCounts {
    /// Converts the counts into a heuristic score
    pub fn score(&self) -> Score {
        if self.maximizer <= 0 {
            0.0
        } else if self.minimizer <= 0 {
            f64::INFINITY
        } else {
            self.maximizer as f64 / self.minimizer as f64
        }
    }
}

/// Partitions the board between the two agents by shortest-path distance.
///
/// Each count excludes the agent's own cell, which is always closest to itself.
pub fn territory(board: &Board, maximizer: Position, minimizer: Position) -> TerritoryCounts {
    let max_field = reachability(board, maximizer);
    let min_field = reachability(board, minimizer);

    let mut max_count: i64 = 0;
    let mut min_count: i64 = 0;

    for idx in 0..board.len() {
        match (max_field.at(idx), min_field.at(idx)) {
            (Some(a), Some(b)) if a < b => max_count += 1,
            (Some(a), Some(b)) if a > b => min_count += 1,
            // Equal finite distance: deliberately credited to the maximizer
            (Some(_), Some(_)) => max_count += 1,
            (Some(_), None) => max_count += 1,
            (None, Some(_)) => min_count += 1,
            (None, None) => {}
        }
    }

    TerritoryCounts {
        maximizer: max_count - 1,
        minimizer: min_count - 1,
    }
}

/// Scores a position for the maximizer. Higher is better; never negative.
pub fn evaluate(board: &Board, maximizer: Position, minimizer: Position) -> Score {
    territory(board, maximizer, minimizer).score()
}
