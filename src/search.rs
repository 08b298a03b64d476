// Depth-limited minimax over the shared board
//
// Moves are simulated by marking the board in place and undone before each
// frame returns, so a search leaves the board exactly as it found it.
// Alpha-beta pruning is optional and never changes the chosen move.

use log::debug;
use std::time::Instant;

use crate::board::Board;
use crate::evaluator::{evaluate, Score};
use crate::types::{Player, Position};

/// Default search depth in plies
pub const DEFAULT_DEPTH_LIMIT: u8 = 4;

/// Outcome of a root search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen move, None when the maximizer has no legal move
    pub best_move: Option<Position>,
    /// Utility of the chosen move
    pub utility: Score,
    /// Depth limit the search ran with
    pub depth: u8,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Minimax searcher for one deciding agent
#[derive(Debug, Clone)]
pub struct Minimax {
    maximizer: Player,
    depth_limit: u8,
    alpha_beta: bool,
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher deciding for `maximizer`
    pub fn new(maximizer: Player, depth_limit: u8) -> Self {
        Minimax {
            maximizer,
            depth_limit,
            alpha_beta: false,
            nodes: 0,
        }
    }

    /// Enables or disables alpha-beta pruning
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    pub fn depth_limit(&self) -> u8 {
        self.depth_limit
    }

    /// Nodes visited by the most recent call
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the maximizer's move.
    ///
    /// Candidates are tried in move-generation order and a candidate replaces
    /// the current best only when its utility is strictly greater (the best
    /// starts at 0). If no candidate scores above 0 there is no move and the
    /// agent concedes, even when legal moves remain.
    pub fn search(
        &mut self,
        board: &mut Board,
        maximizer_pos: Position,
        minimizer_pos: Position,
    ) -> SearchResult {
        let start_time = Instant::now();
        // Root counts as a node, same as the recursive frames
        self.nodes = 1;

        let moves = board.legal_moves(&maximizer_pos);
        let child_depth = self.depth_limit.saturating_sub(1);

        let mut best_move = None;
        let mut best_utility: Score = 0.0;

        for candidate in &moves {
            board.mark_occupied(*candidate, self.maximizer);
            let utility = self.minimize(
                board,
                *candidate,
                minimizer_pos,
                child_depth,
                best_utility,
                f64::INFINITY,
            );
            board.clear_occupied(*candidate, self.maximizer);

            if utility > best_utility {
                best_utility = utility;
                best_move = Some(*candidate);
            }
        }

        debug!(
            "Minimax depth {}: move {:?}, utility {}, nodes {}, time {}us",
            self.depth_limit,
            best_move,
            best_utility,
            self.nodes,
            start_time.elapsed().as_micros()
        );

        SearchResult {
            best_move,
            utility: best_utility,
            depth: self.depth_limit,
            nodes: self.nodes,
        }
    }

    /// Minimax value of a position with `depth` plies remaining.
    /// At depth 0 this is exactly the territory evaluator's score.
    pub fn utility(
        &mut self,
        board: &mut Board,
        maximizer_pos: Position,
        minimizer_pos: Position,
        depth: u8,
        maximizing: bool,
    ) -> Score {
        // The root frame below counts itself, so the total includes it as in search
        self.nodes = 0;
        if maximizing {
            self.maximize(board, maximizer_pos, minimizer_pos, depth, 0.0, f64::INFINITY)
        } else {
            self.minimize(board, maximizer_pos, minimizer_pos, depth, 0.0, f64::INFINITY)
        }
    }

    fn maximize(
        &mut self,
        board: &mut Board,
        maximizer_pos: Position,
        minimizer_pos: Position,
        depth: u8,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(board, maximizer_pos, minimizer_pos);
        }

        // Stuck maximizer keeps the floor value of 0
        let mut best: Score = 0.0;
        for candidate in board.legal_moves(&maximizer_pos) {
            board.mark_occupied(candidate, self.maximizer);
            let value = self.minimize(board, candidate, minimizer_pos, depth - 1, alpha, beta);
            board.clear_occupied(candidate, self.maximizer);

            if value > best {
                best = value;
            }
            if self.alpha_beta {
                if best >= beta {
                    break;
                }
                if best > alpha {
                    alpha = best;
                }
            }
        }
        best
    }

    fn minimize(
        &mut self,
        board: &mut Board,
        maximizer_pos: Position,
        minimizer_pos: Position,
        depth: u8,
        alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(board, maximizer_pos, minimizer_pos);
        }

        let minimizer = self.maximizer.opponent();

        // Stuck minimizer is the best outcome for the maximizer
        let mut best: Score = f64::INFINITY;
        for candidate in board.legal_moves(&minimizer_pos) {
            board.mark_occupied(candidate, minimizer);
            let value = self.maximize(board, maximizer_pos, candidate, depth - 1, alpha, beta);
            board.clear_occupied(candidate, minimizer);

            if value < best {
                best = value;
            }
            if self.alpha_beta {
                if best <= alpha {
                    break;
                }
                if best < beta {
                    beta = best;
                }
            }
        }
        best
    }
}

/// Convenience wrapper: plain minimax move for `maximizer`
pub fn best_move(
    board: &mut Board,
    maximizer: Player,
    maximizer_pos: Position,
    minimizer_pos: Position,
    depth_limit: u8,
) -> Option<Position> {
    Minimax::new(maximizer, depth_limit)
        .search(board, maximizer_pos, minimizer_pos)
        .best_move
}
