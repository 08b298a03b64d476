// Single-source shortest paths over empty cells
//
// Edge weights are uniform, but the search is a priority-driven relaxation so
// that non-uniform step costs only need a different `+ 1` below.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::board::Board;
use crate::types::{Cell, Position};

/// Shortest step count from one source to every cell of a board snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    cols: i32,
    distances: Vec<Option<u32>>,
}

impl DistanceField {
    fn unreachable(board: &Board) -> Self {
        let (_, cols) = board.dimensions();
        DistanceField {
            cols,
            distances: vec![None; board.len()],
        }
    }

    /// Distance to a position, None when unreachable or out of bounds
    pub fn get(&self, pos: &Position) -> Option<u32> {
        if pos.row < 0 || pos.col < 0 || pos.col >= self.cols {
            return None;
        }
        let idx = (pos.row * self.cols + pos.col) as usize;
        self.distances.get(idx).copied().flatten()
    }

    /// Distance by flat board index
    pub fn at(&self, index: usize) -> Option<u32> {
        self.distances[index]
    }

    /// Number of cells with a finite distance, including the source
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Computes the shortest step count from `source` to every reachable cell.
///
/// Occupied cells cannot be entered, but the source itself is always seeded
/// with distance 0 even when occupied (a live agent sits on its own trail).
/// A source outside the board produces an all-unreachable field.
pub fn reachability(board: &Board, source: Position) -> DistanceField {
    let mut field = DistanceField::unreachable(board);

    let source_idx = match board.index_of(&source) {
        Some(idx) => idx,
        None => return field,
    };

    // Occupied cells are finalized up front, except the source
    let mut explored: Vec<bool> = (0..board.len())
        .map(|idx| board.cell_at(idx) != Cell::Empty)
        .collect();
    explored[source_idx] = false;
    field.distances[source_idx] = Some(0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0u32, source)));

    while let Some(Reverse((dist, current))) = frontier.pop() {
        let current_idx = match board.index_of(&current) {
            Some(idx) => idx,
            None => continue,
        };
        if explored[current_idx] {
            continue;
        }
        explored[current_idx] = true;

        for next in board.legal_moves(&current) {
            let next_idx = match board.index_of(&next) {
                Some(idx) => idx,
                None => continue,
            };
            if explored[next_idx] {
                continue;
            }

            let candidate = dist + 1;
            let improves = field.distances[next_idx].map_or(true, |known| candidate < known);
            if improves {
                field.distances[next_idx] = Some(candidate);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    field
}
