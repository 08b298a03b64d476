// Arena occupancy grid and move generation
//
// The board is a flat row-major vector of cells. Agent positions are not stored
// here; the game controller owns them and the search passes them explicitly.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::config::ArenaConfig;
use crate::types::{Cell, Direction, Player, Position};

/// Largest arena accepted from a config or a log. Keeps `row * cols`
/// inside `i32` for every in-bounds position.
pub const MAX_CELLS: i64 = 1 << 20;

/// Occupancy grid of the arena
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

/// Unchecked board as it appears in a debug log
#[derive(Deserialize)]
struct BoardSnapshot {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = String;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let expected = checked_cell_count(snapshot.rows, snapshot.cols)?;
        if snapshot.cells.len() != expected {
            return Err(format!(
                "Board {}x{} needs {} cells, found {}",
                snapshot.rows,
                snapshot.cols,
                expected,
                snapshot.cells.len()
            ));
        }
        Ok(Board {
            rows: snapshot.rows,
            cols: snapshot.cols,
            cells: snapshot.cells,
        })
    }
}

/// Number of cells of a `rows` x `cols` arena, or an error when either side is
/// not positive or the area exceeds `MAX_CELLS`
pub fn checked_cell_count(rows: i32, cols: i32) -> Result<usize, String> {
    if rows <= 0 || cols <= 0 {
        return Err(format!("Arena must be non-empty, got {}x{}", rows, cols));
    }
    let area = i64::from(rows) * i64::from(cols);
    if area > MAX_CELLS {
        return Err(format!(
            "Arena {}x{} has {} cells, more than the limit of {}",
            rows, cols, area, MAX_CELLS
        ));
    }
    Ok(area as usize)
}

impl Board {
    /// Creates an empty board with the given dimensions
    pub fn new(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Creates an empty board sized by the arena configuration
    pub fn from_config(config: &ArenaConfig) -> Self {
        Board::new(config.rows, config.cols)
    }

    /// Parses a board from text rows: `.` is empty, `1` and `2` are trails
    pub fn from_rows(rows: &[&str]) -> Result<Self, String> {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as i32;
        let mut board = Board::new(height, width);

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(format!("Row {} has inconsistent width", row));
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '1' => board.mark_occupied(pos, Player::One),
                    '2' => board.mark_occupied(pos, Player::Two),
                    other => return Err(format!("Invalid cell '{}' at {}", other, pos)),
                }
            }
        }

        Ok(board)
    }

    /// Returns (rows, cols)
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Flat index of an in-bounds position
    pub fn index_of(&self, pos: &Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.row * self.cols + pos.col) as usize)
        } else {
            None
        }
    }

    /// Position of a flat index
    pub fn position_of(&self, index: usize) -> Position {
        let cols = self.cols.max(1) as usize;
        Position::new((index / cols) as i32, (index % cols) as i32)
    }

    /// Cell state at a position, None when out of bounds
    pub fn occupancy(&self, pos: &Position) -> Option<Cell> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    /// Cell state by flat index
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Whether an agent may step onto this position: in bounds and empty
    pub fn is_free(&self, pos: &Position) -> bool {
        matches!(self.occupancy(pos), Some(Cell::Empty))
    }

    /// Marks a cell as occupied by the given player. Out-of-bounds positions are ignored.
    pub fn mark_occupied(&mut self, pos: Position, player: Player) {
        if let Some(idx) = self.index_of(&pos) {
            self.cells[idx] = Cell::Occupied(player);
        }
    }

    /// Clears a cell back to empty if it is occupied by the given player
    pub fn clear_occupied(&mut self, pos: Position, player: Player) {
        if let Some(idx) = self.index_of(&pos) {
            debug_assert_eq!(self.cells[idx], Cell::Occupied(player));
            if self.cells[idx] == Cell::Occupied(player) {
                self.cells[idx] = Cell::Empty;
            }
        }
    }

    /// Generates all legal one-step moves from a position.
    /// A move is legal if it stays in bounds and lands on an empty cell.
    pub fn legal_moves(&self, pos: &Position) -> Vec<Position> {
        Direction::all()
            .iter()
            .map(|dir| dir.apply(pos))
            .filter(|next| self.is_free(next))
            .collect()
    }

    /// Number of cells occupied by a player
    pub fn occupied_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self.occupancy(&Position::new(row, col)) {
                    Some(Cell::Occupied(Player::One)) => '1',
                    Some(Cell::Occupied(Player::Two)) => '2',
                    _ => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
