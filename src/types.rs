// Core game types shared by the board, the search and the controller

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two agents on the arena
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Human-controlled agent
    One,
    /// Computer-controlled agent
    Two,
}

impl Player {
    /// Returns the opposing player
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to the user (1 or 2)
    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// State of a single arena cell
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

/// (row, col) coordinate on the arena, 0-indexed.
/// Signed so that a step off the grid is representable and rejected by bounds checks.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, ignoring obstacles
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        ((self.row - other.row).abs() + (self.col - other.col).abs()) as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four movement directions. Rows grow downwards, so `Up` decrements the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in move-generation order: row + 1, row - 1, col - 1, col + 1
    pub fn all() -> [Direction; 4] {
        [Direction::Down, Direction::Up, Direction::Left, Direction::Right]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Maps a keyboard key (w/s/a/d) to a direction
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Calculates the next position when moving in this direction
    pub fn apply(&self, position: &Position) -> Position {
        match self {
            Direction::Up => Position::new(position.row - 1, position.col),
            Direction::Down => Position::new(position.row + 1, position.col),
            Direction::Left => Position::new(position.row, position.col - 1),
            Direction::Right => Position::new(position.row, position.col + 1),
        }
    }

    /// Direction that leads from `from` to an orthogonally adjacent `to`
    pub fn between(from: &Position, to: &Position) -> Option<Direction> {
        Direction::all()
            .iter()
            .copied()
            .find(|dir| dir.apply(from) == *to)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_order_matches_move_generation() {
        let origin = Position::new(5, 5);
        let steps: Vec<Position> = Direction::all().iter().map(|d| d.apply(&origin)).collect();
        assert_eq!(
            steps,
            vec![
                Position::new(6, 5),
                Position::new(4, 5),
                Position::new(5, 4),
                Position::new(5, 6),
            ]
        );
    }

    #[test]
    fn test_keys_map_to_directions() {
        assert_eq!(Direction::from_key('w'), Some(Direction::Up));
        assert_eq!(Direction::from_key('S'), Some(Direction::Down));
        assert_eq!(Direction::from_key('a'), Some(Direction::Left));
        assert_eq!(Direction::from_key('d'), Some(Direction::Right));
        assert_eq!(Direction::from_key('q'), None);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_between_adjacent_positions() {
        let from = Position::new(2, 2);
        assert_eq!(Direction::between(&from, &Position::new(1, 2)), Some(Direction::Up));
        assert_eq!(Direction::between(&from, &Position::new(3, 3)), None);
    }

    #[test]
    fn test_player_opponent_and_number() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.number(), 2);
    }
}
