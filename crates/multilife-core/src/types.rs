//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a species, in the range `0..species_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Species(pub u8);

impl Species {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single board cell: empty, or occupied by one species
pub type Cell = Option<Species>;

/// 2D position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies on a `size` x `size` board.
    /// The board is bounded, not toroidal: nothing wraps.
    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(10));
        assert!(Position::new(9, 9).in_bounds(10));
        assert!(!Position::new(-1, 0).in_bounds(10));
        assert!(!Position::new(0, 10).in_bounds(10));
        assert!(!Position::new(10, 3).in_bounds(10));
    }

    #[test]
    fn test_position_add() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.add(-1, 1), Position::new(1, 4));
    }

    #[test]
    fn test_species_display() {
        assert_eq!(Species(4).to_string(), "4");
    }
}
