//! Grid coordinates with torus wrap-around.
//!
//! Positions are plain `u32` pairs.  All movement goes through
//! [`Position::step`], which wraps modulo the board size, so a position
//! produced by stepping is always in bounds.  The only out-of-bounds value in
//! circulation is the [`Position::vanished`] sentinel.

use std::fmt;

/// A cell coordinate on a `width × height` torus.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Sentinel recorded when a wild traveler disappears: one past the last
    /// column and row, so downstream consumers can tell it is off the board.
    #[inline]
    pub const fn vanished(width: u32, height: u32) -> Self {
        Self { x: width, y: height }
    }

    /// `true` if the position lies on a `width × height` board.
    #[inline]
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// The neighbouring position in `dir`, wrapping at the edges.
    pub fn step(self, dir: Direction, width: u32, height: u32) -> Position {
        match dir {
            Direction::Up    => Position::new(self.x, (self.y + height - 1) % height),
            Direction::Down  => Position::new(self.x, (self.y + 1) % height),
            Direction::Left  => Position::new((self.x + width - 1) % width, self.y),
            Direction::Right => Position::new((self.x + 1) % width, self.y),
        }
    }

    /// `true` if `other` is exactly one torus step away from `self`.
    pub fn is_adjacent(self, other: Position, width: u32, height: u32) -> bool {
        Direction::ALL
            .iter()
            .any(|&d| self.step(d, width, height) == other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four von Neumann moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// y − 1
    Up,
    /// y + 1
    Down,
    /// x − 1
    Left,
    /// x + 1
    Right,
}

impl Direction {
    /// Index order used when drawing a random direction.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Fixed neighbour scan order of a wild traveler looking for room.
    pub const WILD_SCAN: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];
}
