use crate::game::position::Position;
use crate::{Result, Twenty48Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal moves a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit displacement of one step in this direction.
    pub fn delta(self) -> Position {
        match self {
            Direction::Left => Position::new(0, -1),
            Direction::Right => Position::new(0, 1),
            Direction::Up => Position::new(-1, 0),
            Direction::Down => Position::new(1, 0),
        }
    }

    /// Parse a move key, one of `L`, `R`, `U`, `D` in either case.
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            _ => Err(Twenty48Error::InvalidMove(c)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
