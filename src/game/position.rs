use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A (row, col) pair. Read as a coordinate it is the distance from (0, 0);
/// read as a movement it is the distance from another position, so two
/// positions can be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.row + other.row, self.col + other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_component_wise() {
        let a = Position::new(1, 2);
        let b = Position::new(0, -1);
        assert_eq!(a + b, Position::new(1, 1));
        assert_eq!(b + a, a + b);
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Position::new(3, 0), Position::from((3, 0)));
        assert_ne!(Position::new(3, 0), Position::new(0, 3));
    }

    #[test]
    fn test_negative_components_allowed() {
        let p = Position::new(0, 0) + Position::new(-1, -1);
        assert_eq!(p, Position::new(-1, -1));
        assert_eq!(p.to_string(), "(-1, -1)");
    }
}
