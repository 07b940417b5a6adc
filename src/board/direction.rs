use crate::board::Cell;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reversed(self) -> Direction {
        use Direction::*;

        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub(crate) fn to_stepper(self) -> fn(&Cell) -> Cell {
        use Direction::*;

        match self {
            Up => Cell::up,
            Down => Cell::down,
            Left => Cell::left,
            Right => Cell::right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversing_twice_is_identity() {
        for direction in Direction::ALL {
            assert_ne!(direction.reversed(), direction);
            assert_eq!(direction.reversed().reversed(), direction);
        }
    }

    #[test]
    fn deserializes_from_variant_name() {
        let direction: Direction = serde_json::from_str("\"Left\"").unwrap();
        assert_eq!(direction, Direction::Left);
        assert!(serde_json::from_str::<Direction>("\"Diagonal\"").is_err());
    }
}
