use std::fmt;

/// A 1-indexed (row, column) coordinate on a square board.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Cell {
    pub i: usize,
    pub j: usize,
}

impl Cell {
    pub(crate) fn new(i: usize, j: usize) -> Cell {
        Cell { i, j }
    }

    pub(crate) fn up(&self) -> Cell {
        Cell::new(self.i.wrapping_sub(1), self.j)
    }

    pub(crate) fn down(&self) -> Cell {
        Cell::new(self.i + 1, self.j)
    }

    pub(crate) fn left(&self) -> Cell {
        Cell::new(self.i, self.j.wrapping_sub(1))
    }

    pub(crate) fn right(&self) -> Cell {
        Cell::new(self.i, self.j + 1)
    }

    pub(crate) fn is_inside(&self, size: usize) -> bool {
        (1..=size).contains(&self.i) && (1..=size).contains(&self.j)
    }

    pub(crate) fn to_index(self, size: usize) -> usize {
        (self.i - 1) * size + (self.j - 1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
