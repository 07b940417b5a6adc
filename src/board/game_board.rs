use crate::board::{BoardError, Cell, Direction};
use itertools::{iproduct, Itertools};
use std::fmt;
use std::num::NonZeroUsize;

/// A fixed-size square grid. Every cell has a value slot from construction on; only the values
/// ever change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameBoard<T> {
    size: usize,
    cells: Vec<Cell>,
    values: Vec<T>,
}

impl<T: Default> GameBoard<T> {
    pub fn new(size: usize) -> Result<GameBoard<T>, BoardError> {
        let size = NonZeroUsize::new(size).ok_or(BoardError::InvalidSize(size))?;
        Ok(GameBoard::with_size(size))
    }

    pub fn with_size(size: NonZeroUsize) -> GameBoard<T> {
        let size = size.get();

        let cells = iproduct!(1..=size, 1..=size)
            .map(|(i, j)| Cell::new(i, j))
            .collect::<Vec<_>>();

        let values = cells.iter().map(|_| T::default()).collect();

        GameBoard {
            size,
            cells,
            values,
        }
    }

    /// Resets every value back to its default.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|value| *value = T::default());
    }
}

impl<T> GameBoard<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, cell: Cell) -> &T {
        debug_assert!(cell.is_inside(self.size));
        &self.values[cell.to_index(self.size)]
    }

    pub fn set(&mut self, cell: Cell, value: T) {
        debug_assert!(cell.is_inside(self.size));
        self.values[cell.to_index(self.size)] = value;
    }

    pub fn get_cell(&self, i: usize, j: usize) -> Result<Cell, BoardError> {
        let cell = Cell::new(i, j);

        if !cell.is_inside(self.size) {
            return Err(BoardError::CellOutOfRange {
                i,
                j,
                size: self.size,
            });
        }

        Ok(self.cells[cell.to_index(self.size)])
    }

    /// All cells in row-major order.
    pub fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }

    pub fn get_neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let neighbour = direction.to_stepper()(&cell);
        neighbour.is_inside(self.size).then_some(neighbour)
    }

    pub fn find<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<Cell> {
        self.cells
            .iter()
            .zip(&self.values)
            .find(|(_, value)| predicate(value))
            .map(|(cell, _)| *cell)
    }

    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Vec<Cell> {
        self.cells
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| predicate(value))
            .map(|(cell, _)| *cell)
            .collect()
    }

    pub fn any<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.values.iter().any(predicate)
    }

    pub fn all<P: FnMut(&T) -> bool>(&self, predicate: P) -> bool {
        self.values.iter().all(predicate)
    }
}

/// The cells of row (for `Left`/`Right`) or column (for `Up`/`Down`) `index`, ordered so that
/// the cell on the edge `direction` points at comes first.
pub fn line_cells(direction: Direction, index: usize, size: usize) -> Vec<Cell> {
    use Direction::*;

    let steps = match direction {
        Left | Up => (1..=size).collect::<Vec<_>>(),
        Right | Down => (1..=size).rev().collect(),
    };

    steps
        .into_iter()
        .map(|k| match direction {
            Left | Right => Cell::new(index, k),
            Up | Down => Cell::new(k, index),
        })
        .collect()
}

/// Renders one row per line, empty cells as `-`. A width (`{:2}`) right-aligns every cell.
impl<T: fmt::Display> fmt::Display for GameBoard<Option<T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);

        let rendered = self
            .values
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|value| match value {
                        Some(value) => format!("{value:>width$}"),
                        None => format!("{:>width$}", "-"),
                    })
                    .join(" ")
            })
            .join("\n");

        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board_with<T: Default>(size: usize, values: &[(usize, usize, T)]) -> GameBoard<T>
    where
        T: Clone,
    {
        let mut board = GameBoard::new(size).unwrap();
        for (i, j, value) in values {
            let cell = board.get_cell(*i, *j).unwrap();
            board.set(cell, value.clone());
        }
        board
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        assert_eq!(
            GameBoard::<Option<u32>>::new(0).unwrap_err(),
            BoardError::InvalidSize(0)
        );
    }

    #[test]
    fn get_and_set_element() {
        let board = board_with(2, &[(1, 1, Some('a'))]);
        assert_eq!(*board.get(board.get_cell(1, 1).unwrap()), Some('a'));
        assert_eq!(*board.get(board.get_cell(2, 2).unwrap()), None);
    }

    #[test]
    fn out_of_range_cell_is_an_error() {
        let board = GameBoard::<Option<u32>>::new(2).unwrap();

        assert_eq!(
            board.get_cell(3, 1),
            Err(BoardError::CellOutOfRange { i: 3, j: 1, size: 2 })
        );
        assert!(board.get_cell(0, 1).is_err());
        assert!(board.get_cell(1, 0).is_err());
    }

    #[test]
    fn all_cells_are_unique_and_row_major() {
        for size in 1..=5 {
            let board = GameBoard::<Option<u32>>::new(size).unwrap();
            let cells = board.all_cells();

            assert_eq!(cells.len(), size * size);
            assert_eq!(cells.iter().collect::<HashSet<_>>().len(), size * size);
            assert!(cells.iter().all(|c| c.is_inside(size)));
            assert!(cells.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn all_cells_is_stable_across_calls() {
        let board = GameBoard::<Option<u32>>::new(3).unwrap();
        assert_eq!(board.all_cells().to_vec(), board.all_cells().to_vec());
    }

    #[test]
    fn neighbour_is_absent_on_the_edge() {
        let board = GameBoard::<Option<u32>>::new(2).unwrap();
        let top_left = board.get_cell(1, 1).unwrap();

        assert_eq!(board.get_neighbour(top_left, Direction::Up), None);
        assert_eq!(board.get_neighbour(top_left, Direction::Left), None);
        assert_eq!(
            board.get_neighbour(top_left, Direction::Down),
            Some(board.get_cell(2, 1).unwrap())
        );
        assert_eq!(
            board.get_neighbour(top_left, Direction::Right),
            Some(board.get_cell(1, 2).unwrap())
        );
    }

    #[test]
    fn neighbour_in_reversed_direction_leads_back() {
        let board = GameBoard::<Option<u32>>::new(4).unwrap();

        for &cell in board.all_cells() {
            for direction in Direction::ALL {
                if let Some(neighbour) = board.get_neighbour(cell, direction) {
                    assert_eq!(
                        board.get_neighbour(neighbour, direction.reversed()),
                        Some(cell)
                    );
                }
            }
        }
    }

    #[test]
    fn filter_returns_matching_cells() {
        let board = board_with(2, &[(1, 1, Some('a')), (1, 2, Some('b'))]);

        let cells = board.filter(|v| *v == Some('a'));
        assert_eq!(cells, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn all_checks_every_value() {
        let mut board = board_with(2, &[(1, 1, Some('a')), (1, 2, Some('a'))]);
        assert!(!board.all(|v| *v == Some('a')));

        board.set(Cell::new(2, 1), Some('a'));
        board.set(Cell::new(2, 2), Some('a'));
        assert!(board.all(|v| *v == Some('a')));
    }

    #[test]
    fn any_sees_values_and_empties() {
        let board = board_with(2, &[(1, 1, Some('a')), (1, 2, Some('b'))]);

        assert!(board.any(|v| matches!(v, Some('a'..='b'))));
        assert!(board.any(|v| v.is_none()));
        assert!(!board.any(|v| *v == Some('c')));
    }

    #[test]
    fn find_locates_an_empty_cell() {
        let board = board_with(2, &[(1, 1, Some(1)), (1, 2, Some(2)), (2, 1, Some(3))]);

        assert_eq!(board.find(|v| v.is_none()), Some(Cell::new(2, 2)));
        assert_eq!(board.find(|v| *v == Some(7)), None);
    }

    #[test]
    fn find_returns_the_first_match_in_row_major_order() {
        let board = board_with(3, &[(2, 3, Some(5)), (3, 1, Some(5))]);
        assert_eq!(board.find(|v| *v == Some(5)), Some(Cell::new(2, 3)));
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut board = board_with(2, &[(1, 1, Some(2)), (2, 2, Some(4))]);
        board.clear();
        assert!(board.all(|v| v.is_none()));
    }

    #[test]
    fn line_cells_start_at_the_edge_being_moved_towards() {
        let cells = |direction| line_cells(direction, 2, 3);

        assert_eq!(
            cells(Direction::Left),
            vec![Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3)]
        );
        assert_eq!(
            cells(Direction::Right),
            vec![Cell::new(2, 3), Cell::new(2, 2), Cell::new(2, 1)]
        );
        assert_eq!(
            cells(Direction::Up),
            vec![Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]
        );
        assert_eq!(
            cells(Direction::Down),
            vec![Cell::new(3, 2), Cell::new(2, 2), Cell::new(1, 2)]
        );
    }

    #[test]
    fn display_renders_rows_and_empties() {
        let board = board_with(2, &[(1, 1, Some(2)), (2, 2, Some(16))]);

        assert_eq!(board.to_string(), "2 -\n- 16");
        assert_eq!(format!("{board:2}"), " 2  -\n - 16");
    }
}
