use crate::board::{line_cells, BoardError, Cell, Direction, GameBoard};
use crate::game::merge::move_and_merge_equal;
use crate::game::{Game, BOARD_SIZE};
use crate::reservoir_sample::reservoir_sample_one;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::iter;

pub const WINNING_VALUE: u32 = 2048;

const FOUR_PROBABILITY: f64 = 0.1;

pub trait Game2048Initializer {
    /// Picks a currently empty cell and the value to place there. `None` means the board is full.
    fn next_value(&mut self, board: &GameBoard<Option<u32>>) -> Option<(Cell, u32)>;
}

/// Spawns a 2 (or, one time in ten, a 4) on a uniformly chosen empty cell.
pub struct RandomGame2048Initializer {
    rng: Xoshiro256StarStar,
}

impl RandomGame2048Initializer {
    pub fn new(seed: u64) -> RandomGame2048Initializer {
        RandomGame2048Initializer {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }
}

impl Game2048Initializer for RandomGame2048Initializer {
    fn next_value(&mut self, board: &GameBoard<Option<u32>>) -> Option<(Cell, u32)> {
        let empty_cells = board.filter(Option::is_none);
        let cell = reservoir_sample_one(&mut self.rng, empty_cells.into_iter())?;

        let value = if self.rng.gen_bool(FOUR_PROBABILITY) {
            4
        } else {
            2
        };

        Some((cell, value))
    }
}

pub fn add_new_value(board: &mut GameBoard<Option<u32>>, initializer: &mut dyn Game2048Initializer) {
    if let Some((cell, value)) = initializer.next_value(board) {
        debug!("spawning {value} at {cell}");
        board.set(cell, Some(value));
    }
}

/// Slides and merges every row or column toward the edge `direction` points at. Returns
/// whether any value moved.
pub fn move_values(board: &mut GameBoard<Option<u32>>, direction: Direction) -> bool {
    let size = board.size();
    let mut changed = false;

    for index in 1..=size {
        let cells = line_cells(direction, index, size);
        let line = cells.iter().map(|&cell| *board.get(cell)).collect::<Vec<_>>();

        let merged = move_and_merge_equal(&line, |a, b| a + b);
        let padded = merged.into_iter().map(Some).chain(iter::repeat(None));

        for ((&cell, old), new) in cells.iter().zip(line).zip(padded) {
            if old != new {
                board.set(cell, new);
                changed = true;
            }
        }
    }

    changed
}

pub struct Game2048 {
    board: GameBoard<Option<u32>>,
    initializer: Box<dyn Game2048Initializer>,
}

impl Game2048 {
    pub fn new(initializer: Box<dyn Game2048Initializer>) -> Game2048 {
        Game2048 {
            board: GameBoard::with_size(BOARD_SIZE),
            initializer,
        }
    }

    pub fn board(&self) -> &GameBoard<Option<u32>> {
        &self.board
    }
}

impl Game for Game2048 {
    fn initialize(&mut self) {
        self.board.clear();

        for _ in 0..2 {
            add_new_value(&mut self.board, self.initializer.as_mut());
        }
    }

    fn size(&self) -> usize {
        self.board.size()
    }

    fn can_move(&self) -> bool {
        self.board.any(Option::is_none)
    }

    fn has_won(&self) -> bool {
        self.board.any(|value| *value == Some(WINNING_VALUE))
    }

    fn process_move(&mut self, direction: Direction) -> bool {
        if !move_values(&mut self.board, direction) {
            return false;
        }

        add_new_value(&mut self.board, self.initializer.as_mut());
        true
    }

    fn get(&self, i: usize, j: usize) -> Result<Option<u32>, BoardError> {
        let cell = self.board.get_cell(i, j)?;
        Ok(*self.board.get(cell))
    }
}
