use crate::board::{BoardError, Direction, GameBoard};
use crate::game::{Game, BOARD_SIZE};
use itertools::Itertools;
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::iter;

pub trait GameOfFifteenInitializer {
    /// The tiles to lay out in row-major order; the cell after the last tile stays empty.
    fn initial_permutation(&self) -> &[u32];
}

/// A shuffled, solvable, and never already solved arrangement of 1..=15.
pub struct RandomGameInitializer {
    permutation: Vec<u32>,
}

impl RandomGameInitializer {
    pub fn new(seed: u64) -> RandomGameInitializer {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let solved = (1..=15).collect::<Vec<u32>>();
        let mut permutation = solved.clone();

        // With the hole in the bottom right corner only even permutations are solvable.
        while permutation == solved || !is_even(&permutation) {
            permutation.shuffle(&mut rng);
        }

        RandomGameInitializer { permutation }
    }
}

impl GameOfFifteenInitializer for RandomGameInitializer {
    fn initial_permutation(&self) -> &[u32] {
        &self.permutation
    }
}

/// Whether `permutation` can be sorted with an even number of transpositions. Counts
/// inversions modulo two.
pub fn is_even(permutation: &[u32]) -> bool {
    let inversions = permutation
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count();

    inversions % 2 == 0
}

pub struct GameOfFifteen {
    board: GameBoard<Option<u32>>,
    initializer: Box<dyn GameOfFifteenInitializer>,
}

impl GameOfFifteen {
    pub fn new(initializer: Box<dyn GameOfFifteenInitializer>) -> GameOfFifteen {
        GameOfFifteen {
            board: GameBoard::with_size(BOARD_SIZE),
            initializer,
        }
    }

    pub fn board(&self) -> &GameBoard<Option<u32>> {
        &self.board
    }
}

impl Game for GameOfFifteen {
    fn initialize(&mut self) {
        let tiles = self
            .initializer
            .initial_permutation()
            .iter()
            .map(|&tile| Some(tile))
            .chain(iter::repeat(None));

        let cells = self.board.all_cells().to_vec();
        for (cell, tile) in cells.into_iter().zip(tiles) {
            self.board.set(cell, tile);
        }
    }

    fn size(&self) -> usize {
        self.board.size()
    }

    fn can_move(&self) -> bool {
        true
    }

    fn has_won(&self) -> bool {
        let tile_count = self.board.all_cells().len() as u32 - 1;
        let winning_order = (1..=tile_count).map(Some).chain(iter::once(None));

        self.board.values().copied().eq(winning_order)
    }

    /// Slides the tile next to the hole into it; pressing `Up` moves the tile below the hole up.
    fn process_move(&mut self, direction: Direction) -> bool {
        let Some(empty) = self.board.find(Option::is_none) else { return false; };
        let Some(neighbour) = self.board.get_neighbour(empty, direction.reversed()) else { return false; };

        let tile = *self.board.get(neighbour);
        self.board.set(empty, tile);
        self.board.set(neighbour, None);

        debug!("slid tile from {neighbour} to {empty}");
        true
    }

    fn get(&self, i: usize, j: usize) -> Result<Option<u32>, BoardError> {
        let cell = self.board.get_cell(i, j)?;
        Ok(*self.board.get(cell))
    }
}
