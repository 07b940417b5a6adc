pub mod fifteen;
pub mod game2048;
pub mod merge;

pub use fifteen::*;
pub use game2048::*;
pub use merge::*;

use crate::board::{BoardError, Direction};
use std::num::NonZeroUsize;

pub(crate) const BOARD_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(size) => size,
    None => panic!(),
};

/// What a front end needs to drive a game: read a cell, apply a move, check for the end.
pub trait Game {
    fn initialize(&mut self);

    /// Side length of the board.
    fn size(&self) -> usize;

    fn can_move(&self) -> bool;
    fn has_won(&self) -> bool;

    /// Returns whether the board changed.
    fn process_move(&mut self, direction: Direction) -> bool;

    /// Reads the 1-indexed cell `(i, j)`.
    fn get(&self, i: usize, j: usize) -> Result<Option<u32>, BoardError>;
}

pub fn new_game_2048(initializer: Box<dyn Game2048Initializer>) -> Box<dyn Game> {
    Box::new(Game2048::new(initializer))
}

pub fn new_game_of_fifteen(initializer: Box<dyn GameOfFifteenInitializer>) -> Box<dyn Game> {
    Box::new(GameOfFifteen::new(initializer))
}
