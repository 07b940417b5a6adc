pub mod cell;
pub mod direction;
pub mod game_board;

pub use cell::*;
pub use direction::*;
pub use game_board::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be positive, got {0}")]
    InvalidSize(usize),
    #[error("cell ({i}, {j}) is outside of a board of size {size}")]
    CellOutOfRange { i: usize, j: usize, size: usize },
}
