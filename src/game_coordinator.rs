use crate::board::Direction;
use crate::game::Game;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Plays a game headlessly by pressing uniformly random directions.
pub struct GameCoordinator {
    game: Box<dyn Game>,
    rng: Xoshiro256StarStar,
    max_move_count: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    ReachedMaxMoveCount(usize),
    Stuck { move_count: usize },
    Win { move_count: usize },
}

impl GameCoordinator {
    pub fn new(game: Box<dyn Game>, seed: u64, max_move_count: usize) -> GameCoordinator {
        GameCoordinator {
            game,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            max_move_count,
        }
    }

    pub fn play(&mut self) -> Outcome {
        self.game.initialize();

        let mut move_count = 0;
        while move_count < self.max_move_count {
            if self.game.has_won() {
                return Outcome::Win { move_count };
            }

            if !self.game.can_move() {
                return Outcome::Stuck { move_count };
            }

            let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
            let changed = self.game.process_move(direction);
            debug!("move {move_count}: {direction:?} (changed: {changed})");

            move_count += 1;
        }

        // The last move may have been the winning one.
        if self.game.has_won() {
            return Outcome::Win { move_count };
        }

        Outcome::ReachedMaxMoveCount(self.max_move_count)
    }

    pub fn game(&self) -> &dyn Game {
        self.game.as_ref()
    }
}
