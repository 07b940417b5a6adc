use anyhow::{ensure, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::game::{
    new_game_2048, new_game_of_fifteen, Game, RandomGame2048Initializer, RandomGameInitializer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
pub enum GameKind {
    #[serde(rename = "2048")]
    #[value(name = "2048")]
    Game2048,
    #[serde(rename = "fifteen")]
    #[value(name = "fifteen")]
    Fifteen,
}

impl GameKind {
    /// A fresh, uninitialized game whose randomness derives from `seed`.
    pub fn new_game(self, seed: u64) -> Box<dyn Game> {
        match self {
            GameKind::Game2048 => new_game_2048(Box::new(RandomGame2048Initializer::new(seed))),
            GameKind::Fifteen => new_game_of_fifteen(Box::new(RandomGameInitializer::new(seed))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub game: GameKind,
    pub seed: u64,
    pub games: usize,
    pub max_moves: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            game: GameKind::Game2048,
            seed: 5498709864,
            games: 1_000,
            max_moves: 10_000,
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<RunConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        RunConfig::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<RunConfig> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.games > 0, "games must be positive");
        ensure!(self.max_moves > 0, "max_moves must be positive");
        Ok(())
    }
}
