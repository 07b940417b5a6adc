use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use gridgames::config::{GameKind, RunConfig};
use gridgames::game_coordinator::{GameCoordinator, Outcome};
use gridgames::json_runner::run_game;
use log::info;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::SplitMix64;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(author, version, about = "The 15-puzzle and 2048 on a shared square board")]
struct Cli {
    /// JSON file with defaults for the options below
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one game over stdin/stdout, one JSON command per line
    Play(GameArgs),
    /// Play many games with random moves and report how they ended
    Simulate {
        #[command(flatten)]
        game: GameArgs,

        /// Number of games to play
        #[arg(long, value_name = "N")]
        games: Option<usize>,

        /// Give up on a game after this many moves
        #[arg(long, value_name = "N")]
        max_moves: Option<usize>,
    },
}

#[derive(Debug, Args)]
struct GameArgs {
    #[arg(long, value_enum)]
    game: Option<GameKind>,

    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn apply(&self, config: &mut RunConfig) {
        if let Some(game) = self.game {
            config.game = game;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
    }
}

fn simulate(config: &RunConfig) {
    let start_time = Instant::now();

    let mut seeder = SplitMix64::seed_from_u64(config.seed);
    let seeds = (0..config.games)
        .map(|_| seeder.next_u64())
        .collect::<Vec<_>>();

    info!(
        "simulating {} games of {:?} with at most {} moves each",
        config.games, config.game, config.max_moves
    );

    let outcomes = seeds
        .par_iter()
        .map(|seed| {
            let mut rng = SplitMix64::seed_from_u64(*seed);
            let game = config.game.new_game(rng.next_u64());

            GameCoordinator::new(game, rng.next_u64(), config.max_moves).play()
        })
        .collect::<Vec<_>>();

    let mut timeouts = 0usize;
    let mut wins = 0usize;
    let mut stuck = 0usize;
    let mut total_moves = 0usize;

    for outcome in outcomes.iter() {
        match outcome {
            Outcome::Win { move_count } => {
                wins += 1;
                total_moves += move_count;
            }
            Outcome::Stuck { move_count } => {
                stuck += 1;
                total_moves += move_count;
            }
            Outcome::ReachedMaxMoveCount(move_count) => {
                timeouts += 1;
                total_moves += move_count;
            }
        }
    }

    println!(
        "[Total games: {}] [Wins: {wins}] [Stuck: {stuck}] [Timeouts: {timeouts}] [Average moves: {}]",
        outcomes.len(),
        total_moves as f64 / outcomes.len() as f64
    );

    info!("finished in {} seconds", start_time.elapsed().as_secs_f32());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    match cli.command {
        Command::Play(args) => {
            args.apply(&mut config);

            let mut game = config.game.new_game(config.seed);
            run_game(game.as_mut(), std::io::stdin().lock(), std::io::stdout().lock())?;
        }
        Command::Simulate {
            game,
            games,
            max_moves,
        } => {
            game.apply(&mut config);
            if let Some(games) = games {
                config.games = games;
            }
            if let Some(max_moves) = max_moves {
                config.max_moves = max_moves;
            }
            config.validate()?;

            simulate(&config);
        }
    }

    Ok(())
}
