pub mod board;
pub mod config;
pub mod game;
pub mod game_coordinator;
pub mod json_runner;
mod reservoir_sample;
