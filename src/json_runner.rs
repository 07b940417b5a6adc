use anyhow::{Context, Result};
use log::info;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::board::Direction;
use crate::game::Game;

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "PascalCase")]
pub struct MoveCommandJson {
    pub direction: Direction,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GameStateJson {
    pub board: Vec<Vec<Option<u32>>>,
    pub changed: bool,
    pub can_move: bool,
    pub has_won: bool,
}

impl GameStateJson {
    pub fn capture(game: &dyn Game, changed: bool) -> Result<GameStateJson> {
        let size = game.size();

        let board = (1..=size)
            .map(|i| (1..=size).map(|j| game.get(i, j)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameStateJson {
            board,
            changed,
            can_move: game.can_move(),
            has_won: game.has_won(),
        })
    }
}

fn write_json<T: Serialize, W: Write>(output: &mut W, obj: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, obj)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Reads the next non-blank line as JSON. `None` at end of input.
fn read_json<T: DeserializeOwned, R: BufRead>(input: &mut R) -> Result<Option<T>> {
    let mut line_buffer = String::new();

    loop {
        line_buffer.clear();
        if input.read_line(&mut line_buffer)? == 0 {
            return Ok(None);
        }

        if !line_buffer.trim().is_empty() {
            break;
        }
    }

    let json = serde_json::from_str(line_buffer.trim())
        .with_context(|| format!("malformed command: {}", line_buffer.trim()))?;

    Ok(Some(json))
}

/// Drives `game` from line-delimited move commands, answering every command (and the initial
/// layout) with a snapshot of the board.
pub fn run_game<R: BufRead, W: Write>(game: &mut dyn Game, mut input: R, mut output: W) -> Result<()> {
    info!("starting json session");

    game.initialize();
    write_json(&mut output, &GameStateJson::capture(&*game, false)?)?;

    let mut move_count = 0usize;
    while let Some(MoveCommandJson { direction }) = read_json(&mut input)? {
        let changed = game.process_move(direction);
        move_count += 1;

        write_json(&mut output, &GameStateJson::capture(&*game, changed)?)?;
    }

    info!("json session ended after {move_count} moves");
    Ok(())
}
