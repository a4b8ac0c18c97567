//! Line parser
//!
//! Turns a line typed at the client prompt into a [`Command`].

use super::{Command, CommandType};
use crate::error::{KvError, Result};

/// Parse `<command> <key> [value...]`
///
/// The command word is case-insensitive. Value tokens are rejoined with
/// single spaces; put/update accept an empty value. Unknown commands are
/// rejected before any key check so nothing reaches the network.
pub fn parse_line(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();

    let word = tokens
        .next()
        .ok_or_else(|| KvError::InvalidInput("empty line".to_string()))?;

    let command_type =
        CommandType::from_word(word).ok_or_else(|| KvError::UnknownCommand(word.to_string()))?;

    let key = tokens
        .next()
        .ok_or_else(|| KvError::InvalidInput(format!("{} requires a key", command_type)))?
        .to_string();

    let rest: Vec<&str> = tokens.collect();
    if !command_type.takes_value() && !rest.is_empty() {
        return Err(KvError::InvalidInput(format!(
            "{} takes a key only, got extra input: {}",
            command_type,
            rest.join(" ")
        )));
    }
    let value = rest.join(" ");

    Ok(match command_type {
        CommandType::Get => Command::Get { key },
        CommandType::Put => Command::Put { key, value },
        CommandType::Delete => Command::Delete { key },
        CommandType::Update => Command::Update { key, value },
    })
}
