//! Command definitions
//!
//! Represents operations a client can issue against the store.

use std::fmt;

use reqwest::Method;

/// Path of the liveness probe
pub const HEALTH_PATH: &str = "/health";

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Put,
    Delete,
    Update,
}

impl CommandType {
    /// All command types, in the order the client lists them
    pub const ALL: [CommandType; 4] = [
        CommandType::Get,
        CommandType::Put,
        CommandType::Delete,
        CommandType::Update,
    ];

    /// Look up a command by the word typed at the prompt (case-insensitive)
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(word))
    }

    /// The word used at the prompt
    pub fn name(self) -> &'static str {
        match self {
            CommandType::Get => "get",
            CommandType::Put => "put",
            CommandType::Delete => "delete",
            CommandType::Update => "update",
        }
    }

    /// HTTP method for this command
    pub fn method(self) -> Method {
        match self {
            CommandType::Get => Method::GET,
            CommandType::Put | CommandType::Update => Method::POST,
            CommandType::Delete => Method::DELETE,
        }
    }

    /// Route path for this command
    pub fn path(self) -> &'static str {
        match self {
            CommandType::Get => "/get",
            CommandType::Put => "/put",
            CommandType::Delete => "/delete",
            CommandType::Update => "/update",
        }
    }

    /// Whether the command carries a value
    pub fn takes_value(self) -> bool {
        matches!(self, CommandType::Put | CommandType::Update)
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key
    Get { key: String },

    /// Put a key-value pair
    Put { key: String, value: String },

    /// Delete a key
    Delete { key: String },

    /// Overwrite the value of an existing key
    Update { key: String, value: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Put { .. } => CommandType::Put,
            Command::Delete { .. } => CommandType::Delete,
            Command::Update { .. } => CommandType::Update,
        }
    }

    /// The key the command targets
    pub fn key(&self) -> &str {
        match self {
            Command::Get { key }
            | Command::Put { key, .. }
            | Command::Delete { key }
            | Command::Update { key, .. } => key,
        }
    }

    /// The value carried by put/update
    pub fn value(&self) -> Option<&str> {
        match self {
            Command::Put { value, .. } | Command::Update { value, .. } => Some(value),
            Command::Get { .. } | Command::Delete { .. } => None,
        }
    }
}
