//! Protocol Module
//!
//! Defines what travels between the client and the server.
//!
//! ## Routes
//! ```text
//! ┌─────────┬──────────┬────────────────────────────┐
//! │ Method  │ Path     │ Input                      │
//! ├─────────┼──────────┼────────────────────────────┤
//! │ GET     │ /get     │ query: key                 │
//! │ POST    │ /put     │ JSON: {"key", "value"}     │
//! │ DELETE  │ /delete  │ JSON: {"key"}              │
//! │ POST    │ /update  │ JSON: {"key", "value"}     │
//! │ GET     │ /health  │ none                       │
//! └─────────┴──────────┴────────────────────────────┘
//! ```
//!
//! Every response body is plain text: the value, the key, or empty when
//! the key is absent.
//!
//! ## Client Line Format
//! `<command> <key> [value...]`, e.g. `put greeting hello world`

mod command;
mod parser;
mod request;

pub use command::{Command, CommandType, HEALTH_PATH};
pub use parser::parse_line;
pub use request::{KeyBody, KeyQuery, KeyValueBody};
