//! Store Module
//!
//! The in-memory key-value mapping shared by every request handler.
//!
//! ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
//!
//! - **Writes** (put/delete/update): exclusive write lock, one at a time
//! - **Reads** (get): shared read lock, concurrent with each other
//!
//! `update` checks for the key and writes it under the same write lock, so
//! it cannot race with a concurrent `delete` or `put` on the same key.
//!
//! Nothing is persisted; the store lives as long as the process.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{KvError, Result};
use crate::protocol::Command;

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation. The returned text is what
    /// the server sends back: the value for get/put/update, the key for
    /// delete, `None` when the key is absent.
    pub fn execute(&self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Get { key } => Ok(self.get(&key)),
            Command::Put { key, value } => Ok(Some(self.put(key, value))),
            Command::Delete { key } => self.delete(&key).map(Some),
            Command::Update { key, value } => Ok(self.update(&key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    /// Insert or overwrite a key, returning the stored value
    pub fn put(&self, key: String, value: String) -> String {
        let mut data = self.data.write();
        data.insert(key, value.clone());
        value
    }

    /// Remove a key, returning it
    ///
    /// Fails with [`KvError::KeyNotFound`] if the key is absent.
    pub fn delete(&self, key: &str) -> Result<String> {
        let mut data = self.data.write();
        match data.remove_entry(key) {
            Some((key, _)) => Ok(key),
            None => Err(KvError::KeyNotFound(key.to_string())),
        }
    }

    /// Overwrite the value of an existing key
    ///
    /// Returns `None` and leaves the store untouched when the key is absent.
    pub fn update(&self, key: &str, value: String) -> Option<String> {
        let mut data = self.data.write();
        let slot = data.get_mut(key)?;
        *slot = value.clone();
        Some(value)
    }

    // =========================================================================
    // Accessors (for logging and testing)
    // =========================================================================

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
