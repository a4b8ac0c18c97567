//! Request payloads
//!
//! Query string and JSON bodies accepted by the server. Fields are optional
//! so a missing one is reported as `KvError::MissingField` by the handler
//! instead of a generic deserialization rejection.

use serde::{Deserialize, Serialize};

use crate::error::{KvError, Result};

/// `?key=...` for `GET /get`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyQuery {
    pub key: Option<String>,
}

/// `{"key": ...}` for `DELETE /delete`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBody {
    pub key: Option<String>,
}

/// `{"key": ..., "value": ...}` for `POST /put` and `POST /update`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyValueBody {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl KeyQuery {
    pub fn into_key(self) -> Result<String> {
        self.key.ok_or(KvError::MissingField("key"))
    }
}

impl KeyBody {
    pub fn into_key(self) -> Result<String> {
        self.key.ok_or(KvError::MissingField("key"))
    }
}

impl KeyValueBody {
    /// Build a body with both fields present
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    pub fn into_pair(self) -> Result<(String, String)> {
        let key = self.key.ok_or(KvError::MissingField("key"))?;
        let value = self.value.ok_or(KvError::MissingField("value"))?;
        Ok((key, value))
    }
}
