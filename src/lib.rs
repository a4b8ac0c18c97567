//! # nullkv
//!
//! A minimal in-memory key-value store with:
//! - An HTTP endpoint for get/put/delete/update plus a health check
//! - Single-writer/multi-reader locking inside the store
//! - An interactive command-line client
//!
//! Nothing is persisted: every key is lost when the server exits.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (REPL / one-shot)                    │
//! │              parse_line → HttpClient::send                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ HTTP (query string / JSON body)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   axum Router                                │
//! │         /get  /put  /delete  /update  /health                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//!                       ▼
//!               ┌──────────────┐
//!               │    Store     │
//!               │  (RwLock)    │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod network;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of nullkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
