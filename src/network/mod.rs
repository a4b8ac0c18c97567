//! Network Module
//!
//! HTTP server and client.
//!
//! ## Architecture
//! - axum router, one handler per store operation plus `/health`
//! - Handlers share one `Arc<Store>` through router state
//! - `HttpClient` speaks the same routes from the CLI side

mod client;
mod handlers;
mod server;

pub use client::{BenchReport, HttpClient};
pub use handlers::{router, status_code};
pub use server::Server;
