//! HTTP Client
//!
//! Issues commands against a running server and hands back the raw
//! response text.

use std::time::{Duration, Instant};

use reqwest::StatusCode;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::protocol::{Command, KeyBody, KeyValueBody, HEALTH_PATH};

/// Client for the nullkv HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the server described by `config`
    pub fn new(config: &Config) -> Result<Self> {
        // The server is always dialed directly, never through HTTP(S)_PROXY
        let mut builder = reqwest::Client::builder().no_proxy();
        if config.request_timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.request_timeout_ms));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url(),
        })
    }

    /// Base URL every route is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the server is up
    ///
    /// Transport failures and non-200 answers both become
    /// [`KvError::Connection`].
    pub async fn health(&self) -> Result<()> {
        let response = self
            .http
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| KvError::Connection(format!("{} ({})", self.base_url, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(KvError::Connection(format!(
                "{} answered health check with {}",
                self.base_url, status
            )));
        }

        Ok(())
    }

    /// Send a command and return the response body, whatever its status
    pub async fn send(&self, command: &Command) -> Result<String> {
        let command_type = command.command_type();
        let request = self
            .http
            .request(command_type.method(), self.url(command_type.path()));

        let request = match command {
            Command::Get { key } => request.query(&[("key", key)]),
            Command::Delete { key } => request.json(&KeyBody {
                key: Some(key.clone()),
            }),
            Command::Put { key, value } | Command::Update { key, value } => {
                request.json(&KeyValueBody::new(key.as_str(), value.as_str()))
            }
        };

        tracing::debug!("{} {}", command_type, command.key());

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("{} {} answered {}", command_type, command.key(), status);
        }

        Ok(body)
    }

    /// Issue `records` puts back to back and time them
    pub async fn bench(&self, records: usize) -> Result<BenchReport> {
        let started = Instant::now();

        for i in 0..records {
            let command = Command::Put {
                key: format!("bench-key-{}", i),
                value: format!("bench-value-{}", i),
            };
            self.send(&command).await?;
        }

        Ok(BenchReport {
            records,
            elapsed: started.elapsed(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Outcome of [`HttpClient::bench`]
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    pub records: usize,
    pub elapsed: Duration,
}

impl BenchReport {
    /// Requests per second, 0 when nothing was timed
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.records as f64 / secs
    }
}
