//! Interactive prompt
//!
//! Reads `<command> <key> [value...]` lines, sends each one to the server
//! and prints the raw response. Generic over its input and output so it can
//! run against stdin/stdout or in-memory buffers.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::network::HttpClient;
use crate::protocol::parse_line;

/// Printed before every line is read
pub const PROMPT: &str = "$ ";

/// Printed when the prompt exits
pub const FAREWELL: &str = "Quitting db.";

/// Run the prompt until end of input or until `shutdown` resolves
///
/// A line that fails to parse or to send prints `(error) <message>` and
/// the loop carries on with the next line.
pub async fn run<R, W, F>(client: &HttpClient, input: R, output: &mut W, shutdown: F) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        // next_line is cancel safe, nothing is lost if shutdown wins
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => {
                output.write_all(b"\n").await?;
                break;
            }
        };

        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match execute_line(client, &line).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                format!("(error) {}", e)
            }
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }

    output.flush().await?;
    Ok(())
}

async fn execute_line(client: &HttpClient, line: &str) -> Result<String> {
    let command = parse_line(line)?;
    client.send(&command).await
}
