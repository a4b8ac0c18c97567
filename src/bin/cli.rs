//! nullkv CLI Client
//!
//! Interactive prompt by default, or a single command given as a
//! subcommand.

use anyhow::Context;
use clap::{Parser, Subcommand};
use nullkv::config::ConfigBuilder;
use nullkv::network::HttpClient;
use nullkv::protocol::Command;
use nullkv::{repl, Config};
use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

/// nullkv CLI
#[derive(Parser, Debug)]
#[command(name = "nullkv-cli")]
#[command(about = "CLI for the nullkv key-value store")]
#[command(version)]
struct Args {
    /// Server host (overrides NULL_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides NULL_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Request timeout in milliseconds (0 disables it)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Run one command instead of the interactive prompt
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Put {
        /// The key to set
        key: String,

        /// The value to set (words are joined with spaces)
        value: Vec<String>,
    },

    /// Delete a key
    Delete {
        /// The key to delete
        key: String,
    },

    /// Overwrite the value of an existing key
    Update {
        /// The key to update
        key: String,

        /// The new value (words are joined with spaces)
        value: Vec<String>,
    },

    /// Check that the server is up
    Health,

    /// Time a run of back-to-back puts
    Bench {
        /// Number of records to write
        #[arg(short, long, default_value = "100")]
        records: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines do not interleave with the prompt
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let client = HttpClient::new(&config)?;

    if let Err(e) = client.health().await {
        tracing::error!("Health check failed: {}", e);
        return Err(e).context("server is not reachable");
    }

    let command = match args.command {
        Some(Commands::Health) => {
            println!("OK");
            return Ok(());
        }
        Some(Commands::Bench { records }) => {
            let report = client.bench(records).await?;
            println!(
                "wrote {} records in {:.3}s ({:.0} ops/sec)",
                report.records,
                report.elapsed.as_secs_f64(),
                report.ops_per_sec()
            );
            return Ok(());
        }
        Some(Commands::Get { key }) => Command::Get { key },
        Some(Commands::Put { key, value }) => Command::Put {
            key,
            value: value.join(" "),
        },
        Some(Commands::Delete { key }) => Command::Delete { key },
        Some(Commands::Update { key, value }) => Command::Update {
            key,
            value: value.join(" "),
        },
        None => return interactive(&client).await,
    };

    println!("{}", client.send(&command).await?);
    Ok(())
}

async fn interactive(client: &HttpClient) -> anyhow::Result<()> {
    println!("Connected to db: {}", client.base_url());

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    repl::run(client, input, &mut output, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler failed: {}", e);
        }
    })
    .await?;

    println!("{}", repl::FAREWELL);

    // The blocking stdin read cannot be cancelled and would hold up runtime
    // shutdown until the next newline.
    std::process::exit(0);
}

fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut builder = ConfigBuilder::from_config(Config::from_env()?);
    if let Some(host) = &args.host {
        builder = builder.host(host.clone());
    }
    if let Some(port) = args.port {
        builder = builder.port(port);
    }
    if let Some(ms) = args.timeout_ms {
        builder = builder.request_timeout_ms(ms);
    }
    Ok(builder.build())
}
