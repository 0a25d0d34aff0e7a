//! kvns - dry-run namespacing of store commands.
//!
//! Reads one whitespace-separated command per line from stdin and prints
//! it the way the configured namespace would send it.

use kvns::config::Config;
use kvns_core::{Command, Rewrite};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1);
    let mut config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env();

    kvns::telemetry::init(&config.log)
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    info!(
        config = config_path.as_deref().unwrap_or("<default>"),
        namespace = config.namespace.active_prefix().unwrap_or(""),
        separator = %config.namespace.separator,
        "Starting kvns"
    );

    let rewriter = config.rewriter();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let command: Command = line.split_whitespace().collect();
        if command.is_empty() {
            continue;
        }
        let out = match rewriter.rewrite(command) {
            Ok(command) => command.to_string(),
            Err(e) => format!("ERR {e}"),
        };
        stdout.write_all(out.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;

    Ok(())
}
