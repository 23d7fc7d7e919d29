//! Line-protocol shell over a local arena
//!
//! Reads one command per line from stdin and prints the arena's replies.
//!
//! ```text
//! $ cargo run -p pantheon-arena --example arena_shell
//! |post|1|1|2|3
//! |posted|1
//! |challenge|2|4|5|6
//! |result|jason|mira
//! |log|jason's team synergy activated!
//! ...
//! ```
//!
//! `PANTHEON_ROSTER` and `PANTHEON_CONFIG` point at JSON files; without them
//! the bundled roster and default payouts are used.

use anyhow::{Context, Result};
use pantheon_arena::{Arena, ArenaConfig, ArenaHandle};
use pantheon_roster::{load_roster, load_roster_file};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const BUNDLED_ROSTER: &str = include_str!("../fixtures/roster.json");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var("PANTHEON_CONFIG") {
        Ok(path) => ArenaConfig::from_json_file(&path)
            .with_context(|| format!("loading arena config from {}", path))?,
        Err(_) => ArenaConfig::default(),
    };

    let roster = match std::env::var("PANTHEON_ROSTER") {
        Ok(path) => {
            load_roster_file(&path).with_context(|| format!("loading roster from {}", path))?
        }
        Err(_) => load_roster(BUNDLED_ROSTER).context("loading bundled roster")?,
    };

    tracing::info!(
        heroes = roster.catalog.len(),
        accounts = roster.accounts.len(),
        "arena ready"
    );
    let handle = ArenaHandle::new(Arena::from_roster(roster, config));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let worker = handle.clone();
        let command = line.to_string();
        let replies = tokio::task::spawn_blocking(move || worker.dispatch_line(&command))
            .await
            .context("arena worker panicked")?;

        for reply in replies {
            stdout.write_all(reply.to_wire_format().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
    }

    Ok(())
}
