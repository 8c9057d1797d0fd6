//! Player report
//!
//! Analyzes a player's PGN games and prints the per-column summary and the
//! first rows of the feature table as JSON.
//!
//! Usage: player-report <glob> [--player NAME] [--head N]

use anyhow::Context;
use chess_analyzers::column_label;
use player_analyzer::{load_pgn_files, BatchConfig, PlayerAggregator, PlayerSummary};
use tracing::info;

struct Args {
    pattern: String,
    player: Option<String>,
    head: usize,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut pattern = None;
    let mut player = None;
    let mut head = 10;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--player" => {
                player = args.get(i + 1).cloned();
                i += 1;
            }
            "--head" => {
                head = args
                    .get(i + 1)
                    .and_then(|v| v.parse().ok())
                    .context("--head needs a number")?;
                i += 1;
            }
            other => pattern = Some(other.to_string()),
        }
        i += 1;
    }

    Ok(Args {
        pattern: pattern.context("usage: player-report <glob> [--player NAME] [--head N]")?,
        player,
        head,
    })
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let args = parse_args()?;
    let config = BatchConfig::from_env()?;

    let pgns = load_pgn_files(&args.pattern)?;
    info!(pattern = %args.pattern, games = pgns.len(), "PGN games loaded");

    let aggregator = PlayerAggregator::new(config)?;
    let report = aggregator.analyze_pgns(&pgns);
    let summary = PlayerSummary::from_report(args.player.as_deref(), &report);
    for (column, mean) in &summary.means {
        info!(column = column_label(column), mean, "Column mean");
    }

    let output = serde_json::json!({
        "summary": summary,
        "games": report.table.head(args.head).to_columns_json(),
        "dropped": report.dropped,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
