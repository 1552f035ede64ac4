use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use counter_factors::{
    consts,
    report::{self, Summary},
    types::{SearchConfig, Value},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// the batch summary is logged at info
const DEFAULT_LOG_FILTER: &str = "warn,counter_factors=info";

#[derive(Parser)]
#[command(name = "counter-factors")]
#[command(about = "Split counter targets into two chained counters")]
struct Cli {
    /// largest target of a single counter
    #[arg(long, default_value_t = consts::MAX_BUCKET_VALUE)]
    max_bucket: Value,

    /// steps searched below and above each target
    #[arg(long, default_value_t = consts::SEARCH_WINDOW)]
    window: Value,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// targets one per line, from a file or stdin
    Batch { input: Option<PathBuf> },
    /// every prime in `from..=to` as a target
    Primes { from: Value, to: Value },
    /// the given targets
    Targets {
        #[arg(allow_negative_numbers = true)]
        targets: Vec<i64>,
    },
}

fn read_targets(command: Command, config: &SearchConfig) -> anyhow::Result<Vec<i64>> {
    match command {
        Command::Batch { input: Some(path) } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading targets from {}", path.display()))?;
            report::parse_targets(&text)
        }
        Command::Batch { input: None } => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading targets from stdin")?;
            report::parse_targets(&text)
        }
        Command::Primes { from, to } => report::prime_targets(from, to, config),
        Command::Targets { targets } => Ok(targets),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SearchConfig::new(cli.max_bucket, cli.window);

    let command = cli.command.unwrap_or(Command::Batch { input: None });
    let targets = read_targets(command, &config)?;
    info!(count = targets.len(), ?config, "running batch");

    let reports = report::run_batch(&targets, &config);
    for report in &reports {
        println!("{report}");
    }
    info!(summary = %Summary::tally(&reports), "done");
    Ok(())
}
