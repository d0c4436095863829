//! Play tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_ttt::console::{ConsoleObserver, StdioInput};
use rust_ttt::{AgentKind, GameConfig, Referee};

/// Tic-tac-toe: human or random agents in either seat
#[derive(Parser, Debug)]
#[command(name = "rust-ttt")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Agent for X, who moves first (human or random)
    #[arg(long, default_value = "human")]
    first: AgentKind,

    /// Agent for O (human or random)
    #[arg(long, default_value = "random")]
    second: AgentKind,

    /// Seed for random agents. Omit for a fresh game every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Rejected entries allowed per move before a human forfeits
    #[arg(long)]
    max_retries: Option<u32>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = GameConfig::default()
        .with_seed(seed)
        .with_agents(cli.first, cli.second)
        .with_max_human_retries(cli.max_retries);
    info!(?config, "configured");

    let mut referee = Referee::from_config(&config, |_| Box::new(StdioInput));
    referee
        .play(ConsoleObserver::stdout())
        .context("game stopped before it finished")?;

    Ok(())
}
