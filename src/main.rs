//! HanoiBuddy - CLI entry point

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use hanoibuddy::{
    cli::{Args, Commands},
    config::Config,
    puzzle::{solve, PuzzleState},
    repl::{DisplayManager, InputHandler, ReplSession},
    session::GameSession,
    tutor::Tutor,
};
use tracing_subscriber::EnvFilter;

/// Largest disk count the `solve` subcommand will print
const MAX_SOLVE_DISKS: u32 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.verbosity().log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    tracing::debug!(verbosity = args.verbosity().as_str(), "Configuration loaded");

    match args.command() {
        Commands::Play => run_repl(&args, &config).await,
        Commands::Solve { disks } => print_solution(disks),
        Commands::Config => show_config(&args, &config),
    }
}

async fn run_repl(args: &Args, config: &Config) -> Result<()> {
    let game = GameSession::with_tutor(
        config.game.disk_count,
        config.session_settings()?,
        Tutor::new(),
    )?;
    let rephraser = config.rephraser()?;
    let display = DisplayManager::new(args.verbosity().show_progress());

    let mut input = match dirs::home_dir() {
        Some(home) => InputHandler::with_history(home.join(".hanoibuddy").join("history"))?,
        None => InputHandler::new()?,
    };

    let mut repl = ReplSession::new(game, rephraser, display);
    repl.run(&mut input, env!("CARGO_PKG_VERSION")).await
}

fn print_solution(disks: u32) -> Result<()> {
    if disks > MAX_SOLVE_DISKS {
        bail!("solve prints at most {} disks", MAX_SOLVE_DISKS);
    }
    let state = PuzzleState::new(disks)?;
    let moves = solve(disks);

    println!(
        "{}",
        format!(
            "Optimal solution for {} disks ({} moves):",
            disks,
            state.optimal_move_count()
        )
        .bold()
        .cyan()
    );
    for (i, (from, to)) in moves.iter().enumerate() {
        println!("  {:>4}. {} -> {}", i + 1, from, to);
    }
    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    println!("{}", "HanoiBuddy Configuration".bold().cyan());
    println!("{}", "=".repeat(40).cyan());
    println!("File: {}", path.display());
    println!();
    print!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
    Ok(())
}
