//! Command-line argument parsing for HanoiBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, RephraseMode};
use crate::puzzle::MAX_DISK_COUNT;

/// HanoiBuddy - Tower of Hanoi in the terminal with a tutor that asks questions
#[derive(Parser, Debug)]
#[command(name = "hanoibuddy")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Play Tower of Hanoi with a Socratic tutor", long_about = None)]
pub struct Args {
    /// Number of disks (overrides the config file)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_DISK_COUNT as i64))]
    pub disks: Option<u32>,

    /// Rephrasing service URL; enables HTTP rephrasing
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Rephrasing mode (off, templates, http)
    #[arg(long, value_parser = parse_mode)]
    pub rephrase: Option<RephraseMode>,

    /// Rephrasing request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play interactively (default)
    Play,

    /// Print the optimal move sequence
    Solve {
        /// Number of disks
        #[arg(short, long, default_value_t = 3)]
        disks: u32,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

fn parse_mode(s: &str) -> Result<RephraseMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "off" => Ok(RephraseMode::Off),
        "templates" => Ok(RephraseMode::Templates),
        "http" => Ok(RephraseMode::Http),
        other => Err(format!("unknown rephrase mode '{}' (off, templates, http)", other)),
    }
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Play)
    }

    /// Flags win over the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(disks) = self.disks {
            config.game.disk_count = disks;
        }
        if let Some(endpoint) = &self.endpoint {
            config.rephrase.endpoint = Some(endpoint.clone());
            config.rephrase.mode = RephraseMode::Http;
        }
        if let Some(mode) = self.rephrase {
            config.rephrase.mode = mode;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.rephrase.timeout_ms = timeout_ms;
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "hanoibuddy=info",
            Verbosity::VeryVerbose => "hanoibuddy=debug",
        }
    }

    /// Check if should show the spinner while rephrasing
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_command_is_play() {
        let args = parse(&["hanoibuddy"]);
        assert_eq!(args.command(), Commands::Play);
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_solve_subcommand() {
        let args = parse(&["hanoibuddy", "solve", "--disks", "4"]);
        assert_eq!(args.command(), Commands::Solve { disks: 4 });
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["hanoibuddy", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["hanoibuddy", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["hanoibuddy", "-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "hanoibuddy",
            "--disks",
            "5",
            "--endpoint",
            "http://localhost:9000/rephrase",
            "--timeout-ms",
            "500",
        ]);
        let mut config = Config::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.game.disk_count, 5);
        assert_eq!(config.rephrase.mode, RephraseMode::Http);
        assert_eq!(config.rephrase.timeout_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_mode_wins_over_endpoint() {
        let args = parse(&["hanoibuddy", "--endpoint", "http://x", "--rephrase", "templates"]);
        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.rephrase.mode, RephraseMode::Templates);
    }

    #[test]
    fn test_disks_out_of_range_rejected() {
        assert!(Args::try_parse_from(["hanoibuddy", "--disks", "4000000000"]).is_err());
        assert!(Args::try_parse_from(["hanoibuddy", "--disks", "0"]).is_err());
        assert_eq!(parse(&["hanoibuddy", "--disks", "64"]).disks, Some(64));
    }

    #[test]
    fn test_bad_mode_rejected() {
        assert!(Args::try_parse_from(["hanoibuddy", "--rephrase", "loud"]).is_err());
    }

    #[test]
    fn test_log_filters() {
        assert_eq!(Verbosity::Normal.log_filter(), "warn");
        assert!(Verbosity::VeryVerbose.log_filter().ends_with("debug"));
        assert!(!Verbosity::Quiet.show_progress());
    }
}
