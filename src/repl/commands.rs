//! Parsing of REPL input into game commands
//!
//! Lines starting with `/` are commands; two bare peg names (`1 3`, `a c`)
//! are a move; anything else is a question for the tutor.

use crate::puzzle::PegId;

/// Smallest disk count offered by `/disks`
pub const MIN_DISKS: u32 = 3;
/// Largest disk count offered by `/disks`
pub const MAX_DISKS: u32 = 8;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { from: PegId, to: PegId },
    Reset { disks: Option<u32> },
    Disks { count: u32 },
    Hint,
    History { limit: Option<usize> },
    Status,
    Help,
    Clear,
    Exit,
    Ask { query: String },
    Empty,
    Invalid { message: String },
    Unknown { input: String },
}

/// Check if input is a command
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse one line of input
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    if !is_command(trimmed) {
        if let Some((from, to)) = bare_move(trimmed) {
            return Command::Move { from, to };
        }
        return Command::Ask {
            query: trimmed.to_string(),
        };
    }

    let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
    let Some(name) = parts.first() else {
        return Command::Unknown {
            input: trimmed.to_string(),
        };
    };

    match name.to_lowercase().as_str() {
        "move" | "m" => match (parts.get(1), parts.get(2)) {
            (Some(from), Some(to)) => match (from.parse::<PegId>(), to.parse::<PegId>()) {
                (Ok(from), Ok(to)) => Command::Move { from, to },
                _ => invalid("Pegs are 1, 2, 3 (or A, B, C)"),
            },
            _ => invalid("Usage: /move <from> <to>"),
        },
        "reset" | "r" => match parts.get(1) {
            None => Command::Reset { disks: None },
            Some(n) => match n.parse::<u32>() {
                Ok(n) if (1..=MAX_DISKS).contains(&n) => Command::Reset { disks: Some(n) },
                _ => invalid("Usage: /reset [1-8]"),
            },
        },
        "disks" => match parts.get(1).and_then(|n| n.parse::<u32>().ok()) {
            Some(n) => Command::Disks {
                count: n.clamp(MIN_DISKS, MAX_DISKS),
            },
            None => invalid("Usage: /disks <3-8>"),
        },
        "hint" => Command::Hint,
        "history" => Command::History {
            limit: parts.get(1).and_then(|s| s.parse().ok()),
        },
        "status" => Command::Status,
        "help" | "h" => Command::Help,
        "clear" | "cls" => Command::Clear,
        "exit" | "quit" | "q" => Command::Exit,
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

fn bare_move(input: &str) -> Option<(PegId, PegId)> {
    let mut parts = input.split_whitespace();
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

fn invalid(message: &str) -> Command {
    Command::Invalid {
        message: message.to_string(),
    }
}
