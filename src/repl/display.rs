//! Display manager for the REPL terminal UI
//!
//! Draws the board, tutor messages and the spinner shown while a reply is
//! being rephrased.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

use crate::puzzle::{PegId, PuzzleState};
use crate::session::SessionStatus;
use crate::tutor::ConversationEntry;
use crate::types::ReplyKind;

/// Display manager for REPL UI
pub struct DisplayManager {
    update_interval: Duration,
    show_progress: bool,
}

impl DisplayManager {
    pub fn new(show_progress: bool) -> Self {
        DisplayManager {
            update_interval: Duration::from_millis(100),
            show_progress,
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, disk_count: u32, rephrase: &str) {
        let width = 64;
        let rule = "=".repeat(width);

        println!("\n{}", rule.cyan());
        println!("{}", format!("  HanoiBuddy {} - Tower of Hanoi Tutor", version).bold().cyan());
        println!(
            "{}",
            format!("  Disks: {} | Rephrasing: {}", disk_count, rephrase).dimmed()
        );
        println!("{}\n", rule.cyan());
        println!(
            "Move with {} (or just {}), ask the tutor anything, {} for commands\n",
            "/move 1 3".green(),
            "1 3".green(),
            "/help".green()
        );
    }

    pub fn show_board(&self, state: &PuzzleState) {
        println!("\n{}", render_board(state).bright_white());
        println!(
            "{}",
            format!(
                "Moves: {} | Optimal: {}",
                state.moves_made(),
                state.optimal_move_count()
            )
            .dimmed()
        );
    }

    pub fn show_move(&self, disk: Option<u32>, from: PegId, to: PegId) {
        if let Some(disk) = disk {
            println!("{} Moved disk {} from {} to {}", "✓".green(), disk, from, to);
        }
    }

    pub fn show_rejected(&self, reason: &str) {
        println!("{} {}", "✗".red(), reason.red());
    }

    /// Tutor output, with the kind shown as a prefix colour
    pub fn show_tutor(&self, text: &str, kind: Option<ReplyKind>) {
        let label = match kind {
            Some(ReplyKind::Fallback) => "Tutor".yellow().bold(),
            _ => "Tutor".cyan().bold(),
        };
        println!("\n{} {}\n", label, text);
    }

    pub fn show_info(&self, text: &str) {
        println!("{}", text.cyan());
    }

    pub fn show_celebration(&self, text: &str) {
        println!("\n{}\n", text.green().bold());
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Spinner while waiting on the rephraser; hidden in quiet mode
    pub fn start_spinner(&self, message: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(self.update_interval);
        pb
    }

    pub fn show_status(&self, status: &SessionStatus) {
        println!("\n{}", "Game Status:".bold().cyan());
        println!("{}", "=".repeat(40).cyan());
        println!("  {:<14} {} ({})", "Disks:", status.disk_count, status.difficulty.as_str());
        println!("  {:<14} {}", "Moves:", status.moves);
        println!("  {:<14} {}", "Optimal:", status.optimal_moves);
        println!("  {:<14} {}", "Rejected:", status.failed_moves);
        println!("  {:<14} {:.0}%", "Efficiency:", status.efficiency * 100.0);
        println!("  {:<14} {:.0}%", "Progress:", status.progress * 100.0);
        println!("  {:<14} {}", "Elapsed:", format_duration(status.elapsed.as_secs()));
        if status.solved {
            println!("  {}", "Solved!".green().bold());
        }
        println!();
    }

    pub fn show_history(&self, entries: &[ConversationEntry]) {
        if entries.is_empty() {
            println!("{}", "No questions asked yet.".yellow());
            return;
        }

        println!(
            "\n{}",
            format!("Conversation (last {}):", entries.len()).bold().cyan()
        );
        println!("{}", "=".repeat(60).cyan());
        for (i, entry) in entries.iter().enumerate() {
            println!(
                "  {}. {} {}",
                (i + 1).to_string().cyan(),
                entry.user_query,
                format!("({:.0}% done)", entry.progress * 100.0).dimmed()
            );
            println!("     {}", entry.agent_response.message.dimmed());
        }
        println!();
    }

    pub fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("/move <from> <to>", "Move the top disk (pegs 1-3 or A-C)"),
            ("<from> <to>", "Same as /move"),
            ("/reset [n]", "Start over, optionally with n disks"),
            ("/disks <n>", "Change the disk count (3-8) and restart"),
            ("/hint", "Quick hint for the current board"),
            ("/history [n]", "Show the last n questions (default: 10)"),
            ("/status", "Show moves, efficiency and progress"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Anything else is a question for the tutor");
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Plain-text drawing of the three pegs, largest disk at the bottom
pub fn render_board(state: &PuzzleState) -> String {
    let height = state.disk_count() as usize;
    let max_width = 2 * height + 1;
    let mut lines = Vec::with_capacity(height + 2);

    for level in (0..height).rev() {
        let row: Vec<String> = PegId::ALL
            .iter()
            .map(|&peg| {
                let cell = match state.peg(peg).disks().get(level) {
                    Some(&size) => "=".repeat(2 * size as usize + 1),
                    None => "|".to_string(),
                };
                format!("{:^width$}", cell, width = max_width)
            })
            .collect();
        lines.push(row.join(" ").trim_end().to_string());
    }

    let base = "-".repeat(max_width * 3 + 2);
    lines.push(base);

    let labels: Vec<String> = PegId::ALL
        .iter()
        .map(|peg| format!("{:^width$}", peg.to_string(), width = max_width))
        .collect();
    lines.push(labels.join(" ").trim_end().to_string());

    lines.join("\n")
}

fn format_duration(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fresh_board() {
        let state = PuzzleState::new(2).unwrap();
        let board = render_board(&state);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " ===    |     |");
        assert_eq!(lines[1], "=====   |     |");
        assert!(lines[2].chars().all(|c| c == '-'));
        assert_eq!(lines[3], "  1     2     3");
    }

    #[test]
    fn test_render_after_move() {
        let mut state = PuzzleState::new(2).unwrap();
        state.apply_move(PegId::Source, PegId::Destination).unwrap();
        let board = render_board(&state);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines[0], "  |     |     |");
        assert_eq!(lines[1], "=====   |    ===");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5), "5s");
        assert_eq!(format_duration(125), "2m 5s");
    }

    #[test]
    fn test_hidden_spinner_when_quiet() {
        let display = DisplayManager::new(false);
        assert!(display.start_spinner("thinking").is_hidden());
    }
}
