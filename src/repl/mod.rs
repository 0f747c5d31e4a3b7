//! Interactive terminal front-end
//!
//! Reads a line, turns it into a [`Command`], and drives the
//! [`GameSession`] with it. Rendering lives in [`DisplayManager`].

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::time::Instant;
use tracing::debug;

pub use crate::repl::commands::{is_command, parse, Command};
pub use crate::repl::display::{render_board, DisplayManager};
pub use crate::repl::input::{InputEvent, InputHandler};

use crate::errors::MoveError;
use crate::rephrase::Rephraser;
use crate::session::{congratulation, GameSession, START_MESSAGE};

/// Default number of conversation entries for `/history`
const DEFAULT_HISTORY: usize = 10;

/// REPL session coordinator
pub struct ReplSession {
    game: GameSession,
    rephraser: Option<Box<dyn Rephraser>>,
    display: DisplayManager,
}

impl ReplSession {
    pub fn new(game: GameSession, rephraser: Option<Box<dyn Rephraser>>, display: DisplayManager) -> Self {
        Self {
            game,
            rephraser,
            display,
        }
    }

    /// Loop until `/exit` or Ctrl-D
    pub async fn run(&mut self, input: &mut InputHandler, version: &str) -> Result<()> {
        let mode = self.rephraser.as_ref().map_or("off", |r| r.name());
        self.display
            .show_banner(version, self.game.state().disk_count(), mode);
        self.display.show_info(START_MESSAGE);
        self.display.show_board(self.game.state());

        loop {
            match input.read_line()? {
                InputEvent::Line(line) => {
                    if let Some(nudge) = self.game.idle_prompt(Instant::now()) {
                        self.display.show_tutor(nudge, None);
                    }
                    if !self.handle(parse(&line)).await? {
                        break;
                    }
                }
                InputEvent::Interrupted => {
                    self.display.show_warning("Interrupted. Type /exit to quit.");
                }
                InputEvent::Eof => break,
            }
        }

        input.save_history()?;
        Ok(())
    }

    /// Execute one command. Returns false when the REPL should exit.
    pub async fn handle(&mut self, command: Command) -> Result<bool> {
        debug!(?command, "REPL command");

        match command {
            Command::Move { from, to } => match self.game.apply_move(from, to) {
                Ok(outcome) => {
                    self.display.show_move(outcome.record.disk_size, from, to);
                    self.display.show_board(self.game.state());
                    if let Some(summary) = outcome.completion {
                        self.display.show_celebration(&congratulation(&summary));
                    }
                }
                Err(reason) => self.display.show_rejected(&rejection_message(&reason)),
            },
            Command::Reset { disks } => {
                let disks = disks.unwrap_or_else(|| self.game.state().disk_count());
                self.restart(disks)?;
            }
            Command::Disks { count } => self.restart(count)?,
            Command::Hint => self.display.show_tutor(self.game.quick_hint(), None),
            Command::History { limit } => {
                let entries = self.game.conversation().recent(limit.unwrap_or(DEFAULT_HISTORY));
                self.display.show_history(&entries);
            }
            Command::Status => self.display.show_status(&self.game.status()),
            Command::Help => self.display.show_help(),
            Command::Clear => self.display.clear_screen()?,
            Command::Exit => {
                self.display.show_info("Goodbye!");
                return Ok(false);
            }
            Command::Ask { query } => {
                let text = self.ask(&query).await;
                let kind = self
                    .game
                    .conversation()
                    .recent(1)
                    .first()
                    .map(|entry| entry.agent_response.kind);
                self.display.show_tutor(&text, kind);
            }
            Command::Empty => {}
            Command::Invalid { message } => self.display.show_error(&message),
            Command::Unknown { input } => {
                self.display
                    .show_error(&format!("Unknown command: {} (try /help)", input));
            }
        }

        Ok(true)
    }

    /// Tutor reply as text, with a spinner while a rephraser is working
    pub async fn ask(&mut self, query: &str) -> String {
        let spinner = self
            .rephraser
            .as_ref()
            .map(|_| self.display.start_spinner("Thinking..."));

        let text = self.game.ask_and_rephrase(query, self.rephraser.as_deref()).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        text
    }

    fn restart(&mut self, disks: u32) -> Result<()> {
        let message = self.game.reset(disks)?;
        self.display.show_tutor(message, None);
        self.display.show_board(self.game.state());
        Ok(())
    }

    pub fn game(&self) -> &GameSession {
        &self.game
    }
}

/// Player-facing text for a rejected move
pub fn rejection_message(reason: &MoveError) -> String {
    match reason {
        MoveError::EmptySource { .. } => "No disk to move from selected tower.".to_string(),
        MoveError::SizeViolation { .. } => "Cannot place larger disk on smaller disk!".to_string(),
        MoveError::SamePeg { .. } => "Pick a different tower to move to.".to_string(),
        MoveError::InvalidPeg { .. } => "Towers are numbered 1 to 3.".to_string(),
    }
}
