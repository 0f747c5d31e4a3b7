//! One game of Tower of Hanoi with its tutor attached

use chrono::Utc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::{MoveError, Result};
use crate::history::{ActionLog, MoveLog};
use crate::puzzle::{Difficulty, PegId, PuzzleState};
use crate::rephrase::{rephrase_or_format, RephraseRequest, Rephraser, HISTORY_SENT};
use crate::session::hints;
use crate::session::SessionSettings;
use crate::tutor::{ConversationHistory, Tutor};
use crate::types::{CompletionSummary, GameAction, MoveRecord, TutorReply};

pub const START_MESSAGE: &str = "Game started! Move all disks to the rightmost tower.";
pub const RESET_MESSAGE: &str = "Game reset! Ready to try a new approach? I'm here to help!";
pub const IDLE_MESSAGE: &str =
    "I notice you haven't made a move in a while. Would you like a hint to get unstuck? 🤔";

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Set on the move that solves the puzzle
    pub completion: Option<CompletionSummary>,
}

/// Point-in-time view for status displays
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    pub disk_count: u32,
    pub moves: u32,
    pub optimal_moves: u64,
    pub efficiency: f64,
    pub progress: f64,
    pub difficulty: Difficulty,
    pub elapsed: Duration,
    pub failed_moves: usize,
    pub solved: bool,
}

/// Puzzle state, logs and tutor for a single player
pub struct GameSession {
    id: Uuid,
    state: PuzzleState,
    moves: MoveLog,
    actions: ActionLog,
    conversation: ConversationHistory,
    tutor: Tutor,
    settings: SessionSettings,
    started_at: Instant,
    last_move_at: Instant,
    idle_prompted: bool,
    completion: Option<CompletionSummary>,
}

impl GameSession {
    /// Session with default settings and a randomly choosing tutor
    pub fn new(disk_count: u32) -> Result<Self> {
        Self::with_tutor(disk_count, SessionSettings::default(), Tutor::new())
    }

    pub fn with_tutor(disk_count: u32, settings: SessionSettings, tutor: Tutor) -> Result<Self> {
        let state = PuzzleState::new(disk_count)?;
        let now = Instant::now();

        let mut session = Self {
            id: Uuid::new_v4(),
            state,
            moves: MoveLog::with_policy(settings.retention),
            actions: ActionLog::with_policy(settings.retention),
            conversation: ConversationHistory::with_limit(settings.conversation_limit)?,
            tutor,
            settings,
            started_at: now,
            last_move_at: now,
            idle_prompted: false,
            completion: None,
        };
        session.actions.push(GameAction::Reset {
            disk_count,
            timestamp: Utc::now(),
        });

        info!(session = %session.id, disk_count, "Game started");
        Ok(session)
    }

    /// Validate and apply a move, logging it either way
    pub fn apply_move(&mut self, from: PegId, to: PegId) -> std::result::Result<MoveOutcome, MoveError> {
        let record = self.state.attempt_move(from, to);
        if let Some(reason) = record.failure_reason {
            self.log_move(record);
            return Err(reason);
        }
        Ok(self.accept(record))
    }

    /// Bring the session in line with a move made by whatever drives the board
    ///
    /// An accepted record is replayed on this session's board and the board's
    /// own record is logged. A record the board would refuse is rejected and
    /// nothing is logged. Failed records are logged as they are.
    pub fn on_move_applied(&mut self, record: MoveRecord) -> std::result::Result<MoveOutcome, MoveError> {
        if !record.succeeded {
            self.log_move(record.clone());
            return Ok(MoveOutcome {
                record,
                completion: None,
            });
        }

        match self.state.apply_move(record.from, record.to) {
            Ok(replayed) => Ok(self.accept(replayed)),
            Err(reason) => {
                warn!(
                    session = %self.id,
                    from = %record.from,
                    to = %record.to,
                    reason = reason.reason_code(),
                    "External move disagrees with the board"
                );
                Err(reason)
            }
        }
    }

    fn accept(&mut self, record: MoveRecord) -> MoveOutcome {
        self.log_move(record.clone());

        let completion = if self.state.is_solved() && self.completion.is_none() {
            let summary = self.completion_summary();
            self.on_game_complete(summary.clone());
            Some(summary)
        } else {
            None
        };

        MoveOutcome { record, completion }
    }

    fn log_move(&mut self, record: MoveRecord) {
        if record.succeeded {
            debug!(
                session = %self.id,
                from = %record.from,
                to = %record.to,
                disk = ?record.disk_size,
                move_number = record.move_number,
                "Move applied"
            );
            self.last_move_at = Instant::now();
            self.idle_prompted = false;
        } else {
            debug!(
                session = %self.id,
                from = %record.from,
                to = %record.to,
                reason = record.failure_reason.map(|r| r.reason_code()).unwrap_or("unknown"),
                "Move rejected"
            );
        }

        self.actions.push(GameAction::from_record(record.clone()));
        self.moves.record(record);
    }

    /// Start over with `disk_count` disks. Returns the reset message.
    pub fn reset(&mut self, disk_count: u32) -> Result<&'static str> {
        self.state.reset(disk_count)?;
        self.on_game_reset();
        Ok(RESET_MESSAGE)
    }

    /// Forget the previous game's moves and timers
    pub fn on_game_reset(&mut self) {
        let now = Instant::now();
        self.moves.clear();
        self.actions.clear();
        self.actions.push(GameAction::Reset {
            disk_count: self.state.disk_count(),
            timestamp: Utc::now(),
        });
        self.started_at = now;
        self.last_move_at = now;
        self.idle_prompted = false;
        self.completion = None;

        info!(session = %self.id, disk_count = self.state.disk_count(), "Game reset");
    }

    /// Record a solved game; see [`congratulation`] for the player-facing line
    pub fn on_game_complete(&mut self, summary: CompletionSummary) {
        info!(
            session = %self.id,
            moves = summary.moves,
            time_secs = summary.time_secs,
            efficiency = summary.efficiency_percent(),
            "Puzzle solved"
        );

        self.actions.push(GameAction::GameComplete {
            summary: summary.clone(),
            timestamp: Utc::now(),
        });
        self.completion = Some(summary);
    }

    /// Ask the tutor; never fails
    pub fn ask(&mut self, query: &str) -> TutorReply {
        let reply = self.tutor.reply(query, &self.state, &self.moves);
        self.conversation.push(query, &reply, self.state.progress());
        reply
    }

    /// Ask the tutor, then rephrase the reply or format it locally
    pub async fn ask_and_rephrase(&mut self, query: &str, rephraser: Option<&dyn Rephraser>) -> String {
        let reply = self.ask(query);
        let request = RephraseRequest::new(
            query,
            reply,
            &self.state,
            self.conversation.recent(HISTORY_SENT),
        );
        rephrase_or_format(rephraser, &request).await
    }

    /// Nudge once per idle period after the player has started
    pub fn idle_prompt(&mut self, now: Instant) -> Option<&'static str> {
        if self.idle_prompted || self.state.moves_made() == 0 || self.state.is_solved() {
            return None;
        }

        if now.saturating_duration_since(self.last_move_at) > self.settings.idle_after {
            self.idle_prompted = true;
            warn!(session = %self.id, "Player idle");
            return Some(IDLE_MESSAGE);
        }

        None
    }

    pub fn quick_hint(&self) -> &'static str {
        hints::quick_hint(&self.state)
    }

    pub fn completion_summary(&self) -> CompletionSummary {
        CompletionSummary {
            moves: self.state.moves_made(),
            time_secs: self.started_at.elapsed().as_secs(),
            optimal_moves: self.state.optimal_move_count(),
            disk_count: self.state.disk_count(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            disk_count: self.state.disk_count(),
            moves: self.state.moves_made(),
            optimal_moves: self.state.optimal_move_count(),
            efficiency: self.state.efficiency(),
            progress: self.state.progress(),
            difficulty: self.state.difficulty(),
            elapsed: self.started_at.elapsed(),
            failed_moves: self.moves.failed_count(),
            solved: self.state.is_solved(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.moves
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    pub fn conversation(&self) -> &ConversationHistory {
        &self.conversation
    }

    pub fn completion(&self) -> Option<&CompletionSummary> {
        self.completion.as_ref()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

/// "You solved it" line with an efficiency remark
pub fn congratulation(summary: &CompletionSummary) -> String {
    let mut message = format!(
        "🎉 Congratulations! You solved it in {} moves and {} seconds!",
        summary.moves, summary.time_secs
    );
    if summary.is_optimal() {
        message.push_str(" That's the optimal solution!");
    } else {
        message.push_str(&format!(
            " Optimal is {} moves ({}% efficiency).",
            summary.optimal_moves,
            summary.efficiency_percent()
        ));
    }
    message
}
