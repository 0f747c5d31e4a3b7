//! HanoiBuddy - Tower of Hanoi with a rule-based tutor
//!
//! The puzzle core validates and applies moves; the tutor turns a free-text
//! question plus the game history into a structured, Socratic reply.
//!
//! # Architecture
//!
//! - **puzzle**: pegs, move validation, reference solver
//! - **history**: bounded move and action logs, movement heuristics
//! - **knowledge** / **rag**: static knowledge base and rule-driven retrieval
//! - **tutor**: student analysis and reply composition
//! - **rephrase**: optional rewording of replies, local or over HTTP
//! - **session**: one game with its tutor, hooks and idle detection
//! - **cli** / **repl** / **config**: terminal front-end

pub mod errors;
pub mod types;
pub mod puzzle;
pub mod history;
pub mod knowledge;
pub mod rag;
pub mod tutor;
pub mod rephrase;
pub mod session;

pub mod cli;
pub mod config;
pub mod repl;

// Re-export commonly used types
pub use errors::{MoveError, Result, TutorError};
pub use puzzle::{PegId, PuzzleState};
pub use session::GameSession;
pub use tutor::Tutor;
pub use types::{MoveRecord, TutorReply};
