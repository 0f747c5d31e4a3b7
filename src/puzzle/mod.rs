//! Puzzle core: three pegs, N disks and the legal-move validator
//!
//! The state owns no external resources; every operation is synchronous
//! and total.

pub mod peg;
pub mod solver;
pub mod state;

// Re-export commonly used types
pub use peg::{Peg, PegId};
pub use solver::solve;
pub use state::{Difficulty, PuzzleState, MAX_DISK_COUNT};
