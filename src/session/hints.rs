//! Quick hints read straight off the board, without the tutor pipeline

use crate::puzzle::{PegId, PuzzleState};

pub const ALREADY_SOLVED: &str = "You've already solved the puzzle! Try increasing the difficulty.";
pub const FIRST_MOVE: &str =
    "Start by moving the smallest disk. Remember, you can never place a larger disk on a smaller one.";
pub const THINK_AHEAD: &str = "Try to think ahead: each move should bring you closer to the goal.";
pub const SMALLEST_FIRST: &str = "Start by moving the smallest disk first.";
pub const CLEAR_THE_WAY: &str =
    "Remember: to move a large disk, you first need to move all smaller disks out of the way.";
pub const SMALLEST_ALTERNATES: &str = "The smallest disk alternates between the three towers in a pattern.";
pub const MAKE_PROGRESS: &str = "Think about which disk you need to move to make progress toward your goal.";

/// Candidate hints for a game in progress, most specific first
pub fn contextual_hints(state: &PuzzleState) -> Vec<&'static str> {
    let mut hints = Vec::new();

    let moves = state.moves_made();
    if moves > 5 && state.efficiency() < 0.5 {
        hints.push(THINK_AHEAD);
    }

    if state.peg(PegId::Source).len() == state.disk_count() as usize {
        hints.push(SMALLEST_FIRST);
    }

    hints.push(CLEAR_THE_WAY);
    hints.push(SMALLEST_ALTERNATES);
    hints
}

/// One hint for the current board
pub fn quick_hint(state: &PuzzleState) -> &'static str {
    if state.is_solved() {
        return ALREADY_SOLVED;
    }
    if state.moves_made() == 0 {
        return FIRST_MOVE;
    }
    contextual_hints(state).first().copied().unwrap_or(MAKE_PROGRESS)
}
