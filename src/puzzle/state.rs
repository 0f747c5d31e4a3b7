//! Puzzle state and move validator
//!
//! Invariants maintained by every operation:
//! - within a peg, sizes strictly decrease from bottom to top
//! - the union of all pegs is exactly {1..=N}
//! - a rejected move leaves pegs and counter untouched

use serde::{Deserialize, Serialize};

use crate::errors::{MoveError, Result, TutorError};
use crate::puzzle::peg::{Peg, PegId};
use crate::types::MoveRecord;

/// Largest puzzle a state can be built for
pub const MAX_DISK_COUNT: u32 = 64;

/// Difficulty band derived from the disk count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn for_disks(disk_count: u32) -> Self {
        match disk_count {
            0..=3 => Difficulty::Beginner,
            4..=5 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Three pegs, a move counter and the configured disk count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pegs: [Peg; 3],
    moves_made: u32,
    disk_count: u32,
}

impl PuzzleState {
    /// Fresh puzzle with all `disk_count` disks on the source peg
    pub fn new(disk_count: u32) -> Result<Self> {
        if disk_count == 0 || disk_count > MAX_DISK_COUNT {
            return Err(TutorError::InvalidDiskCount(disk_count));
        }

        Ok(Self {
            pegs: [Peg::full(disk_count), Peg::new(), Peg::new()],
            moves_made: 0,
            disk_count,
        })
    }

    /// Start over, possibly with a different disk count
    pub fn reset(&mut self, disk_count: u32) -> Result<()> {
        *self = Self::new(disk_count)?;
        Ok(())
    }

    /// Move the top disk of `from` onto `to`
    ///
    /// Fails with `EmptySource` when `from` has no disk, `SamePeg` when both
    /// ends are the same peg, and `SizeViolation` when the top of `to` is
    /// smaller than the moving disk. On failure nothing changes.
    pub fn apply_move(&mut self, from: PegId, to: PegId) -> std::result::Result<MoveRecord, MoveError> {
        let disk = self.pegs[from.index()]
            .top()
            .ok_or(MoveError::EmptySource { peg: from.index() })?;

        if from == to {
            return Err(MoveError::SamePeg { peg: from.index() });
        }

        if let Some(target) = self.pegs[to.index()].top() {
            if target < disk {
                return Err(MoveError::SizeViolation { disk, target });
            }
        }

        self.pegs[from.index()].pop();
        self.pegs[to.index()].push(disk);
        self.moves_made += 1;

        Ok(MoveRecord::succeeded(from, to, disk, self.moves_made))
    }

    /// Apply a move and turn a rejection into a failed record
    pub fn attempt_move(&mut self, from: PegId, to: PegId) -> MoveRecord {
        match self.apply_move(from, to) {
            Ok(record) => record,
            Err(reason) => MoveRecord::failed(
                from,
                to,
                self.top_disk(from),
                self.moves_made,
                reason,
            ),
        }
    }

    /// True iff the destination peg holds all N disks
    pub fn is_solved(&self) -> bool {
        self.pegs[PegId::Destination.index()].len() == self.disk_count as usize
    }

    /// 2^N - 1, saturating for absurd N
    pub fn optimal_move_count(&self) -> u64 {
        optimal_moves_for(self.disk_count)
    }

    /// optimal / max(moves, 1), clamped to [0, 1]
    pub fn efficiency(&self) -> f64 {
        let optimal = self.optimal_move_count() as f64;
        let made = self.moves_made.max(1) as f64;
        (optimal / made).clamp(0.0, 1.0)
    }

    /// Fraction of disks already on the destination peg
    pub fn progress(&self) -> f64 {
        self.pegs[PegId::Destination.index()].len() as f64 / self.disk_count as f64
    }

    pub fn peg(&self, peg: PegId) -> &Peg {
        &self.pegs[peg.index()]
    }

    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    pub fn top_disk(&self, peg: PegId) -> Option<u32> {
        self.pegs[peg.index()].top()
    }

    /// Number of disks on each peg
    pub fn disk_counts(&self) -> [usize; 3] {
        [self.pegs[0].len(), self.pegs[1].len(), self.pegs[2].len()]
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::for_disks(self.disk_count)
    }
}

/// 2^n - 1
pub fn optimal_moves_for(disk_count: u32) -> u64 {
    1u64.checked_shl(disk_count)
        .map(|v| v - 1)
        .unwrap_or(u64::MAX)
}
