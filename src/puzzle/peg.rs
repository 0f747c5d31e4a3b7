//! Pegs and peg identifiers

use crate::errors::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three pegs, by conventional role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub enum PegId {
    Source,
    Auxiliary,
    Destination,
}

impl PegId {
    /// All pegs in index order
    pub const ALL: [PegId; 3] = [PegId::Source, PegId::Auxiliary, PegId::Destination];

    /// Zero-based index (0 = source, 2 = destination)
    pub fn index(self) -> usize {
        match self {
            PegId::Source => 0,
            PegId::Auxiliary => 1,
            PegId::Destination => 2,
        }
    }

    /// Look up a peg by zero-based index
    pub fn from_index(index: usize) -> Result<Self, MoveError> {
        match index {
            0 => Ok(PegId::Source),
            1 => Ok(PegId::Auxiliary),
            2 => Ok(PegId::Destination),
            _ => Err(MoveError::InvalidPeg { index }),
        }
    }

    /// Letter shown to players
    pub fn label(self) -> char {
        match self {
            PegId::Source => 'A',
            PegId::Auxiliary => 'B',
            PegId::Destination => 'C',
        }
    }
}

impl From<PegId> for usize {
    fn from(peg: PegId) -> usize {
        peg.index()
    }
}

impl TryFrom<usize> for PegId {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        PegId::from_index(index)
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// Parses the player-facing names: "1".."3" or "A".."C" (any case)
impl FromStr for PegId {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "A" => return Ok(PegId::Source),
            "B" => return Ok(PegId::Auxiliary),
            "C" => return Ok(PegId::Destination),
            _ => {}
        }

        let number: usize = trimmed
            .parse()
            .map_err(|_| MoveError::InvalidPeg { index: usize::MAX })?;
        if number == 0 {
            return Err(MoveError::InvalidPeg { index: usize::MAX });
        }
        PegId::from_index(number - 1)
    }
}

/// A stack of disk sizes, bottom first. Sizes strictly decrease upwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    disks: Vec<u32>,
}

impl Peg {
    /// Empty peg
    pub fn new() -> Self {
        Self::default()
    }

    /// Peg holding disks `n..=1`, largest at the bottom
    pub fn full(n: u32) -> Self {
        Self {
            disks: (1..=n).rev().collect(),
        }
    }

    /// Size of the top (movable) disk
    pub fn top(&self) -> Option<u32> {
        self.disks.last().copied()
    }

    /// Disk sizes, bottom first
    pub fn disks(&self) -> &[u32] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub(crate) fn pop(&mut self) -> Option<u32> {
        self.disks.pop()
    }

    pub(crate) fn push(&mut self, disk: u32) {
        debug_assert!(self.top().map_or(true, |top| disk < top));
        self.disks.push(disk);
    }
}
