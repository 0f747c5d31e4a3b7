//! Recursive reference solver
//!
//! Move n-1 disks to the auxiliary peg, the largest to the destination,
//! then the n-1 disks on top of it.

use crate::puzzle::peg::PegId;

/// Optimal move sequence for `disk_count` disks from source to destination.
///
/// The result has 2^n - 1 entries; callers bound `disk_count`.
pub fn solve(disk_count: u32) -> Vec<(PegId, PegId)> {
    let mut moves = Vec::new();
    solve_into(
        disk_count,
        PegId::Source,
        PegId::Destination,
        PegId::Auxiliary,
        &mut moves,
    );
    moves
}

fn solve_into(n: u32, from: PegId, to: PegId, via: PegId, moves: &mut Vec<(PegId, PegId)>) {
    if n == 0 {
        return;
    }
    solve_into(n - 1, from, via, to, moves);
    moves.push((from, to));
    solve_into(n - 1, via, to, from, moves);
}
