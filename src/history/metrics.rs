//! Move-pattern metrics
//!
//! The variance signal is a crude heuristic for "patterned vs random"
//! movement over a handful of moves. It is not a statistical test.

use crate::types::MoveRecord;

/// Combined variance above this counts as random movement
pub const RANDOM_MOVEMENT_THRESHOLD: f64 = 0.8;

/// Population variance: mean((x - mean)^2). Zero for an empty slice.
pub fn variance(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n
}

/// Average of the variance of `from` indices and of `to` indices.
/// Fewer than two moves has no spread and yields 0.
pub fn combined_variance<'a, I>(moves: I) -> f64
where
    I: IntoIterator<Item = &'a MoveRecord>,
{
    let (from, to): (Vec<f64>, Vec<f64>) = moves
        .into_iter()
        .map(|m| (m.from.index() as f64, m.to.index() as f64))
        .unzip();

    if from.len() < 2 {
        return 0.0;
    }

    (variance(&from) + variance(&to)) / 2.0
}
