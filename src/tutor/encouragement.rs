//! Progress-banded encouragement

pub const BEGINNER: &str = "Great start! Remember, every expert was once a beginner.";
pub const PROGRESSING: &str = "You're making good progress! Keep thinking about the patterns.";
pub const NEAR_MASTERY: &str = "Excellent work! You're getting close to mastering this puzzle.";
pub const MASTERY: &str = "Outstanding! You're showing real problem-solving skills.";

/// Encouragement for a progress fraction.
///
/// Bands are half-open with the lower bound inclusive:
/// [0, 0.2) [0.2, 0.5) [0.5, 0.8) [0.8, 1].
pub fn encouragement(progress: f64) -> &'static str {
    if progress < 0.2 {
        BEGINNER
    } else if progress < 0.5 {
        PROGRESSING
    } else if progress < 0.8 {
        NEAR_MASTERY
    } else {
        MASTERY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(encouragement(0.0), BEGINNER);
        assert_eq!(encouragement(0.19), BEGINNER);
        assert_eq!(encouragement(0.2), PROGRESSING);
        assert_eq!(encouragement(0.5), NEAR_MASTERY);
        assert_eq!(encouragement(0.8), MASTERY);
        assert_eq!(encouragement(1.0), MASTERY);
    }

    #[test]
    fn test_three_disk_progress_steps() {
        assert_eq!(encouragement(1.0 / 3.0), PROGRESSING);
        assert_eq!(encouragement(2.0 / 3.0), NEAR_MASTERY);
    }
}
