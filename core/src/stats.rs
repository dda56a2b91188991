use serde::{Deserialize, Serialize};

/// Per-session bookkeeping, cleared on every reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Seconds spent in `Phase::Playing`.
    pub elapsed: f64,
    pub score_recorded: bool,
}

/// Best finishing time, lives as long as the host keeps it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    best_time: Option<f64>,
}

impl Scoreboard {
    pub const fn new() -> Self {
        Self { best_time: None }
    }

    pub const fn best_time(&self) -> Option<f64> {
        self.best_time
    }

    /// Keeps `time` if it beats the current best, returns whether it did.
    pub fn record(&mut self, time: f64) -> bool {
        let improved = match self.best_time {
            None => true,
            Some(best) => time < best,
        };
        if improved {
            log::debug!("New best time {:.3}s (was {:?})", time, self.best_time);
            self.best_time = Some(time);
        }
        improved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_sets_best() {
        let mut scores = Scoreboard::new();
        assert_eq!(scores.best_time(), None);
        assert!(scores.record(42.5));
        assert_eq!(scores.best_time(), Some(42.5));
    }

    #[test]
    fn best_time_only_decreases() {
        let mut scores = Scoreboard::new();
        scores.record(30.0);
        assert!(!scores.record(31.0));
        assert!(!scores.record(30.0));
        assert_eq!(scores.best_time(), Some(30.0));
        assert!(scores.record(12.25));
        assert_eq!(scores.best_time(), Some(12.25));
    }
}
