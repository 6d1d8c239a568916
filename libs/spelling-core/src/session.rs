//! Session scoring.

use serde::{Deserialize, Serialize};

use crate::types::SpellingAttempt;

/// Aggregate score for one practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub words_total: u32,
    pub words_correct: u32,
    /// Words spelled correctly on the first try.
    pub first_try_correct: u32,
    /// Rounded whole-percent accuracy over the session.
    pub accuracy: u8,
}

impl SessionSummary {
    /// Aggregate a finished session's attempts. An empty session scores zero.
    pub fn from_attempts(attempts: &[SpellingAttempt]) -> Self {
        let words_total = attempts.len() as u32;
        let words_correct = attempts.iter().filter(|a| a.is_correct).count() as u32;
        let first_try_correct = attempts
            .iter()
            .filter(|a| a.is_correct && a.attempts == 1)
            .count() as u32;
        let accuracy = if words_total == 0 {
            0
        } else {
            (f64::from(words_correct) / f64::from(words_total) * 100.0).round() as u8
        };

        Self {
            words_total,
            words_correct,
            first_try_correct,
            accuracy,
        }
    }
}
