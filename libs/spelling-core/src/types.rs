//! Core types for the spelling-practice domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded spelling attempt. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingAttempt {
    /// The word that was being practiced.
    pub word: String,
    /// What the learner actually typed.
    pub user_spelling: String,
    /// Whether the attempt was accepted as correct.
    pub is_correct: bool,
    /// How many tries the word took in this session (at least 1).
    pub attempts: u32,
}

impl SpellingAttempt {
    pub fn new(word: impl Into<String>, user_spelling: impl Into<String>, is_correct: bool, attempts: u32) -> Self {
        Self {
            word: word.into(),
            user_spelling: user_spelling.into(),
            is_correct,
            attempts: attempts.max(1),
        }
    }
}

/// Accumulated practice statistics for a single word.
///
/// Counters only ever increase; the success rate is derived on read and never
/// stored, so it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    /// Word difficulty on a 1-5 scale.
    pub difficulty: u8,
    pub attempts: u32,
    pub correct_attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_attempted: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
}

impl WordStats {
    /// Fresh stats for a word that has never been practiced.
    pub fn new(difficulty: u8) -> Self {
        Self {
            difficulty: difficulty.clamp(1, 5),
            attempts: 0,
            correct_attempts: 0,
            last_attempted: None,
            next_review: None,
        }
    }

    /// Success rate as a rounded whole percentage. 0 when never attempted.
    pub fn success_rate(&self) -> u8 {
        if self.attempts == 0 {
            return 0;
        }
        let rate = f64::from(self.correct_attempts) / f64::from(self.attempts) * 100.0;
        rate.round() as u8
    }

    /// Record one attempt. Counters move additively, so
    /// `correct_attempts <= attempts` holds by construction.
    pub fn record_attempt(&mut self, was_correct: bool, now: DateTime<Utc>) {
        self.attempts += 1;
        if was_correct {
            self.correct_attempts += 1;
        }
        self.last_attempted = Some(now);
    }

    /// Whether the word is eligible for review at `now`.
    ///
    /// Words that were never scheduled are new rather than due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review {
            Some(due) => now >= due,
            None => false,
        }
    }
}

impl Default for WordStats {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_rate_is_zero_without_attempts() {
        let stats = WordStats::new(3);
        assert_eq!(stats.success_rate(), 0);
    }

    #[test]
    fn success_rate_rounds_to_whole_percent() {
        let mut stats = WordStats::new(2);
        let now = Utc::now();
        stats.record_attempt(true, now);
        stats.record_attempt(true, now);
        stats.record_attempt(false, now);
        // 2/3 = 66.66..., rounds to 67
        assert_eq!(stats.success_rate(), 67);
    }

    #[test]
    fn record_attempt_preserves_counter_invariant() {
        let mut stats = WordStats::new(4);
        let now = Utc::now();
        for i in 0..10 {
            stats.record_attempt(i % 2 == 0, now);
            assert!(stats.correct_attempts <= stats.attempts);
        }
        assert_eq!(stats.attempts, 10);
        assert_eq!(stats.correct_attempts, 5);
        assert_eq!(stats.last_attempted, Some(now));
    }

    #[test]
    fn unscheduled_word_is_never_due() {
        let stats = WordStats::new(1);
        assert!(!stats.is_due(Utc::now()));
    }

    #[test]
    fn word_is_due_once_next_review_passes() {
        let now = Utc::now();
        let mut stats = WordStats::new(3);
        stats.next_review = Some(now - chrono::Duration::hours(1));
        assert!(stats.is_due(now));
        stats.next_review = Some(now + chrono::Duration::hours(1));
        assert!(!stats.is_due(now));
    }

    #[test]
    fn difficulty_is_clamped_to_scale() {
        assert_eq!(WordStats::new(0).difficulty, 1);
        assert_eq!(WordStats::new(9).difficulty, 5);
    }

    #[test]
    fn attempt_count_floors_at_one() {
        let attempt = SpellingAttempt::new("cat", "cat", true, 0);
        assert_eq!(attempt.attempts, 1);
    }
}
