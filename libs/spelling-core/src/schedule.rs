//! Review scheduling.
//!
//! Decides when a word should come back for review after an attempt. The
//! contract: the returned timestamp is always in the future, moves further
//! out as a word's success rate improves, and comes nearer after an
//! incorrect answer than after a correct one.

use chrono::{DateTime, Duration, Utc};

use crate::types::WordStats;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Trait seam for review scheduling policies.
pub trait ReviewScheduler: Send + Sync {
    /// Policy identifier.
    fn name(&self) -> &'static str;

    /// Compute the next review time for a word, given its updated stats and
    /// whether the attempt that triggered scheduling was correct.
    fn next_review(&self, stats: &WordStats, was_correct: bool, now: DateTime<Utc>)
        -> DateTime<Utc>;
}

/// Interval scheduler with configurable parameters.
///
/// Correct answers push the review out by `first_interval_days` grown
/// exponentially with the capped correct-attempt count; the growth base
/// interpolates between `min_ease` and `max_ease` with the word's success
/// rate, and harder words are pulled back in proportionally. Incorrect
/// answers reschedule after a short lapse interval.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    pub first_interval_days: f64,
    pub max_interval_days: f64,
    pub lapse_interval_hours: i64,
    pub min_ease: f64,
    pub max_ease: f64,
    pub growth_cap: u32,
    pub difficulty_weight: f64,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self {
            first_interval_days: 1.0,
            max_interval_days: 60.0,
            lapse_interval_hours: 12,
            min_ease: 1.3,
            max_ease: 2.5,
            growth_cap: 6,
            difficulty_weight: 0.2,
        }
    }
}

impl ReviewScheduler for IntervalScheduler {
    fn name(&self) -> &'static str {
        "interval"
    }

    fn next_review(
        &self,
        stats: &WordStats,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        if !was_correct {
            return now + Duration::hours(self.lapse_interval_hours);
        }

        let rate = f64::from(stats.success_rate()) / 100.0;
        let ease = self.min_ease + (self.max_ease - self.min_ease) * rate;
        let streak = f64::from(stats.correct_attempts.min(self.growth_cap));
        let difficulty_factor =
            1.0 + self.difficulty_weight * f64::from(stats.difficulty.saturating_sub(1));

        let days = (self.first_interval_days * ease.powf(streak) / difficulty_factor)
            .clamp(self.first_interval_days, self.max_interval_days);

        now + Duration::minutes((days * MINUTES_PER_DAY) as i64)
    }
}
