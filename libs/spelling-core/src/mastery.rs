//! Mastery classification from attempt history.
//!
//! A word's status is recomputed from its current counters on every read;
//! nothing stores a "current status" that could go stale.

use serde::{Deserialize, Serialize};

use crate::types::WordStats;

/// Coarse mastery bucket for display and review ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MasteryStatus {
    NotStarted,
    NeedsWork,
    Practicing,
    Mastered,
}

/// Classification thresholds, kept in one place rather than scattered inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryThresholds {
    /// Success rate (whole percent) at or above which a word counts as mastered.
    pub mastered_min_rate: u8,
    /// Success rate at or above which a word counts as practicing.
    pub practicing_min_rate: u8,
    /// A word needs at least this many attempts before it can be mastered.
    pub mastered_min_attempts: u32,
}

impl Default for MasteryThresholds {
    fn default() -> Self {
        Self {
            mastered_min_rate: 80,
            practicing_min_rate: 60,
            mastered_min_attempts: 3,
        }
    }
}

/// Classify with the default thresholds.
pub fn classify(stats: &WordStats) -> MasteryStatus {
    classify_with(stats, &MasteryThresholds::default())
}

/// Bucket a word's stats into one of the four mutually exclusive statuses.
///
/// A high success rate over fewer than `mastered_min_attempts` attempts
/// classifies as practicing rather than mastered.
pub fn classify_with(stats: &WordStats, thresholds: &MasteryThresholds) -> MasteryStatus {
    if stats.attempts == 0 {
        return MasteryStatus::NotStarted;
    }
    let rate = stats.success_rate();
    if rate >= thresholds.mastered_min_rate {
        if stats.attempts >= thresholds.mastered_min_attempts {
            MasteryStatus::Mastered
        } else {
            MasteryStatus::Practicing
        }
    } else if rate >= thresholds.practicing_min_rate {
        MasteryStatus::Practicing
    } else {
        MasteryStatus::NeedsWork
    }
}
