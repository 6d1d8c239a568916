//! Core spelling-practice library shared by the backend application.
//!
//! Provides:
//! - Character-level spelling differ for mistake highlighting
//! - Mastery classification from attempt history
//! - Review scheduling (interval-based spaced repetition)
//! - Plain-text word-list parser
//! - Shared types (SpellingAttempt, WordStats, etc.)

pub mod diff;
pub mod error;
pub mod mastery;
pub mod schedule;
pub mod session;
pub mod types;
pub mod wordlist;

pub use diff::{diff_spelling, DiffKind, HighlightChar, SpellingDiff, SpellingDifference};
pub use error::{ParseError, Result};
pub use mastery::{classify, classify_with, MasteryStatus, MasteryThresholds};
pub use schedule::{IntervalScheduler, ReviewScheduler};
pub use session::SessionSummary;
pub use types::{SpellingAttempt, WordStats};
pub use wordlist::{parse, WordEntry};
