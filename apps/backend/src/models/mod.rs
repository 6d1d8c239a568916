//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from spelling-core
pub use spelling_core::{
    DiffKind, HighlightChar, MasteryStatus, SessionSummary, SpellingAttempt, SpellingDiff,
    SpellingDifference, WordStats,
};

// === Database Entity Types ===

/// Learner profile
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub token: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Imported word list
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWordList {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub name: String,
    pub content_hash: String,
    pub word_count: i32,
    pub imported_at: DateTime<Utc>,
}

/// Practice word stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub profile_id: Uuid,
    pub list_id: Option<Uuid>,
    pub word: String,
    pub difficulty: i32,
    pub created_at: DateTime<Utc>,
}

/// Per-word stats row in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWordStats {
    pub id: Uuid,
    pub word_id: i64,
    pub profile_id: Uuid,
    pub attempts: i32,
    pub correct_attempts: i32,
    pub last_attempted: Option<DateTime<Utc>>,
    pub next_review: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbWordStats {
    /// Convert to the core stats type. Difficulty lives on the word row.
    pub fn to_core(&self, difficulty: i32) -> WordStats {
        WordStats {
            difficulty: difficulty.clamp(1, 5) as u8,
            attempts: self.attempts.max(0) as u32,
            correct_attempts: self.correct_attempts.max(0) as u32,
            last_attempted: self.last_attempted,
            next_review: self.next_review,
        }
    }
}

/// Word joined with its (possibly absent) stats row
#[derive(Debug, Clone, FromRow)]
pub struct WordWithStatsRow {
    pub id: i64,
    pub word: String,
    pub difficulty: i32,
    pub attempts: Option<i32>,
    pub correct_attempts: Option<i32>,
    pub last_attempted: Option<DateTime<Utc>>,
    pub next_review: Option<DateTime<Utc>>,
}

impl WordWithStatsRow {
    /// Convert to the core stats type.
    pub fn to_core(&self) -> WordStats {
        WordStats {
            difficulty: self.difficulty.clamp(1, 5) as u8,
            attempts: self.attempts.unwrap_or(0).max(0) as u32,
            correct_attempts: self.correct_attempts.unwrap_or(0).max(0) as u32,
            last_attempted: self.last_attempted,
            next_review: self.next_review,
        }
    }

    /// Convert to the API shape, deriving success rate and mastery status.
    pub fn to_api_word(&self) -> ApiWord {
        let stats = self.to_core();
        ApiWord {
            id: self.id,
            word: self.word.clone(),
            difficulty: stats.difficulty,
            attempts: stats.attempts,
            correct_attempts: stats.correct_attempts,
            success_rate: stats.success_rate(),
            status: spelling_core::classify(&stats),
            last_attempted: stats.last_attempted,
            next_review: stats.next_review,
        }
    }
}

/// Attempt row joined with the word text, for session scoring
#[derive(Debug, Clone, FromRow)]
pub struct AttemptWithWordRow {
    pub word: String,
    pub typed: String,
    pub is_correct: bool,
    pub tries: i32,
}

impl AttemptWithWordRow {
    pub fn to_core(&self) -> SpellingAttempt {
        SpellingAttempt::new(
            self.word.clone(),
            self.typed.clone(),
            self.is_correct,
            self.tries.max(1) as u32,
        )
    }
}

/// Attempt record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttempt {
    pub id: Uuid,
    pub word_id: i64,
    pub profile_id: Uuid,
    pub session_id: Option<Uuid>,
    pub typed: String,
    pub is_correct: bool,
    pub tries: i32,
    pub attempted_at: DateTime<Utc>,
}

/// Practice session record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub words_total: i32,
    pub words_correct: i32,
    pub first_try_correct: i32,
    pub accuracy: i32,
}

/// Per-profile practice settings in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSettings {
    pub profile_id: Uuid,
    pub words_per_session: i32,
    pub reviews_per_day: i32,
    pub min_difficulty: i32,
    pub max_difficulty: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbSettings {
    /// Create default settings for a profile
    pub fn default_for_profile(profile_id: Uuid) -> Self {
        Self {
            profile_id,
            words_per_session: 10,
            reviews_per_day: 30,
            min_difficulty: 1,
            max_difficulty: 5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Convert to API settings
    pub fn to_api_settings(&self) -> ApiSettings {
        ApiSettings {
            words_per_session: self.words_per_session,
            reviews_per_day: self.reviews_per_day,
            min_difficulty: self.min_difficulty,
            max_difficulty: self.max_difficulty,
        }
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRegisterRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRegisterResponse {
    pub profile_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileStatusResponse {
    pub profile_id: Uuid,
    pub last_seen_at: DateTime<Utc>,
}

// Word list types
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportWordListRequest {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportWordListResponse {
    pub list_id: Uuid,
    /// Words newly created by this import.
    pub imported: usize,
    /// Total entries in the uploaded list.
    pub total_words: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListsResponse {
    pub lists: Vec<DbWordList>,
}

// Word types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiWord {
    pub id: i64,
    pub word: String,
    pub difficulty: u8,
    pub attempts: u32,
    pub correct_attempts: u32,
    pub success_rate: u8,
    pub status: MasteryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_attempted: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsQuery {
    pub status: Option<String>,
    pub min_difficulty: Option<i32>,
    pub max_difficulty: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<ApiWord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub not_started: usize,
    pub needs_work: usize,
    pub practicing: usize,
    pub mastered: usize,
    pub due_now: usize,
}

// Practice types
#[derive(Debug, Serialize, Deserialize)]
pub struct PracticeQueueResponse {
    pub new_words: Vec<ApiWord>,
    pub review_words: Vec<ApiWord>,
    pub limits: PracticeLimits,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PracticeLimits {
    pub new_remaining: usize,
    pub review_remaining: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAttemptRequest {
    pub word_id: i64,
    pub typed: String,
    pub tries: Option<i32>,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAttemptResponse {
    pub correct: bool,
    pub differences: Vec<SpellingDifference>,
    pub expected_highlight: Vec<HighlightChar>,
    pub user_highlight: Vec<HighlightChar>,
    pub missing_letters: Vec<char>,
    pub word: ApiWord,
    pub next_review: DateTime<Utc>,
}

// Session types
#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<DbSession>,
}

// Settings types
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSettings {
    pub words_per_session: i32,
    pub reviews_per_day: i32,
    pub min_difficulty: i32,
    pub max_difficulty: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub words_per_session: Option<i32>,
    pub reviews_per_day: Option<i32>,
    pub min_difficulty: Option<i32>,
    pub max_difficulty: Option<i32>,
}
