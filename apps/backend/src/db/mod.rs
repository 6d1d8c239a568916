//! PostgreSQL database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use spelling_core::WordStats;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Profile Repository ===

    /// Create a new profile with generated token
    pub async fn create_profile(&self, name: Option<&str>) -> Result<Profile> {
        let token = Uuid::new_v4().to_string();
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (token, name)
            VALUES ($1, $2)
            RETURNING id, token, name, created_at, last_seen_at
            "#,
        )
        .bind(&token)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        // Create default settings for the profile
        sqlx::query(
            r#"
            INSERT INTO settings (profile_id)
            VALUES ($1)
            "#,
        )
        .bind(profile.id)
        .execute(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Get profile by token
    pub async fn get_profile_by_token(&self, token: &str) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, token, name, created_at, last_seen_at
            FROM profiles
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Update profile last_seen_at timestamp
    pub async fn update_last_seen(&self, profile_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Word List Repository ===

    /// Create a word list record
    pub async fn create_word_list(
        &self,
        profile_id: Uuid,
        name: &str,
        content_hash: &str,
        word_count: i32,
    ) -> Result<DbWordList> {
        let list = sqlx::query_as::<_, DbWordList>(
            r#"
            INSERT INTO word_lists (profile_id, name, content_hash, word_count)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (profile_id, name) DO UPDATE SET
                content_hash = EXCLUDED.content_hash,
                word_count = EXCLUDED.word_count,
                imported_at = NOW()
            RETURNING id, profile_id, name, content_hash, word_count, imported_at
            "#,
        )
        .bind(profile_id)
        .bind(name)
        .bind(content_hash)
        .bind(word_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(list)
    }

    /// Get all word lists for a profile
    pub async fn get_word_lists(&self, profile_id: Uuid) -> Result<Vec<DbWordList>> {
        let lists = sqlx::query_as::<_, DbWordList>(
            r#"
            SELECT id, profile_id, name, content_hash, word_count, imported_at
            FROM word_lists
            WHERE profile_id = $1
            ORDER BY imported_at DESC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }

    // === Word Repository ===

    /// Get word by ID
    pub async fn get_word(&self, word_id: i64) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, profile_id, list_id, word, difficulty, created_at
            FROM words
            WHERE id = $1
            "#,
        )
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get word by its text for a profile
    pub async fn get_word_by_text(&self, profile_id: Uuid, word: &str) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, profile_id, list_id, word, difficulty, created_at
            FROM words
            WHERE profile_id = $1 AND word = $2
            "#,
        )
        .bind(profile_id)
        .bind(word)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Upsert a word (re-imports update difficulty and list membership)
    pub async fn upsert_word(
        &self,
        profile_id: Uuid,
        list_id: Uuid,
        word: &str,
        difficulty: i32,
    ) -> Result<DbWord> {
        let word = sqlx::query_as::<_, DbWord>(
            r#"
            INSERT INTO words (profile_id, list_id, word, difficulty)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (profile_id, word) DO UPDATE SET
                difficulty = EXCLUDED.difficulty,
                list_id = EXCLUDED.list_id
            RETURNING id, profile_id, list_id, word, difficulty, created_at
            "#,
        )
        .bind(profile_id)
        .bind(list_id)
        .bind(word)
        .bind(difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get all words with stats for a profile, within a difficulty range
    pub async fn get_words_with_stats(
        &self,
        profile_id: Uuid,
        min_difficulty: i32,
        max_difficulty: i32,
    ) -> Result<Vec<WordWithStatsRow>> {
        let words = sqlx::query_as::<_, WordWithStatsRow>(
            r#"
            SELECT w.id, w.word, w.difficulty,
                   ws.attempts, ws.correct_attempts, ws.last_attempted, ws.next_review
            FROM words w
            LEFT JOIN word_stats ws ON w.id = ws.word_id
            WHERE w.profile_id = $1 AND w.difficulty BETWEEN $2 AND $3
            ORDER BY w.word
            "#,
        )
        .bind(profile_id)
        .bind(min_difficulty)
        .bind(max_difficulty)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Get words that have never been attempted
    pub async fn get_new_words(
        &self,
        profile_id: Uuid,
        min_difficulty: i32,
        max_difficulty: i32,
        limit: i32,
    ) -> Result<Vec<WordWithStatsRow>> {
        let words = sqlx::query_as::<_, WordWithStatsRow>(
            r#"
            SELECT w.id, w.word, w.difficulty,
                   ws.attempts, ws.correct_attempts, ws.last_attempted, ws.next_review
            FROM words w
            LEFT JOIN word_stats ws ON w.id = ws.word_id
            WHERE w.profile_id = $1 AND w.difficulty BETWEEN $2 AND $3
              AND (ws.attempts IS NULL OR ws.attempts = 0)
            ORDER BY w.difficulty, w.id
            LIMIT $4
            "#,
        )
        .bind(profile_id)
        .bind(min_difficulty)
        .bind(max_difficulty)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Get words whose next review time has passed, soonest first
    pub async fn get_due_words(
        &self,
        profile_id: Uuid,
        now: DateTime<Utc>,
        limit: i32,
    ) -> Result<Vec<WordWithStatsRow>> {
        let words = sqlx::query_as::<_, WordWithStatsRow>(
            r#"
            SELECT w.id, w.word, w.difficulty,
                   ws.attempts, ws.correct_attempts, ws.last_attempted, ws.next_review
            FROM words w
            JOIN word_stats ws ON w.id = ws.word_id
            WHERE w.profile_id = $1 AND ws.next_review IS NOT NULL AND ws.next_review <= $2
            ORDER BY ws.next_review
            LIMIT $3
            "#,
        )
        .bind(profile_id)
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Count words currently due for review
    pub async fn count_due_words(&self, profile_id: Uuid, now: DateTime<Utc>) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM word_stats
            WHERE profile_id = $1 AND next_review IS NOT NULL AND next_review <= $2
            "#,
        )
        .bind(profile_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // === Word Stats Repository ===

    /// Get stats row for a word
    pub async fn get_word_stats(&self, word_id: i64) -> Result<Option<DbWordStats>> {
        let stats = sqlx::query_as::<_, DbWordStats>(
            r#"
            SELECT id, word_id, profile_id, attempts, correct_attempts,
                   last_attempted, next_review, created_at, updated_at
            FROM word_stats
            WHERE word_id = $1
            "#,
        )
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stats)
    }

    /// Upsert word stats from the core type
    pub async fn upsert_word_stats(
        &self,
        word_id: i64,
        profile_id: Uuid,
        stats: &WordStats,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO word_stats (word_id, profile_id, attempts, correct_attempts,
                                    last_attempted, next_review)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (word_id) DO UPDATE SET
                attempts = EXCLUDED.attempts,
                correct_attempts = EXCLUDED.correct_attempts,
                last_attempted = EXCLUDED.last_attempted,
                next_review = EXCLUDED.next_review,
                updated_at = NOW()
            "#,
        )
        .bind(word_id)
        .bind(profile_id)
        .bind(stats.attempts as i32)
        .bind(stats.correct_attempts as i32)
        .bind(stats.last_attempted)
        .bind(stats.next_review)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Attempt Repository ===

    /// Insert an attempt record
    pub async fn insert_attempt(&self, attempt: &DbAttempt) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO attempts (id, word_id, profile_id, session_id, typed,
                                  is_correct, tries, attempted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(attempt.id)
        .bind(attempt.word_id)
        .bind(attempt.profile_id)
        .bind(attempt.session_id)
        .bind(&attempt.typed)
        .bind(attempt.is_correct)
        .bind(attempt.tries)
        .bind(attempt.attempted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a session's attempts joined with their word text
    pub async fn get_session_attempts(&self, session_id: Uuid) -> Result<Vec<AttemptWithWordRow>> {
        let attempts = sqlx::query_as::<_, AttemptWithWordRow>(
            r#"
            SELECT w.word, a.typed, a.is_correct, a.tries
            FROM attempts a
            JOIN words w ON a.word_id = w.id
            WHERE a.session_id = $1
            ORDER BY a.attempted_at
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(attempts)
    }

    // === Session Repository ===

    /// Open a new practice session
    pub async fn create_session(&self, profile_id: Uuid) -> Result<DbSession> {
        let session = sqlx::query_as::<_, DbSession>(
            r#"
            INSERT INTO sessions (profile_id)
            VALUES ($1)
            RETURNING id, profile_id, started_at, finished_at,
                      words_total, words_correct, first_try_correct, accuracy
            "#,
        )
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Get a session owned by a profile
    pub async fn get_session(&self, session_id: Uuid, profile_id: Uuid) -> Result<Option<DbSession>> {
        let session = sqlx::query_as::<_, DbSession>(
            r#"
            SELECT id, profile_id, started_at, finished_at,
                   words_total, words_correct, first_try_correct, accuracy
            FROM sessions
            WHERE id = $1 AND profile_id = $2
            "#,
        )
        .bind(session_id)
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// Store a finished session's summary
    pub async fn finish_session(
        &self,
        session_id: Uuid,
        summary: &SessionSummary,
        finished_at: DateTime<Utc>,
    ) -> Result<DbSession> {
        let session = sqlx::query_as::<_, DbSession>(
            r#"
            UPDATE sessions
            SET finished_at = $2,
                words_total = $3,
                words_correct = $4,
                first_try_correct = $5,
                accuracy = $6
            WHERE id = $1
            RETURNING id, profile_id, started_at, finished_at,
                      words_total, words_correct, first_try_correct, accuracy
            "#,
        )
        .bind(session_id)
        .bind(finished_at)
        .bind(summary.words_total as i32)
        .bind(summary.words_correct as i32)
        .bind(summary.first_try_correct as i32)
        .bind(i32::from(summary.accuracy))
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Get session history, most recent first
    pub async fn get_sessions(&self, profile_id: Uuid) -> Result<Vec<DbSession>> {
        let sessions = sqlx::query_as::<_, DbSession>(
            r#"
            SELECT id, profile_id, started_at, finished_at,
                   words_total, words_correct, first_try_correct, accuracy
            FROM sessions
            WHERE profile_id = $1
            ORDER BY started_at DESC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }

    // === Settings Repository ===

    /// Get settings for a profile
    pub async fn get_settings(&self, profile_id: Uuid) -> Result<DbSettings> {
        let settings = sqlx::query_as::<_, DbSettings>(
            r#"
            SELECT profile_id, words_per_session, reviews_per_day,
                   min_difficulty, max_difficulty, created_at, updated_at
            FROM settings
            WHERE profile_id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?
        .unwrap_or_else(|| DbSettings::default_for_profile(profile_id));

        Ok(settings)
    }

    /// Upsert settings
    pub async fn upsert_settings(&self, profile_id: Uuid, settings: &DbSettings) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (profile_id, words_per_session, reviews_per_day,
                                  min_difficulty, max_difficulty)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (profile_id) DO UPDATE SET
                words_per_session = EXCLUDED.words_per_session,
                reviews_per_day = EXCLUDED.reviews_per_day,
                min_difficulty = EXCLUDED.min_difficulty,
                max_difficulty = EXCLUDED.max_difficulty,
                updated_at = NOW()
            "#,
        )
        .bind(profile_id)
        .bind(settings.words_per_session)
        .bind(settings.reviews_per_day)
        .bind(settings.min_difficulty)
        .bind(settings.max_difficulty)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
