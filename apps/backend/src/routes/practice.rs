//! Practice endpoints

use axum::{extract::State, Extension, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedProfile;
use crate::AppState;
use spelling_core::diff_spelling;

/// GET /api/practice/queue
pub async fn queue(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<PracticeQueueResponse>> {
    let settings = state.db.get_settings(auth.profile_id).await?;

    let new_limit = settings.words_per_session;
    let review_limit = settings.reviews_per_day;

    let new_words = state
        .db
        .get_new_words(
            auth.profile_id,
            settings.min_difficulty,
            settings.max_difficulty,
            new_limit,
        )
        .await?;
    let review_words = state
        .db
        .get_due_words(auth.profile_id, Utc::now(), review_limit)
        .await?;

    let new_count = new_words.len();
    let review_count = review_words.len();

    Ok(Json(PracticeQueueResponse {
        new_words: new_words.iter().map(|w| w.to_api_word()).collect(),
        review_words: review_words.iter().map(|w| w.to_api_word()).collect(),
        limits: PracticeLimits {
            new_remaining: (new_limit as usize).saturating_sub(new_count),
            review_remaining: (review_limit as usize).saturating_sub(review_count),
        },
    }))
}

/// POST /api/practice/attempt
pub async fn attempt(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Json(payload): Json<SubmitAttemptRequest>,
) -> Result<Json<SubmitAttemptResponse>> {
    // Get the word
    let word = state
        .db
        .get_word(payload.word_id)
        .await?
        .filter(|w| w.profile_id == auth.profile_id)
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    // Sessions are optional, but a supplied one must belong to the profile
    if let Some(session_id) = payload.session_id {
        state
            .db
            .get_session(session_id, auth.profile_id)
            .await?
            .ok_or_else(|| ApiError::BadRequest("Unknown session".to_string()))?;
    }

    // Compare the typed spelling against the word
    let diff = diff_spelling(&word.word, &payload.typed);
    let correct = diff.is_match();

    // Get current stats (or fresh if the word was never attempted)
    let now = Utc::now();
    let mut stats = state
        .db
        .get_word_stats(word.id)
        .await?
        .map(|s| s.to_core(word.difficulty))
        .unwrap_or_else(|| spelling_core::WordStats::new(word.difficulty.clamp(1, 5) as u8));

    // Record the attempt and schedule the next review
    stats.record_attempt(correct, now);
    let next_review = state.scheduler.next_review(&stats, correct, now);
    stats.next_review = Some(next_review);

    state
        .db
        .upsert_word_stats(word.id, auth.profile_id, &stats)
        .await?;

    let attempt = DbAttempt {
        id: Uuid::new_v4(),
        word_id: word.id,
        profile_id: auth.profile_id,
        session_id: payload.session_id,
        typed: payload.typed.clone(),
        is_correct: correct,
        tries: payload.tries.unwrap_or(1).max(1),
        attempted_at: now,
    };
    state.db.insert_attempt(&attempt).await?;

    let missing_letters = diff.missing_letters();

    Ok(Json(SubmitAttemptResponse {
        correct,
        differences: diff.differences,
        expected_highlight: diff.expected_highlight,
        user_highlight: diff.user_highlight,
        missing_letters,
        word: ApiWord {
            id: word.id,
            word: word.word.clone(),
            difficulty: stats.difficulty,
            attempts: stats.attempts,
            correct_attempts: stats.correct_attempts,
            success_rate: stats.success_rate(),
            status: spelling_core::classify(&stats),
            last_attempted: stats.last_attempted,
            next_review: stats.next_review,
        },
        next_review,
    }))
}
