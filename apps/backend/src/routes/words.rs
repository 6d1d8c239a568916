//! Word listing and progress endpoints

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedProfile;
use crate::AppState;
use spelling_core::MasteryStatus;

fn parse_status(value: &str) -> Result<MasteryStatus> {
    match value {
        "not-started" => Ok(MasteryStatus::NotStarted),
        "needs-work" => Ok(MasteryStatus::NeedsWork),
        "practicing" => Ok(MasteryStatus::Practicing),
        "mastered" => Ok(MasteryStatus::Mastered),
        other => Err(ApiError::BadRequest(format!("Unknown status: {}", other))),
    }
}

/// GET /api/words
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<WordsResponse>> {
    let status_filter = query.status.as_deref().map(parse_status).transpose()?;

    let rows = state
        .db
        .get_words_with_stats(
            auth.profile_id,
            query.min_difficulty.unwrap_or(1),
            query.max_difficulty.unwrap_or(5),
        )
        .await?;

    let words = rows
        .iter()
        .map(|row| row.to_api_word())
        .filter(|word| status_filter.map_or(true, |s| word.status == s))
        .collect();

    Ok(Json(WordsResponse { words }))
}

/// GET /api/words/review
pub async fn review(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<WordsResponse>> {
    let settings = state.db.get_settings(auth.profile_id).await?;
    let rows = state
        .db
        .get_due_words(auth.profile_id, Utc::now(), settings.reviews_per_day)
        .await?;

    Ok(Json(WordsResponse {
        words: rows.iter().map(|row| row.to_api_word()).collect(),
    }))
}

/// GET /api/words/progress
pub async fn progress(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<ProgressResponse>> {
    let now = Utc::now();
    let rows = state.db.get_words_with_stats(auth.profile_id, 1, 5).await?;

    let mut response = ProgressResponse {
        not_started: 0,
        needs_work: 0,
        practicing: 0,
        mastered: 0,
        due_now: 0,
    };

    for row in &rows {
        match spelling_core::classify(&row.to_core()) {
            MasteryStatus::NotStarted => response.not_started += 1,
            MasteryStatus::NeedsWork => response.needs_work += 1,
            MasteryStatus::Practicing => response.practicing += 1,
            MasteryStatus::Mastered => response.mastered += 1,
        }
    }

    response.due_now = state.db.count_due_words(auth.profile_id, now).await? as usize;

    Ok(Json(response))
}
