//! Settings endpoints

use axum::{extract::State, Extension, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedProfile;
use crate::AppState;

/// GET /api/settings
pub async fn get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<ApiSettings>> {
    let settings = state.db.get_settings(auth.profile_id).await?;
    Ok(Json(settings.to_api_settings()))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiSettings>> {
    // Get current settings
    let mut current = state.db.get_settings(auth.profile_id).await?;

    // Apply updates
    if let Some(words_per_session) = request.words_per_session {
        current.words_per_session = words_per_session;
    }
    if let Some(reviews_per_day) = request.reviews_per_day {
        current.reviews_per_day = reviews_per_day;
    }
    if let Some(min_difficulty) = request.min_difficulty {
        current.min_difficulty = min_difficulty;
    }
    if let Some(max_difficulty) = request.max_difficulty {
        current.max_difficulty = max_difficulty;
    }

    if current.words_per_session < 1 || current.reviews_per_day < 1 {
        return Err(ApiError::BadRequest(
            "Session limits must be at least 1".to_string(),
        ));
    }
    if !(1..=5).contains(&current.min_difficulty)
        || !(1..=5).contains(&current.max_difficulty)
        || current.min_difficulty > current.max_difficulty
    {
        return Err(ApiError::BadRequest(
            "Difficulty range must be within 1-5".to_string(),
        ));
    }

    // Save
    state
        .db
        .upsert_settings(auth.profile_id, &current)
        .await?;

    Ok(Json(current.to_api_settings()))
}
