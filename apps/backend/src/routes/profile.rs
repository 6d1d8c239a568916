//! Profile registration and status endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{ProfileRegisterRequest, ProfileRegisterResponse, ProfileStatusResponse};
use crate::routes::auth::AuthenticatedProfile;
use crate::AppState;

/// POST /api/profile/register
/// Creates a new learner profile and returns the token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Option<ProfileRegisterRequest>>,
) -> Result<Json<ProfileRegisterResponse>> {
    let name = payload.and_then(|p| p.name);
    let profile = state.db.create_profile(name.as_deref()).await?;

    tracing::info!("Registered new profile: {}", profile.id);

    Ok(Json(ProfileRegisterResponse {
        profile_id: profile.id,
        token: profile.token,
    }))
}

/// GET /api/profile/status
/// Returns profile status
pub async fn status(
    Extension(auth): Extension<AuthenticatedProfile>,
    State(state): State<AppState>,
) -> Result<Json<ProfileStatusResponse>> {
    let profile = state
        .db
        .get_profile_by_token(&auth.token)
        .await?
        .ok_or_else(|| crate::error::ApiError::NotFound("Profile not found".to_string()))?;

    Ok(Json(ProfileStatusResponse {
        profile_id: profile.id,
        last_seen_at: profile.last_seen_at,
    }))
}
