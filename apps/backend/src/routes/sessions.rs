//! Session endpoints

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedProfile;
use crate::AppState;
use spelling_core::SessionSummary;

/// POST /api/sessions
pub async fn start(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<StartSessionResponse>> {
    let session = state.db.create_session(auth.profile_id).await?;

    Ok(Json(StartSessionResponse {
        session_id: session.id,
        started_at: session.started_at,
    }))
}

/// POST /api/sessions/:id/finish
pub async fn finish(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DbSession>> {
    let session = state
        .db
        .get_session(session_id, auth.profile_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    if session.finished_at.is_some() {
        return Err(ApiError::BadRequest("Session already finished".to_string()));
    }

    let rows = state.db.get_session_attempts(session_id).await?;
    let attempts: Vec<_> = rows.iter().map(|r| r.to_core()).collect();
    let summary = SessionSummary::from_attempts(&attempts);

    let finished = state
        .db
        .finish_session(session_id, &summary, Utc::now())
        .await?;

    Ok(Json(finished))
}

/// GET /api/sessions
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<SessionsResponse>> {
    let sessions = state.db.get_sessions(auth.profile_id).await?;
    Ok(Json(SessionsResponse { sessions }))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DbSession>> {
    let session = state
        .db
        .get_session(session_id, auth.profile_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    Ok(Json(session))
}
