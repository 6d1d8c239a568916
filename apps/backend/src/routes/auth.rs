//! Authentication middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::AppState;

/// Authenticated profile info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedProfile {
    pub profile_id: Uuid,
    pub token: String,
}

/// Auth middleware - extracts profile token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    // Skip auth for register endpoint and health check
    let path = request.uri().path();
    if path == "/api/profile/register" || path == "/health" {
        return Ok(next.run(request).await);
    }

    // Extract Bearer token
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?
        .to_string();

    // Look up profile by token
    let profile = state
        .db
        .get_profile_by_token(&token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid profile token".to_string()))?;

    // Update last_seen
    state.db.update_last_seen(profile.id).await?;

    // Store authenticated profile in request extensions
    request.extensions_mut().insert(AuthenticatedProfile {
        profile_id: profile.id,
        token,
    });

    Ok(next.run(request).await)
}
