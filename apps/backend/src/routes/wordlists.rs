//! Word-list endpoints

use axum::{extract::State, Extension, Json};

use crate::error::{ApiError, Result};
use crate::models::{ImportWordListRequest, ImportWordListResponse, WordListsResponse};
use crate::routes::auth::AuthenticatedProfile;
use crate::services::wordlist;
use crate::AppState;

/// POST /api/wordlists/import
pub async fn import(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Json(payload): Json<ImportWordListRequest>,
) -> Result<Json<ImportWordListResponse>> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("List name must not be empty".to_string()));
    }

    let result =
        wordlist::import_word_list(&state.db, auth.profile_id, name, &payload.content).await?;

    Ok(Json(result))
}

/// GET /api/wordlists
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<Json<WordListsResponse>> {
    let lists = state.db.get_word_lists(auth.profile_id).await?;
    Ok(Json(WordListsResponse { lists }))
}
