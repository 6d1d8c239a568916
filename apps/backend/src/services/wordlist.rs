//! Word-list import service.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::db::Database;
use crate::error::Result;
use crate::models::ImportWordListResponse;

/// SHA-256 hash of list content, hex encoded.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Parse and store an uploaded word list for a profile.
///
/// Words already known to the profile are updated in place (difficulty and
/// list membership); their practice stats are untouched.
pub async fn import_word_list(
    db: &Database,
    profile_id: Uuid,
    name: &str,
    content: &str,
) -> Result<ImportWordListResponse> {
    let entries = spelling_core::wordlist::parse(content)?;

    let list = db
        .create_word_list(profile_id, name, &hash_content(content), entries.len() as i32)
        .await?;

    let mut imported = 0;
    for entry in &entries {
        let existing = db.get_word_by_text(profile_id, &entry.word).await?;
        if existing.is_none() {
            imported += 1;
        }
        db.upsert_word(profile_id, list.id, &entry.word, i32::from(entry.difficulty))
            .await?;
    }

    tracing::info!(
        "Imported word list {:?} for profile {}: {} entries, {} new",
        name,
        profile_id,
        entries.len(),
        imported
    );

    Ok(ImportWordListResponse {
        list_id: list.id,
        imported,
        total_words: entries.len(),
    })
}
