//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Generate word-list content with a specified number of simple words.
pub fn sample_word_list(num_words: usize) -> String {
    (0..num_words)
        .map(|i| format!("word{}\n", letters(i)))
        .collect()
}

/// Spell out an index using letters only, so entries pass word validation.
fn letters(mut n: usize) -> String {
    let alphabet = b"abcdefghij";
    let mut out = String::new();
    loop {
        out.insert(0, alphabet[n % 10] as char);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out
}

/// Create an import request body.
pub fn import_request(name: &str, content: &str) -> serde_json::Value {
    json!({ "name": name, "content": content })
}

/// Create a submit attempt request body.
pub fn submit_attempt_request(word_id: i64, typed: &str) -> serde_json::Value {
    json!({ "word_id": word_id, "typed": typed })
}

/// Create a submit attempt request body tied to a session.
pub fn submit_attempt_in_session(
    word_id: i64,
    typed: &str,
    tries: i32,
    session_id: Uuid,
) -> serde_json::Value {
    json!({
        "word_id": word_id,
        "typed": typed,
        "tries": tries,
        "session_id": session_id
    })
}

/// Create an update settings request body.
pub fn update_settings_request(
    words_per_session: Option<i32>,
    max_difficulty: Option<i32>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(n) = words_per_session {
        obj.insert("words_per_session".to_string(), json!(n));
    }
    if let Some(d) = max_difficulty {
        obj.insert("max_difficulty".to_string(), json!(d));
    }
    serde_json::Value::Object(obj)
}

/// Generate a unique list name to avoid collisions between test runs.
pub fn unique_list_name(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}
