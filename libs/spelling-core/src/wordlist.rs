//! Plain-text word-list parser.
//!
//! Format, one entry per line:
//!
//! ```text
//! # animals, week 3
//! cat
//! giraffe, 4
//! ```
//!
//! A line is either `word` or `word, difficulty` with difficulty 1-5
//! (default 3). Lines starting with `#` are comments; blank lines are
//! skipped. Words are folded to lowercase and may contain letters,
//! apostrophes, and internal hyphens.

use crate::error::{ParseError, Result};

const DEFAULT_DIFFICULTY: u8 = 3;

/// One parsed word-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub difficulty: u8,
    /// Line number where this entry appeared (1-indexed).
    pub line: usize,
}

/// Parse word-list content into entries.
pub fn parse(content: &str) -> Result<Vec<WordEntry>> {
    let mut entries: Vec<WordEntry> = Vec::new();

    for (line_idx, raw_line) in content.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (word_part, difficulty_part) = match line.split_once(',') {
            Some((w, d)) => (w.trim(), Some(d.trim())),
            None => (line, None),
        };

        let word = word_part.to_lowercase();
        if !is_valid_word(&word) {
            return Err(ParseError::InvalidWord {
                line: line_num,
                value: word_part.to_string(),
            });
        }

        let difficulty = match difficulty_part {
            Some(d) => match d.parse::<u8>() {
                Ok(n @ 1..=5) => n,
                _ => {
                    return Err(ParseError::InvalidDifficulty {
                        line: line_num,
                        value: d.to_string(),
                    })
                }
            },
            None => DEFAULT_DIFFICULTY,
        };

        if entries.iter().any(|e| e.word == word) {
            return Err(ParseError::DuplicateWord {
                word,
                line: line_num,
            });
        }

        entries.push(WordEntry {
            word,
            difficulty,
            line: line_num,
        });
    }

    if entries.is_empty() {
        return Err(ParseError::EmptyFile);
    }

    Ok(entries)
}

fn is_valid_word(word: &str) -> bool {
    if word.is_empty() || word.starts_with('-') || word.ends_with('-') {
        return false;
    }
    word.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-')
}
