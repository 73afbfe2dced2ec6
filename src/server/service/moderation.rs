//! Profanity filtering for user-authored text.
//!
//! Event titles, event descriptions, comments, and character names are
//! screened before they are stored. Matching is word-based after
//! normalization: text is lowercased and common digit/symbol substitutions
//! are folded back to letters, so "b4dw0rd" matches a listed "badword".

use std::collections::HashSet;
use std::sync::Arc;

/// Built-in word list. Intentionally short; deployments extend it through
/// the `PROFANITY_EXTRA_WORDS` environment variable.
const DEFAULT_WORDS: &[&str] = &["noobslayer", "scammer", "goldseller"];

#[derive(Clone)]
pub struct ModerationFilter {
    words: Arc<HashSet<String>>,
}

impl ModerationFilter {
    /// Builds the filter from the built-in list plus configured extras.
    pub fn new(extra_words: &[String]) -> Self {
        let words = DEFAULT_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_words.iter().map(|w| normalize(w)))
            .collect();

        Self {
            words: Arc::new(words),
        }
    }

    /// Returns the first banned word found in `text`, or `None` when the
    /// text is clean.
    pub fn find_banned_word(&self, text: &str) -> Option<String> {
        let normalized = normalize(text);

        normalized
            .split(|c: char| !c.is_ascii_alphanumeric())
            .find(|word| !word.is_empty() && self.words.contains(*word))
            .map(|word| word.to_string())
    }

    pub fn is_clean(&self, text: &str) -> bool {
        self.find_banned_word(text).is_none()
    }
}

/// Lowercases and folds common leetspeak substitutions.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '0' => 'o',
            '1' | '!' => 'i',
            '3' => 'e',
            '4' | '@' => 'a',
            '5' | '$' => 's',
            '7' => 't',
            other => other,
        })
        .collect()
}
