//! User reading dictionary.
//!
//! [`ReadingDictionary`] maps kanji words to their kana reading.  Its entries
//! are applied before morphological analysis, so they override IPADIC for
//! names and other words it reads differently.  It is
//! persisted as a flat JSON object in the platform config directory
//! (`readings.json`):
//!
//! ```json
//! { "日本語": "にほんご", "東京": "とうきょう" }
//! ```
//!
//! Lookups are greedy longest-prefix matches, so a compound entry such as
//! `日本語` wins over a shorter `日本` when both are present.

use std::collections::HashMap;
use std::path::Path;

use super::TransliterationError;
use crate::config::AppPaths;

/// Word → kana reading table.
#[derive(Debug, Clone, Default)]
pub struct ReadingDictionary {
    entries: HashMap<String, String>,
    /// Length in chars of the longest key, bounds the prefix search.
    longest: usize,
}

impl ReadingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the platform config directory, or return an empty dictionary
    /// when the file is missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = AppPaths::new().readings_file;
        if !path.exists() {
            return Self::new();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("romaji: ignoring reading dictionary {}: {e}", path.display());
            Self::new()
        })
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// [`TransliterationError::Dictionary`] when the file cannot be read or is
    /// not a JSON object of strings.
    pub fn load_from(path: &Path) -> Result<Self, TransliterationError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| TransliterationError::Dictionary(e.to_string()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&data)
            .map_err(|e| TransliterationError::Dictionary(e.to_string()))?;
        Ok(entries.into_iter().collect())
    }

    /// Add or replace a reading.  Blank words or readings are ignored.
    pub fn insert(&mut self, word: impl Into<String>, reading: impl Into<String>) {
        let word = word.into();
        let reading = reading.into();
        if word.trim().is_empty() || reading.trim().is_empty() {
            return;
        }
        self.longest = self.longest.max(word.chars().count());
        self.entries.insert(word, reading);
    }

    /// Longest entry that is a prefix of `text`, as `(matched word, reading)`.
    pub fn longest_prefix<'t>(&self, text: &'t str) -> Option<(&'t str, &str)> {
        let ends: Vec<usize> = text
            .char_indices()
            .map(|(idx, c)| idx + c.len_utf8())
            .take(self.longest)
            .collect();

        ends.into_iter().rev().find_map(|end| {
            let word = &text[..end];
            self.entries.get(word).map(|r| (word, r.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: Into<String>, R: Into<String>> FromIterator<(W, R)> for ReadingDictionary {
    fn from_iter<I: IntoIterator<Item = (W, R)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (word, reading) in iter {
            dict.insert(word, reading);
        }
        dict
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn longest_entry_wins() {
        let dict: ReadingDictionary = [("日本", "にほん"), ("日本語", "にほんご")]
            .into_iter()
            .collect();

        assert_eq!(dict.longest_prefix("日本語学校"), Some(("日本語", "にほんご")));
        assert_eq!(dict.longest_prefix("日本人"), Some(("日本", "にほん")));
        assert_eq!(dict.longest_prefix("中国"), None);
    }

    #[test]
    fn blank_entries_are_skipped() {
        let mut dict = ReadingDictionary::new();
        dict.insert("", "から");
        dict.insert("空", "  ");
        assert!(dict.is_empty());
    }

    #[test]
    fn loads_json_object() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("readings.json");
        std::fs::write(&path, r#"{ "東京": "とうきょう", "駅": "えき" }"#).expect("write");

        let dict = ReadingDictionary::load_from(&path).expect("load");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.longest_prefix("東京駅"), Some(("東京", "とうきょう")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("readings.json");
        std::fs::write(&path, "[1, 2, 3]").expect("write");

        let err = ReadingDictionary::load_from(&path).unwrap_err();
        assert!(matches!(err, TransliterationError::Dictionary(_)));
    }
}
