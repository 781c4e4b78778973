use std::collections::HashMap;
use thiserror::Error;

/// Returned when a dictionary is built from a map with no entries.
/// `max_len` and relative-frequency scoring are undefined for an empty
/// vocabulary, so this is rejected at construction rather than surfacing
/// later as a division by zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dictionary has no entries")]
pub struct EmptyDictionary;

/// An immutable weighted vocabulary: word -> occurrence frequency.
///
/// Built once, then shared read-only by any number of segmentation calls
/// (and threads). Changing the vocabulary means building a new `Dictionary`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashMap<String, u64>,
    /// Length in chars of the longest word.
    max_len: usize,
    /// Sum of all frequencies, the denominator for relative-frequency scores.
    total: u64,
}

impl Dictionary {
    pub fn new(entries: HashMap<String, u64>) -> Result<Self, EmptyDictionary> {
        if entries.is_empty() {
            return Err(EmptyDictionary);
        }
        let max_len = entries
            .keys()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0);
        let total = entries.values().sum();
        tracing::debug!(
            "dictionary built: {} words, max_len {}, total frequency {}",
            entries.len(),
            max_len,
            total
        );
        Ok(Self { entries, max_len, total })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Frequency of `word`, 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.entries.get(word).copied().unwrap_or(0)
    }

    /// Longest word length in chars; bounds every candidate scan.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Total frequency mass across the vocabulary.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
