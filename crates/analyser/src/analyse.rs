//! Word frequency analysis
//!
//! Turns extracted text into per-word counts, most frequent first.

use log::debug;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::LazyLock;

/// Anything that is not a letter: punctuation, whitespace, `_` and digits
static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_0-9]+").expect("non-word pattern is valid"));

/// Default size of the most-used list
pub const DEFAULT_TOP_WORDS: usize = 10;

/// A word and how many times it occurs.
///
/// Serializes as a two-element array, `["word", 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount(pub String, pub usize);

impl WordCount {
    /// The lowercased word
    pub fn word(&self) -> &str {
        &self.0
    }

    /// Number of occurrences
    pub fn count(&self) -> usize {
        self.1
    }
}

/// Word counts that remember the order words were first seen in
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    index: FxHashMap<String, usize>,
    entries: Vec<WordCount>,
}

impl WordCounts {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of a word
    pub fn add(&mut self, word: &str) {
        self.add_many(word, 1);
    }

    /// Count `n` more occurrences of a word
    pub fn add_many(&mut self, word: &str, n: usize) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount(word.to_string(), n));
            }
        }
    }

    /// Occurrences of a word, zero if never seen
    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }
}

/// Counts sorted by frequency, ties kept in first-seen order
#[derive(Debug, Clone)]
pub struct AnalyseResult {
    words_statistics: Vec<WordCount>,
}

impl AnalyseResult {
    /// Sort counts by frequency
    pub fn new(counts: WordCounts) -> Self {
        let mut words_statistics = counts.entries;
        words_statistics.sort_by(|a, b| b.1.cmp(&a.1));
        Self { words_statistics }
    }

    /// The `count` most frequent words (fewer if there are not enough)
    pub fn most_used_words(&self, count: usize) -> &[WordCount] {
        &self.words_statistics[..count.min(self.words_statistics.len())]
    }

    /// Every counted word, most frequent first
    pub fn words(&self) -> &[WordCount] {
        &self.words_statistics
    }
}

/// Replace every run of non-letter characters with a single space
pub fn remove_non_word_characters(text: &str) -> String {
    NON_WORD_CHARS.replace_all(text, " ").trim().to_string()
}

/// Split cleaned text on spaces
pub fn divide_text_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Count lowercased words
pub fn count_words_occurrences<'a>(words: impl IntoIterator<Item = &'a str>) -> WordCounts {
    let mut counts = WordCounts::new();
    for word in words {
        counts.add(&word.to_lowercase());
    }
    counts
}

/// Full analysis of a text
pub fn analyse(text: &str) -> AnalyseResult {
    let cleaned_text = remove_non_word_characters(text);
    let words = divide_text_into_words(&cleaned_text);
    let counts = count_words_occurrences(words.iter().copied());

    debug!("Counted {} words, {} distinct", words.len(), counts.len());

    AnalyseResult::new(counts)
}
