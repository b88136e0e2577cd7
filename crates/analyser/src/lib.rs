//! Wordfreq Analyser
//!
//! Word frequency statistics over extracted page text.

mod analyse;

pub use analyse::{
    analyse, count_words_occurrences, divide_text_into_words, remove_non_word_characters,
    AnalyseResult, WordCount, WordCounts, DEFAULT_TOP_WORDS,
};
