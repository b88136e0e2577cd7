//! Wordfreq HTML Parser
//!
//! Single-pass HTML-to-text parsing: a buffer tokenizer interleaved with
//! tree construction.

mod tokenizer;
mod parser;

pub use tokenizer::Fragments;
pub use parser::{parse_html, HtmlParser};
