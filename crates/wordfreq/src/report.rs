//! Console summary and JSON report

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use wordfreq_analyser::WordCount;

/// Human readable list of the most used words
pub fn format_summary(source: &str, words: &[WordCount]) -> String {
    let mut output = format!("Most used words on {} are:", source);
    for word in words {
        output.push_str(&format!("\n\t{}: {}", word.word(), word.count()));
    }
    output
}

/// Timestamp file name: `<unix seconds>.<microseconds>.json`
pub fn report_file_name(now: SystemTime) -> String {
    let elapsed = now.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:06}.json", elapsed.as_secs(), elapsed.subsec_micros())
}

/// Render `[word, count]` pairs with a 4-space indent
pub fn to_json(words: &[WordCount]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    words.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the report into `dir`, returning the file path
pub fn save_to_file(dir: &Path, now: SystemTime, words: &[WordCount]) -> io::Result<PathBuf> {
    let path = dir.join(report_file_name(now));
    fs::write(&path, to_json(words)?)?;
    Ok(path)
}
