//! Buffer Tokenizer
//!
//! Cuts a character stream into fragments at `<` and `>` boundaries.

/// Iterator of fragments over a character stream.
///
/// A fragment is either a run of plain characters ended by `<`, or
/// everything from a `<` up to and including the next `>`. Whitespace-only
/// runs in front of a `<` are dropped, and whatever is still buffered when
/// the input runs out is never yielded (see [`Fragments::pending`]).
pub struct Fragments<I> {
    chars: I,
    buffer: String,
}

impl<I: Iterator<Item = char>> Fragments<I> {
    /// Create a tokenizer over the given characters
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            buffer: String::new(),
        }
    }

    /// Buffered input that has not been terminated by `<` or `>`
    pub fn pending(&self) -> &str {
        &self.buffer
    }
}

impl<'a> Fragments<std::str::Chars<'a>> {
    /// Create a tokenizer over a string
    pub fn from_html(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

impl<I: Iterator<Item = char>> Iterator for Fragments<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for c in self.chars.by_ref() {
            match c {
                '<' => {
                    let fragment = std::mem::replace(&mut self.buffer, String::from('<'));
                    if !fragment.trim().is_empty() {
                        return Some(fragment);
                    }
                }
                '>' => {
                    self.buffer.push('>');
                    return Some(std::mem::take(&mut self.buffer));
                }
                _ => self.buffer.push(c),
            }
        }

        None
    }
}
