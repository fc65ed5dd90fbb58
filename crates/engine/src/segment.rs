//! Heuristic sentence segmentation.
//!
//! Splits on whitespace immediately following a sentence terminator
//! (`.`, `!`, `?`). Abbreviations, decimal numbers, and quoted punctuation
//! are not handled; such inputs may over- or under-split.

/// Lazy iterator over trimmed sentence fragments, in original order.
/// Restartable by calling [`sentences`] again on the same text.
pub struct Sentences<'a> {
    rest: &'a str,
}

/// Segment `text` into sentence-like units. Empty input yields nothing.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            // Find the first terminator followed by whitespace; the split
            // point is just after the terminator.
            let mut split_at = None;
            let mut chars = self.rest.char_indices().peekable();
            while let Some((idx, c)) = chars.next() {
                if is_terminator(c) {
                    if let Some((_, next)) = chars.peek() {
                        if next.is_whitespace() {
                            split_at = Some(idx + c.len_utf8());
                            break;
                        }
                    }
                }
            }

            let fragment = match split_at {
                Some(end) => {
                    let fragment = &self.rest[..end];
                    self.rest = self.rest[end..].trim_start();
                    fragment
                }
                None => {
                    let fragment = self.rest;
                    self.rest = "";
                    fragment
                }
            };

            let fragment = fragment.trim();
            if !fragment.is_empty() {
                return Some(fragment);
            }
        }
    }
}
