//! Input length constraint.

/// Longest prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Rejects characters beyond a fixed count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthFilter {
    max: usize,
}

impl LengthFilter {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Clamp a whole replacement text.
    pub fn apply<'a>(&self, text: &'a str) -> &'a str {
        truncate_chars(text, self.max)
    }

    /// Clamp an edit that replaces `replaced` characters of a `current_len`
    /// character text with `source`. Returns the part of `source` that fits.
    pub fn filter_insert<'a>(
        &self,
        current_len: usize,
        replaced: usize,
        source: &'a str,
    ) -> &'a str {
        let kept = current_len.saturating_sub(replaced);
        let room = self.max.saturating_sub(kept);
        truncate_chars(source, room)
    }
}
