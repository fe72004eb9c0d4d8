//! Case-transition segmentation.
//!
//! Splits text into spans that are either passed through untouched or must
//! be forced to uppercase after transliteration. This keeps acronyms such as
//! `"UP"` or `"ПОШЁЛ"` intact while camel-cased words keep their case.
//!
//! A character starts an uppercase span when it is:
//!
//! 1. part of a maximal run of two or more uppercase letters;
//! 2. a lone uppercase letter followed by a bridge stretch that contains two
//!    adjacent uppercase letters (`"Я ПОШёл"` tags `Я`);
//! 3. a lone uppercase letter preceded by two adjacent uppercase letters and
//!    a bridge stretch (`"пошЁЛ Я"` tags `Я`), unless the next character is
//!    lowercase or the next two are a sentence break and an uppercase letter.
//!
//! A bridge character is anything that is not a lowercase letter and not a
//! sentence break (see [`crate::classify::is_sentence_break`]). Bridges may
//! contain letters, digits, spaces and commas.

use crate::classify::{is_lower, is_sentence_break, is_upper};

/// How a span is treated when the engine assembles its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Keep whatever case transliteration produces.
    Plain,
    /// Uppercase the transliterated text.
    Upper,
}

/// A borrowed slice of the input with its casing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub kind: SpanKind,
}

impl<'a> Span<'a> {
    fn new(text: &'a str, kind: SpanKind) -> Self {
        Self { text, kind }
    }
}

/// Splits `text` into alternating plain and uppercase spans.
///
/// Concatenating the span texts yields `text` again. Empty input gives no
/// spans; text without acronyms gives a single plain span.
pub fn segment(text: &str) -> Vec<Span<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let scan = CaseScan::new(text);
    let n = scan.chars.len();
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < n {
        match scan.upper_span_end(i) {
            Some(end) => {
                if plain_start < i {
                    spans.push(Span::new(scan.slice(plain_start, i), SpanKind::Plain));
                }
                spans.push(Span::new(scan.slice(i, end), SpanKind::Upper));
                i = end;
                plain_start = end;
            }
            None => i += 1,
        }
    }

    if plain_start < n {
        spans.push(Span::new(scan.slice(plain_start, n), SpanKind::Plain));
    }
    spans
}

/// Per-character lookup tables so every position is classified in O(1).
struct CaseScan<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus `text.len()` as a sentinel.
    offsets: Vec<usize>,
    /// First non-bridge index at or after `j`.
    bridge_end: Vec<usize>,
    /// Start of the bridge stretch that ends right before `j`.
    bridge_start: Vec<usize>,
    /// Smallest `k >= j` where `k` and `k + 1` are both uppercase.
    pair_at_or_after: Vec<Option<usize>>,
    /// Largest `k` where `k + 1 < j` and `k`, `k + 1` are both uppercase.
    pair_before: Vec<Option<usize>>,
}

impl<'a> CaseScan<'a> {
    fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (idx, ch) in text.char_indices() {
            offsets.push(idx);
            chars.push(ch);
        }
        offsets.push(text.len());

        let n = chars.len();
        let bridge = |ch: char| !is_lower(ch) && !is_sentence_break(ch);
        let pair = |k: usize| k + 1 < n && is_upper(chars[k]) && is_upper(chars[k + 1]);

        let mut bridge_end = vec![n; n + 1];
        let mut pair_at_or_after = vec![None; n + 1];
        for j in (0..n).rev() {
            bridge_end[j] = if bridge(chars[j]) { bridge_end[j + 1] } else { j };
            pair_at_or_after[j] = if pair(j) { Some(j) } else { pair_at_or_after[j + 1] };
        }

        let mut bridge_start = vec![0; n + 1];
        let mut pair_before = vec![None; n + 1];
        for j in 1..=n {
            bridge_start[j] = if bridge(chars[j - 1]) { bridge_start[j - 1] } else { j };
            pair_before[j] = if j >= 2 && pair(j - 2) {
                Some(j - 2)
            } else {
                pair_before[j - 1]
            };
        }

        Self {
            text,
            chars,
            offsets,
            bridge_end,
            bridge_start,
            pair_at_or_after,
            pair_before,
        }
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    /// End (exclusive char index) of the uppercase span starting at `i`.
    fn upper_span_end(&self, i: usize) -> Option<usize> {
        if !is_upper(self.chars[i]) {
            return None;
        }

        let mut end = i + 1;
        while end < self.chars.len() && is_upper(self.chars[end]) {
            end += 1;
        }
        if end - i >= 2 {
            return Some(end);
        }

        (self.precedes_acronym(i) || self.follows_acronym(i)).then_some(i + 1)
    }

    /// Lone uppercase letter at `i` with an acronym further along the bridge.
    fn precedes_acronym(&self, i: usize) -> bool {
        let n = self.chars.len();
        if i + 2 >= n {
            return false;
        }
        let stretch_end = self.bridge_end[i + 1];
        match self.pair_at_or_after[i + 2] {
            Some(k) => k + 1 < stretch_end,
            None => false,
        }
    }

    /// Lone uppercase letter at `i` with an acronym earlier along the bridge.
    fn follows_acronym(&self, i: usize) -> bool {
        if i < 3 {
            return false;
        }
        let stretch_start = self.bridge_start[i];
        let has_acronym = matches!(self.pair_before[i - 1], Some(k) if k >= stretch_start);
        if !has_acronym {
            return false;
        }

        match self.chars.get(i + 1) {
            Some(&next) if is_lower(next) => false,
            Some(&next) if is_sentence_break(next) => {
                !self.chars.get(i + 2).is_some_and(|&after| is_upper(after))
            }
            _ => true,
        }
    }
}
