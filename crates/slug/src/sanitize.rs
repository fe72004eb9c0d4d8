//! Token extraction: strips unwanted characters and stop words.
//!
//! [`UnwantedMatcher`] is derived from the safe-character set and the stop
//! word list. It is immutable; the engine swaps in a new one whenever either
//! input changes.

use fxhash::FxHashSet;

use crate::classify::is_alphanumeric;

const APOSTROPHE: char = '\'';

/// Splits text into tokens made of alphanumerics and safe characters.
#[derive(Debug, Clone, Default)]
pub struct UnwantedMatcher {
    safe_chars: FxHashSet<char>,
    /// Lowercased stop words, longest first.
    stop_words: Vec<Vec<char>>,
    apostrophe_is_unsafe: bool,
}

impl UnwantedMatcher {
    pub fn new<S: AsRef<str>>(safe_chars: &str, stop_words: &[S]) -> Self {
        let safe_chars: FxHashSet<char> = safe_chars.chars().collect();
        let apostrophe_is_unsafe = !safe_chars.contains(&APOSTROPHE);

        let mut words: Vec<Vec<char>> = stop_words
            .iter()
            .map(|w| w.as_ref().chars().flat_map(char::to_lowercase).collect::<Vec<_>>())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();

        Self {
            safe_chars,
            stop_words: words,
            apostrophe_is_unsafe,
        }
    }

    /// Alphanumeric or explicitly safe.
    #[inline]
    pub fn is_wanted(&self, ch: char) -> bool {
        is_alphanumeric(ch) || self.safe_chars.contains(&ch)
    }

    pub fn has_stop_words(&self) -> bool {
        !self.stop_words.is_empty()
    }

    /// Returns the non-empty tokens of `text`, in order.
    ///
    /// Unwanted runs and whole-word stop words are equivalent delimiters.
    /// A stop word only matches when flanked by non-alphanumerics (or the
    /// string edges), so `"The4"` never matches `"the"`.
    pub fn sanitize(&self, text: &str) -> Vec<String> {
        let cleaned: String;
        let text = if self.apostrophe_is_unsafe && text.contains(APOSTROPHE) {
            cleaned = text.replace(APOSTROPHE, "");
            cleaned.trim()
        } else if self.apostrophe_is_unsafe {
            text.trim()
        } else {
            text
        };

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

        let mut tokens = Vec::new();
        let mut token_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let delimiter_len = if !self.is_wanted(chars[i].1) {
                chars[i..]
                    .iter()
                    .take_while(|&&(_, ch)| !self.is_wanted(ch))
                    .count()
            } else {
                self.stop_word_at(&chars, i)
            };

            if delimiter_len == 0 {
                i += 1;
                continue;
            }

            push_token(&mut tokens, &text[token_start..byte_at(i)]);
            i += delimiter_len;
            token_start = byte_at(i);
        }
        push_token(&mut tokens, &text[token_start..]);

        tokens
    }

    /// Char length of the stop word matching at `i`, or 0.
    fn stop_word_at(&self, chars: &[(usize, char)], i: usize) -> usize {
        if self.stop_words.is_empty() {
            return 0;
        }
        if i > 0 && is_alphanumeric(chars[i - 1].1) {
            return 0;
        }

        for word in &self.stop_words {
            let end = i + word.len();
            if end > chars.len() {
                continue;
            }
            let matches = chars[i..end]
                .iter()
                .zip(word)
                .all(|(&(_, ch), &w)| eq_ignore_case(ch, w));
            let bounded = chars.get(end).is_none_or(|&(_, next)| !is_alphanumeric(next));
            if matches && bounded {
                return word.len();
            }
        }
        0
    }
}

fn push_token(tokens: &mut Vec<String>, token: &str) {
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}

/// `lowered` is already lowercase.
fn eq_ignore_case(ch: char, lowered: char) -> bool {
    if ch == lowered {
        return true;
    }
    let mut lower = ch.to_lowercase();
    lower.next() == Some(lowered) && lower.next().is_none()
}
