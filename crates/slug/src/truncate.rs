//! Length control that runs before sanitization, while punctuation and
//! whitespace are still present.

use std::borrow::Cow;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Clause terminators tried by [`extract_phrase`], in priority order.
pub const PHRASE_MARKS: [char; 4] = ['.', ';', ',', ':'];

/// Cuts `text` to `max_length` characters without leaving half a word.
///
/// Text is NFC-normalized first and combining marks do not count towards
/// the limit. When the cut leaves a last word different from the text's last
/// word, that word is dropped and the remaining words are joined with single
/// spaces. `max_length == 0` means unbounded.
pub fn avoid_truncated_word(text: &str, max_length: usize) -> Cow<'_, str> {
    if max_length == 0 {
        return Cow::Borrowed(text);
    }
    let Some(last_word) = text.split_whitespace().next_back() else {
        return Cow::Borrowed(text);
    };

    let normalized: Cow<'_, str> = if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    };
    let last_word: Cow<'_, str> = match &normalized {
        Cow::Borrowed(_) => Cow::Borrowed(last_word),
        Cow::Owned(_) => Cow::Owned(last_word.nfc().collect()),
    };

    let Some(cut) = cut_index(&normalized, max_length) else {
        return normalized;
    };

    let keeps_last_word = match normalized[..cut].split_whitespace().next_back() {
        None => return Cow::Owned(String::new()),
        Some(word) => word == last_word,
    };
    if keeps_last_word {
        return slice(normalized, cut);
    }

    let mut words: Vec<&str> = normalized[..cut].split_whitespace().collect();
    words.pop();
    Cow::Owned(words.join(" "))
}

/// Narrows `text` to its first punctuation-delimited clause.
///
/// The text is first bounded with [`avoid_truncated_word`]. Then each mark of
/// [`PHRASE_MARKS`] is tried in order; the prefix ending at the first
/// occurrence of a mark is adopted when it has at least `min_length`
/// characters. Without a qualifying clause the bounded text is returned.
///
/// Only the first occurrence of a mark is considered, never a later one, so a
/// `.` cut of `"a. b. c"` always falls right after `"a."`.
pub fn extract_phrase(text: &str, max_length: usize, min_length: usize) -> Cow<'_, str> {
    let text = avoid_truncated_word(text, max_length);
    let text_len = text.chars().count();

    for mark in PHRASE_MARKS {
        let Some(idx) = text.find(mark) else {
            continue;
        };
        let end = idx + mark.len_utf8();
        let phrase_len = text[..end].chars().count();
        if phrase_len >= min_length && phrase_len <= text_len {
            return slice(text, end);
        }
    }
    text
}

/// Byte index where the `max_length + 1`-th counted char starts, if any.
fn cut_index(text: &str, max_length: usize) -> Option<usize> {
    let mut counted = 0;
    for (idx, ch) in text.char_indices() {
        if is_combining_mark(ch) {
            continue;
        }
        counted += 1;
        if counted > max_length {
            return Some(idx);
        }
    }
    None
}

fn slice(text: Cow<'_, str>, end: usize) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..end]),
        Cow::Owned(mut s) => {
            s.truncate(end);
            Cow::Owned(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLANDER: &str = "Someone must have slandered Josef K., for one morning, \
                           without having done anything truly wrong, he was arrested.";

    #[test]
    fn unbounded_or_wordless_input_is_untouched() {
        assert_eq!(avoid_truncated_word("one two three", 0), "one two three");
        assert_eq!(avoid_truncated_word("", 5), "");
        assert_eq!(avoid_truncated_word("   ", 1), "   ");
    }

    #[test]
    fn text_that_fits_is_returned_whole() {
        let out = avoid_truncated_word("one two three four", 18);
        assert!(matches!(out, Cow::Borrowed("one two three four")));
        assert_eq!(avoid_truncated_word("one two three four", 100), "one two three four");
    }

    #[test]
    fn partial_word_is_dropped() {
        assert_eq!(avoid_truncated_word("one two three four", 9), "one two");
        assert_eq!(avoid_truncated_word("one two three four", 15), "one two three");
    }

    #[test]
    fn cut_on_a_boundary_still_drops_the_last_prefix_word() {
        // "one two" ends on a word boundary, but "two" is not the final word.
        assert_eq!(avoid_truncated_word("one two three four", 7), "one");
    }

    #[test]
    fn last_word_kept_when_it_is_the_final_word() {
        assert_eq!(avoid_truncated_word("one two three four ", 18), "one two three four");
    }

    #[test]
    fn single_long_word_vanishes() {
        assert_eq!(avoid_truncated_word("dlinnoeslovo", 7), "");
        assert_eq!(avoid_truncated_word("  leading words", 1), "");
    }

    #[test]
    fn combining_marks_are_not_counted() {
        let text = "ab q\u{0301}q\u{0301}";
        assert_eq!(avoid_truncated_word(text, 5), text);
    }

    #[test]
    fn output_is_nfc() {
        assert_eq!(avoid_truncated_word("Cafe\u{0301} noir", 20), "Caf\u{00E9} noir");
    }

    #[test]
    fn phrase_prefers_first_period() {
        assert_eq!(
            extract_phrase(SLANDER, 0, 25),
            "Someone must have slandered Josef K."
        );
    }

    #[test]
    fn phrase_never_reaches_a_later_period() {
        let text = "The first sentence is long enough. The second one is longer still.";
        assert_eq!(extract_phrase(text, 0, 10), "The first sentence is long enough.");
    }

    #[test]
    fn phrase_skips_short_clauses() {
        let text = "Hi. This is a much longer sentence, with a trailing clause";
        assert_eq!(
            extract_phrase(text, 0, 25),
            "Hi. This is a much longer sentence,"
        );
    }

    #[test]
    fn phrase_without_qualifying_mark_keeps_text() {
        let text = "No punctuation in this one at all";
        assert_eq!(extract_phrase(text, 0, 25), text);
        assert_eq!(extract_phrase("Tiny. Also tiny.", 0, 25), "Tiny. Also tiny.");
    }

    #[test]
    fn phrase_applies_word_safe_truncation_first() {
        // Cut to "Someone must have slandered Josef" before looking for marks.
        assert_eq!(
            extract_phrase(SLANDER, 35, 25),
            "Someone must have slandered Josef"
        );
    }

    #[test]
    fn phrase_min_length_zero_takes_first_mark() {
        assert_eq!(extract_phrase("a; b. c", 0, 0), "a; b.");
        assert_eq!(extract_phrase("a: b, c", 0, 0), "a: b,");
    }
}
