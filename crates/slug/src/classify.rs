//! Unicode character predicates shared by every slug stage.
//!
//! Letter case comes from the general category (`Lu` / `Ll`), so titlecase
//! letters and caseless scripts are neither upper nor lower. Terminal
//! punctuation follows the Unicode `Terminal_Punctuation` property, with the
//! horizontal ellipsis added because it ends clauses in running text.

use std::sync::LazyLock;

use regex::Regex;
use unicode_categories::UnicodeCategories;

/// Horizontal ellipsis, treated as a clause terminator.
const ELLIPSIS: char = '\u{2026}';

/// Latin, Arabic, small and fullwidth commas. They are terminal punctuation
/// but never end an acronym run.
const COMMAS: [char; 4] = [',', '\u{060C}', '\u{FE50}', '\u{FF0C}'];

/// The `Terminal_Punctuation` property plus the ellipsis, anchored to one char.
static TERMINAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[\p{Terminal_Punctuation}\u{2026}]$").ok());

/// Uppercase letter (general category `Lu`).
#[inline]
pub fn is_upper(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_uppercase();
    }
    ch.is_letter_uppercase()
}

/// Lowercase letter (general category `Ll`).
#[inline]
pub fn is_lower(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_lowercase();
    }
    ch.is_letter_lowercase()
}

/// Alphabetic or numeric in any script.
#[inline]
pub fn is_alphanumeric(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Terminal punctuation in any script, plus the ellipsis.
pub fn is_terminal_punctuation(ch: char) -> bool {
    if ch == ELLIPSIS {
        return true;
    }
    let mut buf = [0u8; 4];
    let encoded: &str = ch.encode_utf8(&mut buf);
    TERMINAL.as_ref().is_some_and(|re| re.is_match(encoded))
}

/// Terminal punctuation that breaks an acronym run: everything in
/// [`is_terminal_punctuation`] except commas.
#[inline]
pub fn is_sentence_break(ch: char) -> bool {
    !COMMAS.contains(&ch) && is_terminal_punctuation(ch)
}
