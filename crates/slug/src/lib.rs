//! Slug generation engine.
//!
//! Turns arbitrary Unicode text into short, URL-safe slugs. The pipeline is:
//!
//! 1. Split the text into plain and acronym spans (`segment`)
//! 2. Pretranslate and transliterate each span, uppercasing acronym spans
//!    again so `"ÜBER"` stays `"UEBER"` (or lowercase everything with `to_lower`)
//! 3. Bound the length before punctuation disappears, either word-safe or at
//!    the first clause (`truncate`)
//! 4. Drop unwanted characters and stop words (`sanitize`)
//! 5. Join tokens under the length cap (`join`), optionally capitalizing
//!
//! ## Quick start
//!
//! ```rust
//! use slugcore::{slugify, Overrides, Slugify};
//!
//! assert_eq!(slugify("This % is a test ---"), "This-is-a-test");
//!
//! let mut engine = Slugify::new();
//! engine.set_stop_words(["a", "the"]);
//! assert_eq!(engine.slugify("The red apple"), "red-apple");
//! assert_eq!(
//!     engine.slugify_with("one two three four", &Overrides::new().max_length(12)),
//!     "one-two-four"
//! );
//! ```
//!
//! ## Guarantees
//!
//! - Calls are pure: same engine configuration and text, same slug
//! - The slug never starts or ends with the separator and holds only
//!   alphanumerics, safe characters and separators
//! - With a non-zero `max_length` the slug has at most that many characters
//! - Configuration errors surface when an engine is built, never per call
//!
//! [`UniqueSlugify`] adds a registry on top so repeated texts get `-1`, `-2`
//! suffixes, safely across threads.

mod classify;
mod config;
mod decode;
mod engine;
mod error;
mod join;
mod pretranslate;
mod sanitize;
mod segment;
mod transliterate;
mod truncate;
mod unique;

pub use crate::classify::{
    is_alphanumeric, is_lower, is_sentence_break, is_terminal_punctuation, is_upper,
};
pub use crate::config::{
    Overrides, SlugOptions, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SEPARATOR,
};
pub use crate::decode::decode_lenient;
pub use crate::engine::{slugify, Slugify, SlugifyBuilder};
pub use crate::error::SlugError;
pub use crate::join::join_words;
pub use crate::pretranslate::{Pretranslate, PretranslateMap, TextFn};
pub use crate::sanitize::UnwantedMatcher;
pub use crate::segment::{segment, Span, SpanKind};
pub use crate::transliterate::{Transliterate, TransliterateKind};
pub use crate::truncate::{avoid_truncated_word, extract_phrase, PHRASE_MARKS};
pub use crate::unique::{Issued, UniqueSlugify};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_compose_like_the_engine() {
        let text = "Öl und SÜD";
        let pre = Pretranslate::from_pairs([("ö", "oe"), ("ü", "ue")]).expect("valid table");
        let translit = Transliterate::default();

        let mut assembled = String::new();
        for span in segment(text) {
            let part = translit.apply(&pre.apply(span.text)).into_owned();
            match span.kind {
                SpanKind::Upper => assembled.push_str(&part.to_uppercase()),
                SpanKind::Plain => assembled.push_str(&part),
            }
        }
        let bounded = avoid_truncated_word(&assembled, DEFAULT_MAX_LENGTH);
        let words = UnwantedMatcher::new("", &[] as &[&str]).sanitize(&bounded);
        let slug = join_words(&words, DEFAULT_SEPARATOR, DEFAULT_MAX_LENGTH);

        let engine = Slugify::builder().pretranslate(pre).build();
        assert_eq!(slug, "Oel-und-SUED");
        assert_eq!(engine.slugify(text), slug);
    }

    #[test]
    fn slug_never_has_edge_separators() {
        let engine = Slugify::new();
        for text in ["--a--", "  b  ", "%c%", "___", "", "д"] {
            let slug = engine.slugify(text);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{text:?} -> {slug:?}");
        }
    }

    #[test]
    fn default_free_function_matches_fresh_engine() {
        let engine = Slugify::new();
        for text in ["C'est déjà l'été.", "UP Title", "北亰"] {
            assert_eq!(slugify(text), engine.slugify(text));
        }
    }
}
