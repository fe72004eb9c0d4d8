use std::borrow::Cow;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use tracing::{debug, trace};

use crate::config::{
    Overrides, SlugOptions, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SEPARATOR,
};
use crate::decode::decode_lenient;
use crate::error::SlugError;
use crate::join::join_words;
use crate::pretranslate::Pretranslate;
use crate::sanitize::UnwantedMatcher;
use crate::segment::{segment, SpanKind};
use crate::transliterate::Transliterate;
use crate::truncate::{avoid_truncated_word, extract_phrase};

/// The slug engine.
///
/// Configuration lives in private fields. Setters that touch `safe_chars`
/// or `stop_words` rebuild the derived [`UnwantedMatcher`] and swap it in;
/// the matcher itself is never mutated. Calls take `&self`, so one engine can
/// be shared across threads, and setters take `&mut self`, so a rebuild can
/// never interleave with a call.
#[derive(Debug, Clone)]
pub struct Slugify {
    pretranslate: Pretranslate,
    transliterate: Transliterate,
    safe_chars: String,
    stop_words: Vec<String>,
    unwanted: Arc<UnwantedMatcher>,
    to_lower: bool,
    max_length: usize,
    min_length: usize,
    separator: String,
    capitalize: bool,
    extract_phrase: bool,
    truncate_words: bool,
}

impl Default for Slugify {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Slugify {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SlugifyBuilder {
        SlugifyBuilder::default()
    }

    /// Builds an engine from plain-data options.
    ///
    /// Fails with [`SlugError::Configuration`] when the pretranslation table
    /// is invalid.
    pub fn from_options(options: &SlugOptions) -> Result<Self, SlugError> {
        let pretranslate = if options.pretranslate.is_empty() {
            Pretranslate::Identity
        } else {
            Pretranslate::from_pairs(options.pretranslate.clone())?
        };

        Ok(Self::builder()
            .pretranslate(pretranslate)
            .transliterate(options.transliterate.into())
            .safe_chars(options.safe_chars.clone())
            .stop_words(options.stop_words.clone())
            .to_lower(options.to_lower)
            .max_length(options.max_length)
            .min_length(options.min_length)
            .separator(options.separator.clone())
            .capitalize(options.capitalize)
            .extract_phrase(options.extract_phrase)
            .truncate_words(options.truncate_words)
            .build())
    }

    /// Slugifies `text` with the stored configuration.
    pub fn slugify(&self, text: &str) -> String {
        self.slugify_with(text, &Overrides::default())
    }

    /// Slugifies raw bytes, dropping sequences that are not valid UTF-8.
    pub fn slugify_bytes(&self, bytes: &[u8]) -> String {
        self.slugify_with(&decode_lenient(bytes), &Overrides::default())
    }

    pub fn slugify_bytes_with(&self, bytes: &[u8], overrides: &Overrides) -> String {
        self.slugify_with(&decode_lenient(bytes), overrides)
    }

    /// Slugifies `text`, letting `overrides` replace `max_length`,
    /// `separator`, `to_lower` and `capitalize` for this call only.
    ///
    /// An overridden `max_length` bounds the joined slug. Word-safe
    /// truncation and phrase extraction keep using the stored `max_length`.
    pub fn slugify_with(&self, text: &str, overrides: &Overrides) -> String {
        let start = Instant::now();
        let max_length = overrides.max_length.unwrap_or(self.max_length);
        let separator = overrides.separator.as_deref().unwrap_or(&self.separator);
        let to_lower = overrides.to_lower.unwrap_or(self.to_lower);
        let capitalize = overrides.capitalize.unwrap_or(self.capitalize);

        let assembled = if to_lower {
            self.translate(text).to_lowercase()
        } else {
            self.translate_spans(text)
        };

        let bounded = if self.extract_phrase {
            trace!(stage = "extract_phrase", "slugify_bound");
            extract_phrase(&assembled, self.max_length, self.min_length)
        } else if !self.truncate_words {
            trace!(stage = "avoid_truncated_word", "slugify_bound");
            avoid_truncated_word(&assembled, self.max_length)
        } else {
            trace!(stage = "deferred", "slugify_bound");
            Cow::Borrowed(assembled.as_str())
        };

        let words = self.unwanted.sanitize(&bounded);
        let mut slug = join_words(&words, separator, max_length);
        if capitalize {
            slug = capitalize_first(&slug);
        }

        debug!(
            input_len = text.len(),
            tokens = words.len(),
            slug_len = slug.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "slugify"
        );
        slug
    }

    /// Pretranslate then transliterate the whole text.
    fn translate(&self, text: &str) -> String {
        let pre = self.pretranslate.apply(text);
        self.transliterate.apply(&pre).into_owned()
    }

    /// Translate span by span so acronym spans can be uppercased afterwards.
    fn translate_spans(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for span in segment(text) {
            let part = self.translate(span.text);
            match span.kind {
                SpanKind::Plain => out.push_str(&part),
                SpanKind::Upper => out.push_str(&part.to_uppercase()),
            }
        }
        out
    }

    pub fn pretranslate(&self) -> &Pretranslate {
        &self.pretranslate
    }

    pub fn transliterate(&self) -> &Transliterate {
        &self.transliterate
    }

    pub fn safe_chars(&self) -> &str {
        &self.safe_chars
    }

    pub fn stop_words(&self) -> &[String] {
        &self.stop_words
    }

    /// The derived matcher currently in use.
    pub fn unwanted(&self) -> &Arc<UnwantedMatcher> {
        &self.unwanted
    }

    pub fn to_lower(&self) -> bool {
        self.to_lower
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn capitalize(&self) -> bool {
        self.capitalize
    }

    pub fn extract_phrase(&self) -> bool {
        self.extract_phrase
    }

    pub fn truncate_words(&self) -> bool {
        self.truncate_words
    }

    pub fn set_pretranslate(&mut self, pretranslate: Pretranslate) {
        self.pretranslate = pretranslate;
    }

    pub fn set_transliterate(&mut self, transliterate: Transliterate) {
        self.transliterate = transliterate;
    }

    pub fn set_safe_chars(&mut self, safe_chars: impl Into<String>) {
        self.safe_chars = safe_chars.into();
        self.rebuild_unwanted();
    }

    pub fn set_stop_words<I, S>(&mut self, stop_words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self.rebuild_unwanted();
    }

    pub fn set_to_lower(&mut self, to_lower: bool) {
        self.to_lower = to_lower;
    }

    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    pub fn set_min_length(&mut self, min_length: usize) {
        self.min_length = min_length;
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    pub fn set_capitalize(&mut self, capitalize: bool) {
        self.capitalize = capitalize;
    }

    pub fn set_extract_phrase(&mut self, extract_phrase: bool) {
        self.extract_phrase = extract_phrase;
    }

    pub fn set_truncate_words(&mut self, truncate_words: bool) {
        self.truncate_words = truncate_words;
    }

    fn rebuild_unwanted(&mut self) {
        self.unwanted = Arc::new(UnwantedMatcher::new(&self.safe_chars, &self.stop_words));
    }
}

/// Builder for [`Slugify`]. Unset fields keep their defaults.
#[derive(Debug, Clone)]
pub struct SlugifyBuilder {
    pretranslate: Pretranslate,
    transliterate: Transliterate,
    safe_chars: String,
    stop_words: Vec<String>,
    to_lower: bool,
    max_length: usize,
    min_length: usize,
    separator: String,
    capitalize: bool,
    extract_phrase: bool,
    truncate_words: bool,
}

impl Default for SlugifyBuilder {
    fn default() -> Self {
        Self {
            pretranslate: Pretranslate::Identity,
            transliterate: Transliterate::default(),
            safe_chars: String::new(),
            stop_words: Vec::new(),
            to_lower: false,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
            capitalize: false,
            extract_phrase: false,
            truncate_words: false,
        }
    }
}

impl SlugifyBuilder {
    pub fn pretranslate(mut self, pretranslate: Pretranslate) -> Self {
        self.pretranslate = pretranslate;
        self
    }

    pub fn transliterate(mut self, transliterate: Transliterate) -> Self {
        self.transliterate = transliterate;
        self
    }

    pub fn safe_chars(mut self, safe_chars: impl Into<String>) -> Self {
        self.safe_chars = safe_chars.into();
        self
    }

    pub fn stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    pub fn to_lower(mut self, to_lower: bool) -> Self {
        self.to_lower = to_lower;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }

    pub fn extract_phrase(mut self, extract_phrase: bool) -> Self {
        self.extract_phrase = extract_phrase;
        self
    }

    pub fn truncate_words(mut self, truncate_words: bool) -> Self {
        self.truncate_words = truncate_words;
        self
    }

    pub fn build(self) -> Slugify {
        let unwanted = Arc::new(UnwantedMatcher::new(&self.safe_chars, &self.stop_words));
        Slugify {
            pretranslate: self.pretranslate,
            transliterate: self.transliterate,
            safe_chars: self.safe_chars,
            stop_words: self.stop_words,
            unwanted,
            to_lower: self.to_lower,
            max_length: self.max_length,
            min_length: self.min_length,
            separator: self.separator,
            capitalize: self.capitalize,
            extract_phrase: self.extract_phrase,
            truncate_words: self.truncate_words,
        }
    }
}

/// Slugifies `text` with a shared default engine.
pub fn slugify(text: &str) -> String {
    static DEFAULT: OnceLock<Slugify> = OnceLock::new();
    DEFAULT.get_or_init(Slugify::new).slugify(text)
}

/// Uppercases the first char and leaves the rest alone.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
