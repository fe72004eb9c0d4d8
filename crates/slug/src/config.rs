//! Plain-data configuration for the slug engine.
//!
//! [`SlugOptions`] mirrors every knob of [`Slugify`](crate::Slugify) that can
//! be expressed as data, so engines can be described in configuration files
//! and rebuilt deterministically. Function-valued settings (custom
//! pretranslation or transliteration) are only available through the
//! engine's builder.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use slugcore::SlugOptions;
//!
//! let options = SlugOptions::default();
//! assert_eq!(options.separator, "-");
//! assert_eq!(options.max_length, 2000);
//! assert_eq!(options.min_length, 25);
//! assert!(!options.to_lower);
//! ```
//!
//! ## URL Slugs
//!
//! ```rust
//! use slugcore::{SlugOptions, Slugify};
//!
//! let options = SlugOptions {
//!     to_lower: true,
//!     ..Default::default()
//! };
//! let slugify = Slugify::from_options(&options).expect("valid options");
//! assert_eq!(slugify.slugify("The Über article"), "the-uber-article");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transliterate::TransliterateKind;

/// Default cap on slug length, following URL length recommendations.
pub const DEFAULT_MAX_LENGTH: usize = 2000;

/// Default minimum clause length for phrase extraction.
pub const DEFAULT_MIN_LENGTH: usize = 25;

/// Default token separator.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Serializable slug engine configuration.
///
/// # Fields
///
/// - `safe_chars`: characters kept in addition to alphanumerics
/// - `stop_words`: whole words removed regardless of case
/// - `to_lower`: lowercase the whole slug
/// - `max_length`: character cap, `0` for unbounded
/// - `min_length`: shortest clause accepted by phrase extraction
/// - `separator`: string placed between tokens
/// - `capitalize`: uppercase the first character of the result
/// - `extract_phrase`: prefer the first punctuation-delimited clause
/// - `truncate_words`: allow cutting inside a word at join time
/// - `pretranslate`: literal substring replacements, empty for none
/// - `transliterate`: built-in transliterator
///
/// # Serialization
///
/// ```json
/// {
///   "safe_chars": "_",
///   "stop_words": ["a", "the"],
///   "to_lower": true,
///   "max_length": 80,
///   "separator": "-",
///   "pretranslate": {"♥": "love"},
///   "transliterate": "deunicode"
/// }
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugOptions {
    /// Characters, besides alphanumerics, that are never stripped.
    ///
    /// An apostrophe is removed before tokenization unless it appears here.
    pub safe_chars: String,

    /// Words dropped wherever they stand alone, compared case-insensitively.
    ///
    /// A stop word only matches between non-alphanumeric characters, so
    /// `"the"` removes `"The"` from `"The red apple"` but leaves `"The4"`.
    pub stop_words: Vec<String>,

    /// Lowercase the entire slug after transliteration.
    ///
    /// When false, acronyms keep their uppercase form and other words keep
    /// whatever case they had.
    pub to_lower: bool,

    /// Maximum slug length in characters. `0` disables every length limit.
    pub max_length: usize,

    /// Minimum length of a clause accepted by phrase extraction.
    pub min_length: usize,

    /// Separator inserted between tokens.
    pub separator: String,

    /// Uppercase the first character of the final slug.
    pub capitalize: bool,

    /// Cut the text at its first punctuation-delimited clause that is at
    /// least `min_length` characters long.
    pub extract_phrase: bool,

    /// Skip word-safe truncation; the joiner clamps the final slug instead.
    pub truncate_words: bool,

    /// Literal replacements applied before transliteration.
    ///
    /// Lowercase keys also match their uppercase form, mapped to the
    /// capitalized replacement.
    pub pretranslate: BTreeMap<String, String>,

    /// Built-in transliterator.
    pub transliterate: TransliterateKind,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            safe_chars: String::new(),
            stop_words: Vec::new(),
            to_lower: false,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
            capitalize: false,
            extract_phrase: false,
            truncate_words: false,
            pretranslate: BTreeMap::new(),
            transliterate: TransliterateKind::default(),
        }
    }
}

/// Per-call settings that override the engine's stored configuration
/// without changing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub max_length: Option<usize>,
    pub separator: Option<String>,
    pub to_lower: Option<bool>,
    pub capitalize: Option<bool>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn to_lower(mut self, to_lower: bool) -> Self {
        self.to_lower = Some(to_lower);
        self
    }

    pub fn capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = Some(capitalize);
        self
    }
}
