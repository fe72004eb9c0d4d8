//! Substring rewriting applied before transliteration.
//!
//! Typical uses are emoji (`"♥" -> "love"`), ligatures, or language-specific
//! spellings the generic transliterator gets wrong (`"ü" -> "ue"`).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use fxhash::FxHashMap;

use crate::error::SlugError;

/// A caller-supplied `text -> text` capability.
pub type TextFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// The pretranslation step, resolved once when the engine is configured.
#[derive(Clone, Default)]
pub enum Pretranslate {
    /// Leave text untouched.
    #[default]
    Identity,
    /// Longest-match literal replacement.
    Map(PretranslateMap),
    /// Arbitrary caller function.
    Custom(TextFn),
}

impl Pretranslate {
    /// Builds a literal replacement table from `(key, value)` pairs.
    ///
    /// Fails when a key is empty, because an empty key would match between
    /// every pair of characters.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, SlugError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PretranslateMap::new(pairs).map(Self::Map)
    }

    /// Wraps a caller function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self {
            Self::Identity => Cow::Borrowed(text),
            Self::Map(map) => map.apply(text),
            Self::Custom(f) => Cow::Owned(f(text)),
        }
    }
}

impl fmt::Debug for Pretranslate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Literal replacement table with longest-match-first lookup.
///
/// For each lowercase key an uppercase twin is derived (mapped to the
/// capitalized value) unless the caller already supplied it, so `{"ü": "ue"}`
/// also turns `"Ü"` into `"Ue"`.
#[derive(Clone)]
pub struct PretranslateMap {
    /// Entries sorted by descending key length.
    entries: Vec<(String, String)>,
    /// First char of a key -> indices into `entries`, longest first.
    by_first_char: FxHashMap<char, Vec<usize>>,
}

impl PretranslateMap {
    pub fn new<I, K, V>(pairs: I) -> Result<Self, SlugError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table: FxHashMap<String, String> = FxHashMap::default();
        // Keys in first-insertion order.
        let mut order: Vec<String> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() {
                return Err(SlugError::Configuration(
                    "pretranslate keys must be non-empty".into(),
                ));
            }
            if table.insert(key.clone(), value.into()).is_none() {
                order.push(key);
            }
        }

        // Two lowercase keys may share an uppercase form; the earlier one wins.
        for key in &order {
            let upper = key.to_uppercase();
            if upper != *key && !table.contains_key(&upper) {
                let value = capitalize(&table[key]);
                table.insert(upper, value);
            }
        }

        let mut entries: Vec<(String, String)> = table.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut by_first_char: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (idx, (key, _)) in entries.iter().enumerate() {
            if let Some(first) = key.chars().next() {
                by_first_char.entry(first).or_default().push(idx);
            }
        }

        Ok(Self {
            entries,
            by_first_char,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces every match in a single left-to-right pass. Replacement text
    /// is never rescanned.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.entries.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut out: Option<String> = None;
        let mut copied_up_to = 0;
        let mut pos = 0;

        while let Some(ch) = text[pos..].chars().next() {
            let hit = self.by_first_char.get(&ch).and_then(|candidates| {
                candidates
                    .iter()
                    .map(|&idx| &self.entries[idx])
                    .find(|(key, _)| text[pos..].starts_with(key.as_str()))
            });

            match hit {
                Some((key, value)) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                    buf.push_str(&text[copied_up_to..pos]);
                    buf.push_str(value);
                    pos += key.len();
                    copied_up_to = pos;
                }
                None => pos += ch.len_utf8(),
            }
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[copied_up_to..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(text),
        }
    }
}

impl fmt::Debug for PretranslateMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// First char uppercased, the rest lowercased.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
