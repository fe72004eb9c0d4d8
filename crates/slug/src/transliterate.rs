//! Transliteration collaborator: best-effort Unicode to ASCII folding.
//!
//! The engine only ever sees a `text -> text` function. The built-ins cover
//! the common cases; hosts can plug their own table through
//! [`Transliterate::custom`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::pretranslate::TextFn;

/// Built-in transliterators selectable from plain configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransliterateKind {
    /// Table-driven transliteration of every script (`"北亰"` -> `"Bei Jing"`).
    #[default]
    Deunicode,
    /// NFKD decomposition with non-ASCII chars dropped. Latin accents only.
    AsciiFold,
    /// Keep the native script.
    Identity,
}

/// The transliteration step used by the engine.
#[derive(Clone)]
pub struct Transliterate {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Builtin(TransliterateKind),
    Custom(TextFn),
}

impl Transliterate {
    pub fn builtin(kind: TransliterateKind) -> Self {
        Self {
            inner: Inner::Builtin(kind),
        }
    }

    pub fn identity() -> Self {
        Self::builtin(TransliterateKind::Identity)
    }

    /// Wraps a host-supplied transliteration function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            inner: Inner::Custom(Arc::new(f)),
        }
    }

    /// The built-in kind, or `None` for a custom function.
    pub fn kind(&self) -> Option<TransliterateKind> {
        match self.inner {
            Inner::Builtin(kind) => Some(kind),
            Inner::Custom(_) => None,
        }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.inner {
            Inner::Builtin(TransliterateKind::Deunicode) => {
                if text.is_ascii() {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(deunicode::deunicode(text))
                }
            }
            Inner::Builtin(TransliterateKind::AsciiFold) => {
                if text.is_ascii() {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfkd().filter(char::is_ascii).collect())
                }
            }
            Inner::Builtin(TransliterateKind::Identity) => Cow::Borrowed(text),
            Inner::Custom(f) => Cow::Owned(f(text)),
        }
    }
}

impl Default for Transliterate {
    fn default() -> Self {
        Self::builtin(TransliterateKind::default())
    }
}

impl From<TransliterateKind> for Transliterate {
    fn from(kind: TransliterateKind) -> Self {
        Self::builtin(kind)
    }
}

impl fmt::Debug for Transliterate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Builtin(kind) => f.debug_tuple("Transliterate").field(kind).finish(),
            Inner::Custom(_) => f.write_str("Transliterate(Custom(..))"),
        }
    }
}
