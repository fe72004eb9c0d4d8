//! Slugs that are never issued twice.

use std::sync::{Mutex, MutexGuard};

use fxhash::FxHashSet;
use tracing::debug;

use crate::config::Overrides;
use crate::engine::Slugify;

/// A slug handed out by [`UniqueSlugify::issue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issued {
    pub slug: String,
    /// Number of candidates rejected before `slug` was free.
    pub collisions: usize,
}

#[derive(Debug, Default)]
struct UsedSlugs {
    members: FxHashSet<String>,
    order: Vec<String>,
}

impl UsedSlugs {
    fn insert(&mut self, slug: String) -> bool {
        if self.members.insert(slug.clone()) {
            self.order.push(slug);
            true
        } else {
            false
        }
    }
}

/// Wraps a [`Slugify`] engine with a registry of issued slugs.
///
/// A slug that is already taken gets `{separator}1`, `{separator}2`, ...
/// appended until a free candidate is found. The lookup and the insert happen
/// under one lock, so a shared `UniqueSlugify` never issues the same slug to
/// two callers. The registry only grows.
#[derive(Debug)]
pub struct UniqueSlugify {
    engine: Slugify,
    used: Mutex<UsedSlugs>,
}

impl UniqueSlugify {
    pub fn new(engine: Slugify) -> Self {
        Self {
            engine,
            used: Mutex::new(UsedSlugs::default()),
        }
    }

    /// Starts with `uids` already marked as taken.
    pub fn with_uids<I, S>(engine: Slugify, uids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut used = UsedSlugs::default();
        for uid in uids {
            used.insert(uid.into());
        }
        Self {
            engine,
            used: Mutex::new(used),
        }
    }

    pub fn generate(&self, text: &str) -> String {
        self.issue(text, &Overrides::default()).slug
    }

    pub fn generate_with(&self, text: &str, overrides: &Overrides) -> String {
        self.issue(text, overrides).slug
    }

    /// Like [`generate_with`](Self::generate_with), also reporting how many
    /// candidates collided.
    pub fn issue(&self, text: &str, overrides: &Overrides) -> Issued {
        let base = self.engine.slugify_with(text, overrides);
        let separator = overrides
            .separator
            .as_deref()
            .unwrap_or(self.engine.separator());

        let mut used = self.lock();
        if used.insert(base.clone()) {
            return Issued {
                slug: base,
                collisions: 0,
            };
        }

        let mut counter = 1usize;
        loop {
            let candidate = format!("{base}{separator}{counter}");
            if used.insert(candidate.clone()) {
                debug!(
                    base = %base,
                    slug = %candidate,
                    collisions = counter,
                    "unique_slug_collision"
                );
                return Issued {
                    slug: candidate,
                    collisions: counter,
                };
            }
            counter += 1;
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.lock().members.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every taken slug, seeds first, in the order it was registered.
    pub fn issued(&self) -> Vec<String> {
        self.lock().order.clone()
    }

    pub fn engine(&self) -> &Slugify {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Slugify {
        &mut self.engine
    }

    fn lock(&self) -> MutexGuard<'_, UsedSlugs> {
        // The registry stays consistent even if a holder panicked.
        self.used.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
