//! Workspace umbrella crate for slugkit.
//!
//! Re-exports the slug engine and adds what a host application needs around
//! it: engines described by YAML or JSON files, and a metrics hook so slug
//! latency and registry collisions can be observed with a single API entry
//! point.

pub mod config;

pub use config::{ConfigLoadError, SlugYamlConfig, SlugkitConfig, UniqueYamlConfig};
pub use slugcore::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SEPARATOR, Issued, Overrides, Pretranslate,
    SlugError, SlugOptions, Slugify, SlugifyBuilder, Transliterate, TransliterateKind,
    UniqueSlugify, decode_lenient, slugify,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for slug generation.
pub trait SlugMetrics: Send + Sync {
    fn record_slugify(&self, latency: Duration, slug_len: usize);
    /// Called when a unique slug needed `attempts` suffixed candidates.
    fn record_collision(&self, attempts: usize);
}

/// Install or clear the global slug metrics recorder.
pub fn set_slug_metrics(recorder: Option<Arc<dyn SlugMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SlugMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn SlugMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn SlugMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn SlugMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_slugify(self, slug: &str) {
        self.recorder
            .record_slugify(self.start.elapsed(), slug.chars().count());
    }

    fn record_issued(self, issued: &Issued) {
        if issued.collisions > 0 {
            self.recorder.record_collision(issued.collisions);
        }
        self.record_slugify(&issued.slug);
    }
}

/// Slugify `text` with `engine`, reporting to the installed metrics recorder.
pub fn generate_slug(engine: &Slugify, text: &str) -> String {
    generate_slug_with(engine, text, &Overrides::default())
}

pub fn generate_slug_with(engine: &Slugify, text: &str, overrides: &Overrides) -> String {
    let metrics = MetricsSpan::start();
    let slug = engine.slugify_with(text, overrides);
    if let Some(span) = metrics {
        span.record_slugify(&slug);
    }
    slug
}

/// Issue a unique slug for `text`, reporting latency and collisions to the
/// installed metrics recorder.
pub fn generate_unique_slug(registry: &UniqueSlugify, text: &str) -> String {
    generate_unique_slug_with(registry, text, &Overrides::default())
}

pub fn generate_unique_slug_with(
    registry: &UniqueSlugify,
    text: &str,
    overrides: &Overrides,
) -> String {
    let metrics = MetricsSpan::start();
    let issued = registry.issue(text, overrides);
    if let Some(span) = metrics {
        span.record_issued(&issued);
    }
    issued.slug
}
