//! Resolution metrics.
//!
//! Counts how each key lookup was satisfied so that missing translations show
//! up in numbers, not only in logs.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by a `Translator`.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Key found in the requested language
    hits: AtomicUsize,

    /// Key missing in the requested language, found in the default language
    fallbacks: AtomicUsize,

    /// Key missing everywhere; the key itself was returned
    misses: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let total = hits + fallbacks + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            fallbacks,
            misses,
            total,
            hit_rate,
        }
    }
}

/// Snapshot of translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub fallbacks: usize,
    pub misses: usize,
    pub total: usize,
    /// Share of lookups answered in the requested language, in percent
    pub hit_rate: f64,
}

impl MetricsReport {
    /// One-line summary for logs.
    pub fn format_summary(&self) -> String {
        format!(
            "Lookups: {} total, {} direct ({:.1}%), {} fallback, {} missing",
            self.total, self.hits, self.hit_rate, self.fallbacks, self.misses
        )
    }
}
