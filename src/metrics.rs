//! Lookup Metrics
//!
//! Cache and disk counters plus resolve latency.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Counters for one retriever
#[derive(Debug)]
pub struct LookupMetrics {
    /// Ids served from the cache
    cache_hits: AtomicU64,
    /// Ids not found in the cache
    cache_misses: AtomicU64,
    /// Lines read from the vector file
    disk_reads: AtomicU64,
    /// Malformed lines replaced by random vectors
    substitutions: AtomicU64,
    /// Query positions holding unknown words
    out_of_vocabulary: AtomicU64,

    resolves: AtomicU64,
    latency_sum_us: AtomicU64,
    latency_min_us: AtomicU64,
    latency_max_us: AtomicU64,
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self {
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            disk_reads: AtomicU64::new(0),
            substitutions: AtomicU64::new(0),
            out_of_vocabulary: AtomicU64::new(0),
            resolves: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
            latency_min_us: AtomicU64::new(u64::MAX),
            latency_max_us: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_hits(&self, n: u64) {
        self.cache_hits.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn record_misses(&self, n: u64) {
        self.cache_misses.fetch_add(n, Ordering::Relaxed);
    }

    pub(crate) fn record_disk_read(&self) {
        self.disk_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_substitution(&self) {
        self.substitutions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_out_of_vocabulary(&self, n: u64) {
        self.out_of_vocabulary.fetch_add(n, Ordering::Relaxed);
    }

    /// Record one completed resolve call
    pub(crate) fn record_resolve(&self, latency: Duration) {
        let latency_us = latency.as_micros() as u64;
        self.resolves.fetch_add(1, Ordering::Relaxed);
        self.latency_sum_us.fetch_add(latency_us, Ordering::Relaxed);
        self.latency_min_us.fetch_min(latency_us, Ordering::Relaxed);
        self.latency_max_us.fetch_max(latency_us, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn disk_reads(&self) -> u64 {
        self.disk_reads.load(Ordering::Relaxed)
    }

    pub fn substitutions(&self) -> u64 {
        self.substitutions.load(Ordering::Relaxed)
    }

    pub fn out_of_vocabulary(&self) -> u64 {
        self.out_of_vocabulary.load(Ordering::Relaxed)
    }

    pub fn resolves(&self) -> u64 {
        self.resolves.load(Ordering::Relaxed)
    }

    /// Fraction of looked-up ids served from the cache
    pub fn hit_rate(&self) -> f64 {
        let hits = self.cache_hits();
        let total = hits + self.cache_misses();
        if total == 0 {
            return 0.0;
        }
        hits as f64 / total as f64
    }

    /// Get average resolve latency in microseconds
    pub fn avg_latency_us(&self) -> f64 {
        let count = self.resolves();
        if count == 0 {
            return 0.0;
        }
        self.latency_sum_us.load(Ordering::Relaxed) as f64 / count as f64
    }

    pub fn min_latency_us(&self) -> u64 {
        match self.latency_min_us.load(Ordering::Relaxed) {
            u64::MAX => 0,
            min => min,
        }
    }

    pub fn max_latency_us(&self) -> u64 {
        self.latency_max_us.load(Ordering::Relaxed)
    }

    /// Get a summary of metrics
    pub fn summary(&self) -> String {
        format!(
            "Resolves: {} | Hits: {} Misses: {} ({:.1}% hit) | Disk reads: {} | Substituted: {} | OOV: {} | Latency (µs): avg={:.1}, min={}, max={}",
            self.resolves(),
            self.cache_hits(),
            self.cache_misses(),
            self.hit_rate() * 100.0,
            self.disk_reads(),
            self.substitutions(),
            self.out_of_vocabulary(),
            self.avg_latency_us(),
            self.min_latency_us(),
            self.max_latency_us()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = LookupMetrics::new();

        metrics.record_hits(3);
        metrics.record_misses(1);
        metrics.record_disk_read();
        metrics.record_substitution();
        metrics.record_out_of_vocabulary(2);
        metrics.record_resolve(Duration::from_micros(100));
        metrics.record_resolve(Duration::from_micros(300));

        assert_eq!(metrics.cache_hits(), 3);
        assert_eq!(metrics.cache_misses(), 1);
        assert_eq!(metrics.disk_reads(), 1);
        assert_eq!(metrics.substitutions(), 1);
        assert_eq!(metrics.out_of_vocabulary(), 2);
        assert_eq!(metrics.resolves(), 2);
        assert!((metrics.hit_rate() - 0.75).abs() < 1e-9);
        assert_eq!(metrics.min_latency_us(), 100);
        assert_eq!(metrics.max_latency_us(), 300);
        assert!((metrics.avg_latency_us() - 200.0).abs() < 0.1);
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = LookupMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.min_latency_us(), 0);
        assert!(metrics.summary().starts_with("Resolves: 0"));
    }
}
