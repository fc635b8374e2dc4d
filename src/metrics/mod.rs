//! Metrics collection module
//!
//! Counts suggestion queries and how the executor resolved them.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Query counters shared between the executor and the stats endpoint
#[derive(Debug, Default)]
pub struct QueryMetrics {
    /// Total queries executed
    total_queries: AtomicU64,
    /// Queries answered without asking a provider
    unconfigured: AtomicU64,
    /// Queries where the provider returned no collection
    empty_results: AtomicU64,
    /// Queries where excess suggestions were dropped
    truncated: AtomicU64,
    /// Queries where the provider failed
    provider_failures: AtomicU64,
}

impl QueryMetrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_query(&self) {
        self.total_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_unconfigured(&self) {
        self.unconfigured.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_empty_result(&self) {
        self.empty_results.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_truncated(&self) {
        self.truncated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_provider_failure(&self) {
        self.provider_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point-in-time copy of all counters
    pub fn snapshot(&self) -> QueryStats {
        QueryStats {
            total_queries: self.total_queries.load(Ordering::Relaxed),
            unconfigured: self.unconfigured.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
            truncated: self.truncated.load(Ordering::Relaxed),
            provider_failures: self.provider_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of [`QueryMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    pub total_queries: u64,
    pub unconfigured: u64,
    pub empty_results: u64,
    pub truncated: u64,
    pub provider_failures: u64,
}
