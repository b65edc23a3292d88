//! Metrics tracking.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub struct Metrics {
    started: Instant,
    pub grant_tokens_issued: AtomicU64,
    pub scoped_tokens_issued: AtomicU64,
    pub validation_failures: AtomicU64,
    pub issuance_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            grant_tokens_issued: AtomicU64::new(0),
            scoped_tokens_issued: AtomicU64::new(0),
            validation_failures: AtomicU64::new(0),
            issuance_failures: AtomicU64::new(0),
        }
    }

    pub fn record_grant_token(&self) {
        self.grant_tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scoped_token(&self) {
        self.scoped_tokens_issued.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_issuance_failure(&self) {
        self.issuance_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime_seconds: self.started.elapsed().as_secs(),
            grant_tokens_issued: self.grant_tokens_issued.load(Ordering::Relaxed),
            scoped_tokens_issued: self.scoped_tokens_issued.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            issuance_failures: self.issuance_failures.load(Ordering::Relaxed),
        }
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub uptime_seconds: u64,
    pub grant_tokens_issued: u64,
    pub scoped_tokens_issued: u64,
    pub validation_failures: u64,
    pub issuance_failures: u64,
}
