//! Request and submission counters

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Route label used for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

#[derive(Clone)]
pub struct MetricsCollector {
    pub total_requests: Arc<AtomicU64>,
    pub client_errors: Arc<AtomicU64>,
    pub server_errors: Arc<AtomicU64>,
    pub submissions_accepted: Arc<AtomicU64>,
    pub submissions_rejected: Arc<AtomicU64>,
    pub requests_by_route: Arc<RwLock<HashMap<String, u64>>>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub client_errors: u64,
    pub server_errors: u64,
    pub submissions_accepted: u64,
    pub submissions_rejected: u64,
    pub requests_by_route: Vec<RouteMetric>,
    pub uptime_seconds: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteMetric {
    pub route: String,
    pub count: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            total_requests: Arc::new(AtomicU64::new(0)),
            client_errors: Arc::new(AtomicU64::new(0)),
            server_errors: Arc::new(AtomicU64::new(0)),
            submissions_accepted: Arc::new(AtomicU64::new(0)),
            submissions_rejected: Arc::new(AtomicU64::new(0)),
            requests_by_route: Arc::new(RwLock::new(HashMap::new())),
            start_time: Utc::now(),
        }
    }

    /// Records one finished request. `route` is the matched route pattern, so
    /// unknown paths all land in [`UNMATCHED_ROUTE`] instead of growing the map.
    pub fn record(&self, route: &str, status: u16, is_submission: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);

        match status {
            400..=499 => self.client_errors.fetch_add(1, Ordering::Relaxed),
            500..=599 => self.server_errors.fetch_add(1, Ordering::Relaxed),
            _ => 0,
        };

        if is_submission {
            match status {
                200..=299 => self.submissions_accepted.fetch_add(1, Ordering::Relaxed),
                400..=499 => self.submissions_rejected.fetch_add(1, Ordering::Relaxed),
                _ => 0,
            };
        }

        let mut routes = self.requests_by_route.write();
        *routes.entry(route.to_string()).or_insert(0) += 1;
    }

    pub fn uptime_seconds(&self) -> i64 {
        Utc::now().signed_duration_since(self.start_time).num_seconds()
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let mut requests_by_route: Vec<RouteMetric> = self
            .requests_by_route
            .read()
            .iter()
            .map(|(route, count)| RouteMetric {
                route: route.clone(),
                count: *count,
            })
            .collect();

        requests_by_route.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.route.cmp(&b.route)));

        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            client_errors: self.client_errors.load(Ordering::Relaxed),
            server_errors: self.server_errors.load(Ordering::Relaxed),
            submissions_accepted: self.submissions_accepted.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            requests_by_route,
            uptime_seconds: self.uptime_seconds(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
