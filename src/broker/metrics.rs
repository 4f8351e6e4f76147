// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-broker tally of how sessions were obtained.
///
/// Cache hits never touch the network; every issuance attempt ends as exactly one success or
/// failure, so `attempts() == successes() + failures()` once calls have returned.
#[derive(Debug, Default)]
pub struct IssuanceMetrics {
	attempts: AtomicU64,
	successes: AtomicU64,
	failures: AtomicU64,
	cache_hits: AtomicU64,
}
impl IssuanceMetrics {
	/// Token requests sent to the identity endpoint.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Token requests answered with a usable token.
	pub fn successes(&self) -> u64 {
		self.successes.load(Ordering::Relaxed)
	}

	/// Token requests that failed or were rejected.
	pub fn failures(&self) -> u64 {
		self.failures.load(Ordering::Relaxed)
	}

	/// Sessions restored from the cache file instead of issued.
	pub fn cache_hits(&self) -> u64 {
		self.cache_hits.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.successes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failures.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_cache_hit(&self) {
		self.cache_hits.fetch_add(1, Ordering::Relaxed);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn counters_are_independent() {
		let metrics = IssuanceMetrics::default();

		metrics.record_attempt();
		metrics.record_failure();
		metrics.record_attempt();
		metrics.record_success();
		metrics.record_cache_hit();

		assert_eq!(metrics.attempts(), 2);
		assert_eq!(metrics.successes() + metrics.failures(), metrics.attempts());
		assert_eq!(metrics.cache_hits(), 1);
	}
}
