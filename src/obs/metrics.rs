// self
use crate::obs::{Operation, Outcome};

/// Counter incremented once per recorded outcome.
pub const OPERATION_COUNTER: &str = "pax8_client_operation_total";

/// Bumps [`OPERATION_COUNTER`] for `operation` with the `outcome` label.
///
/// Without the `metrics` feature nothing is recorded.
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		OPERATION_COUNTER,
		"operation" => operation.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (operation, outcome);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_a_recorder_is_harmless() {
		for outcome in [Outcome::Attempt, Outcome::Success, Outcome::Failure] {
			record_outcome(Operation::CacheSave, outcome);
		}

		assert_eq!(OPERATION_COUNTER, "pax8_client_operation_total");
	}
}
