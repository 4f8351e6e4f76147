// self
use crate::{_prelude::*, obs::Operation};

/// Span covering one blocking client operation, named `pax8_client.operation`.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens a span for `operation`; `stage` names the call site (`issue`, `load`, `get`, ...).
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self {
				span: tracing::info_span!(
					"pax8_client.operation",
					operation = operation.as_str(),
					stage
				),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Enters the span until the returned guard drops.
	pub fn entered(self) -> OperationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OperationSpanGuard { _entered: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OperationSpanGuard {}
		}
	}
}

/// Keeps an [`OperationSpan`] entered; the client holds it for the duration of a request.
pub struct OperationSpanGuard {
	#[cfg(feature = "tracing")]
	_entered: tracing::span::EnteredSpan,
}
impl Debug for OperationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OperationSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn spans_nest_without_a_subscriber() {
		let outer = OperationSpan::new(Operation::ResourceGet, "get").entered();
		let inner = OperationSpan::new(Operation::TokenIssue, "issue").entered();

		drop(inner);
		drop(outer);
	}
}
