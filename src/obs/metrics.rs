// self
use crate::obs::{AuthKind, OutcomeLabel};

/// Records an attempt or outcome via the global metrics recorder (when enabled).
pub fn record_outcome(kind: AuthKind, outcome: OutcomeLabel) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"credentials_local_auth_total",
			"kind" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
