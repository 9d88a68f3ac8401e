// self
use crate::obs::{ConfigureOutcome, ReservedPathOutcome};

/// Records a configuration outcome via the global metrics recorder (when enabled).
pub fn record_configure_outcome(outcome: ConfigureOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("backoffice_auth_configure_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Records a reserved-path registration via the global metrics recorder (when enabled).
pub fn record_reserved_path(outcome: ReservedPathOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("backoffice_auth_reserved_path_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
