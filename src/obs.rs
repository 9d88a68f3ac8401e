//! Optional observability helpers for provider registration.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `backoffice_auth.configure` with the `provider` and
//!   `callback` fields, plus debug events for every reserved-path registration. `callback` is
//!   `explicit`, `capability`, or `none` depending on where the reserved path came from.
//! - Enable `metrics` to increment the `backoffice_auth_configure_total` and
//!   `backoffice_auth_reserved_path_total` counters, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each back-office configuration call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigureOutcome {
	/// Provider was configured for the back office.
	Success,
	/// Validation failure propagated back to the caller.
	Failure,
}
impl ConfigureOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigureOutcome::Success => "success",
			ConfigureOutcome::Failure => "failure",
		}
	}
}
impl Display for ConfigureOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Where a configured provider's callback path came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackSource {
	/// Passed explicitly to the configuration call.
	Explicit,
	/// Reported by the options' callback-path capability.
	Capability,
	/// No path was found; nothing was reserved.
	None,
}
impl CallbackSource {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallbackSource::Explicit => "explicit",
			CallbackSource::Capability => "capability",
			CallbackSource::None => "none",
		}
	}
}
impl Display for CallbackSource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each reserved-path registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReservedPathOutcome {
	/// Path was newly added.
	Inserted,
	/// Path was already reserved.
	Duplicate,
}
impl ReservedPathOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ReservedPathOutcome::Inserted => "inserted",
			ReservedPathOutcome::Duplicate => "duplicate",
		}
	}
}
impl Display for ReservedPathOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_are_stable() {
		assert_eq!(ConfigureOutcome::Failure.to_string(), "failure");
		assert_eq!(ReservedPathOutcome::Duplicate.as_str(), "duplicate");
		assert_eq!(CallbackSource::Explicit.as_str(), "explicit");
		assert_eq!(CallbackSource::Capability.to_string(), "capability");
		assert_eq!(CallbackSource::None.as_str(), "none");
	}
}
