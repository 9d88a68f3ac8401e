//! Crate-level error types shared by the annotator, registry, and configuration loader.

// self
use crate::{_prelude::*, provider::CallbackPathError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required argument was never supplied.
	#[error("Required argument `{name}` was not supplied.")]
	MissingArgument {
		/// Name of the missing argument.
		name: &'static str,
	},
	/// Provider options carry no authentication type, so they cannot be registered.
	#[error("Provider options must declare a non-empty authentication type.")]
	EmptyAuthenticationType,
	/// Registry only accepts providers configured for the back office.
	#[error("Provider `{authentication_type}` is not configured for the back office.")]
	NotBackOffice {
		/// Authentication type of the rejected provider.
		authentication_type: String,
	},
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration and validation failures raised while loading provider settings.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Provider configuration document could not be parsed.
	#[error("Provider configuration is malformed at `{}`.", .source.path())]
	Parse {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Configured callback path is not a valid request path.
	#[error("Configured callback path is invalid.")]
	InvalidCallbackPath(#[from] CallbackPathError),
}
impl From<CallbackPathError> for Error {
	fn from(e: CallbackPathError) -> Self {
		Self::Config(e.into())
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	#[test]
	fn callback_path_error_converts_with_source() {
		let error: Error = CallbackPathError::MissingLeadingSlash.into();

		assert!(matches!(error, Error::Config(ConfigError::InvalidCallbackPath(_))));

		let source = StdError::source(&error)
			.expect("Config error should expose the callback path failure as its source.");

		assert_eq!(source.to_string(), CallbackPathError::MissingLeadingSlash.to_string());
	}

	#[test]
	fn parse_error_reports_field_path() {
		let deserializer = &mut serde_json::Deserializer::from_str(r#"{"value": 1}"#);
		let source = serde_path_to_error::deserialize::<_, BTreeMap<String, String>>(deserializer)
			.expect_err("Numeric value should not deserialize into a string map.");
		let error = ConfigError::Parse { source };

		assert_eq!(error.to_string(), "Provider configuration is malformed at `value`.");
	}
}
