//! Validated request paths used as provider callback endpoints.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const CALLBACK_PATH_MAX_LEN: usize = 2048;

/// Error returned when callback path validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum CallbackPathError {
	/// The path was empty or whitespace.
	#[error("Callback path cannot be empty.")]
	Empty,
	/// The path is the site root, which would reserve every request.
	#[error("Callback path cannot be the site root.")]
	Root,
	/// The path does not start with `/`.
	#[error("Callback path must start with `/`.")]
	MissingLeadingSlash,
	/// The path contains whitespace characters.
	#[error("Callback path contains whitespace.")]
	ContainsWhitespace,
	/// The path carries a query string or fragment.
	#[error("Callback path must not contain a query string or fragment.")]
	ContainsQuery,
	/// The path exceeded the allowed byte count.
	#[error("Callback path exceeds {max} bytes.")]
	TooLong {
		/// Maximum permitted byte count.
		max: usize,
	},
}

/// Request path (e.g., `/signin-google`) on which a provider receives its sign-in response.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallbackPath(String);
impl CallbackPath {
	/// Creates a new callback path after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, CallbackPathError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Parses an optional path where blank input means "not configured".
	pub fn parse_optional(value: &str) -> Result<Option<Self>, CallbackPathError> {
		if value.trim().is_empty() { Ok(None) } else { Self::new(value).map(Some) }
	}

	/// Extracts the path component of an absolute redirect URI.
	pub fn from_redirect_uri(uri: &Url) -> Result<Self, CallbackPathError> {
		Self::new(uri.path())
	}

	/// Returns the path as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for CallbackPath {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for CallbackPath {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for CallbackPath {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<CallbackPath> for String {
	fn from(value: CallbackPath) -> Self {
		value.0
	}
}
impl TryFrom<String> for CallbackPath {
	type Error = CallbackPathError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for CallbackPath {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "CallbackPath({})", self.0)
	}
}
impl Display for CallbackPath {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for CallbackPath {
	type Err = CallbackPathError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), CallbackPathError> {
	if view.trim().is_empty() {
		return Err(CallbackPathError::Empty);
	}
	if !view.starts_with('/') {
		return Err(CallbackPathError::MissingLeadingSlash);
	}
	if view.trim_start_matches('/').is_empty() {
		return Err(CallbackPathError::Root);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(CallbackPathError::ContainsWhitespace);
	}
	if view.contains(['?', '#']) {
		return Err(CallbackPathError::ContainsQuery);
	}
	if view.len() > CALLBACK_PATH_MAX_LEN {
		return Err(CallbackPathError::TooLong { max: CALLBACK_PATH_MAX_LEN });
	}

	Ok(())
}
