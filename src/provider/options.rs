//! Adapter contracts that let back-office code drive any provider's options.
//!
//! Implementations wrap a middleware-owned options value without this crate depending on the
//! concrete provider type.

// self
use crate::{_prelude::*, provider::CallbackPath};

/// Options owned by an external authentication middleware for a single identity provider.
///
/// Only the authentication type is mandatory; providers that know their own callback path expose
/// it through [`ExternalAuthOptions::callback_path_provider`].
pub trait ExternalAuthOptions: Send + Sync {
	/// Returns the provider's authentication type identifier.
	fn authentication_type(&self) -> &str;

	/// Replaces the provider's authentication type identifier.
	fn set_authentication_type(&mut self, authentication_type: String);

	/// Returns the callback-path capability when the provider implements it.
	///
	/// Defaults to `None`.
	fn callback_path_provider(&self) -> Option<&dyn CallbackPathProvider> {
		None
	}
}

/// Capability implemented by provider options that carry their own callback path.
pub trait CallbackPathProvider: Send + Sync {
	/// Returns the configured callback path, or `None` when the provider has none set.
	fn callback_path(&self) -> Option<CallbackPath>;
}

/// Ready-made options adapter for providers described purely by data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuthOptions {
	/// Authentication type identifier (e.g., `Google`).
	pub authentication_type: String,
	/// Optional callback path the provider listens on.
	pub callback_path: Option<CallbackPath>,
}
impl BasicAuthOptions {
	/// Creates options for the provided authentication type with no callback path.
	pub fn new(authentication_type: impl Into<String>) -> Self {
		Self { authentication_type: authentication_type.into(), callback_path: None }
	}

	/// Sets the callback path reported through [`CallbackPathProvider`].
	pub fn with_callback_path(mut self, path: CallbackPath) -> Self {
		self.callback_path = Some(path);

		self
	}
}
impl Display for BasicAuthOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.authentication_type)
	}
}
impl ExternalAuthOptions for BasicAuthOptions {
	fn authentication_type(&self) -> &str {
		&self.authentication_type
	}

	fn set_authentication_type(&mut self, authentication_type: String) {
		self.authentication_type = authentication_type;
	}

	fn callback_path_provider(&self) -> Option<&dyn CallbackPathProvider> {
		Some(self)
	}
}
impl CallbackPathProvider for BasicAuthOptions {
	fn callback_path(&self) -> Option<CallbackPath> {
		self.callback_path.clone()
	}
}
