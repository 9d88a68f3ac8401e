//! Challenge-time hooks that let a provider shape the properties of its sign-in challenge.

// self
use crate::_prelude::*;

/// Request data handed to a [`ChallengeResultCallback`] when a challenge is issued.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeContext {
	/// Request path that triggered the challenge.
	pub path: String,
	/// Query parameters of the triggering request.
	pub query: BTreeMap<String, String>,
	/// Authentication type of the provider being challenged.
	pub authentication_type: Option<String>,
}
impl ChallengeContext {
	/// Creates a context for the provided request path.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into(), ..Default::default() }
	}

	/// Adds a query parameter.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(key.into(), value.into());

		self
	}

	/// Records the provider the challenge targets.
	pub fn with_authentication_type(mut self, authentication_type: impl Into<String>) -> Self {
		self.authentication_type = Some(authentication_type.into());

		self
	}
}

/// Properties attached to an outgoing challenge (redirect target, persistence, extra items).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticationProperties {
	/// Where the user agent returns once the provider completes sign-in.
	pub redirect_uri: Option<String>,
	/// Whether the resulting session should persist across browser sessions.
	pub is_persistent: bool,
	/// Provider-specific items round-tripped through the challenge.
	pub items: BTreeMap<String, String>,
}
impl AuthenticationProperties {
	/// Creates properties with the provided redirect target.
	pub fn with_redirect_uri(redirect_uri: impl Into<String>) -> Self {
		Self { redirect_uri: Some(redirect_uri.into()), ..Default::default() }
	}

	/// Adds a provider-specific item.
	pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.insert(key.into(), value.into());

		self
	}
}

type ChallengeFn = dyn Fn(&ChallengeContext) -> Option<AuthenticationProperties> + Send + Sync;

/// Shareable callback invoked at challenge time to build [`AuthenticationProperties`].
#[derive(Clone)]
pub struct ChallengeResultCallback(Arc<ChallengeFn>);
impl ChallengeResultCallback {
	/// Wraps a closure as a challenge callback.
	pub fn new<F>(f: F) -> Self
	where
		F: 'static + Fn(&ChallengeContext) -> Option<AuthenticationProperties> + Send + Sync,
	{
		Self(Arc::new(f))
	}

	/// Invokes the callback for the provided request context.
	pub fn invoke(&self, context: &ChallengeContext) -> Option<AuthenticationProperties> {
		(self.0)(context)
	}
}
impl<F> From<F> for ChallengeResultCallback
where
	F: 'static + Fn(&ChallengeContext) -> Option<AuthenticationProperties> + Send + Sync,
{
	fn from(f: F) -> Self {
		Self::new(f)
	}
}
impl Debug for ChallengeResultCallback {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ChallengeResultCallback(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn callback_receives_request_context() {
		let callback = ChallengeResultCallback::new(|ctx: &ChallengeContext| {
			ctx.query.get("returnUrl").map(AuthenticationProperties::with_redirect_uri)
		});
		let context =
			ChallengeContext::new("/umbraco/login").with_query("returnUrl", "/umbraco#/content");

		assert_eq!(
			callback.invoke(&context).and_then(|props| props.redirect_uri),
			Some("/umbraco#/content".to_owned())
		);
		assert_eq!(callback.invoke(&ChallengeContext::new("/umbraco/login")), None);
	}

	#[test]
	fn callback_debug_hides_closure() {
		let callback = ChallengeResultCallback::new(|_: &ChallengeContext| None);

		assert_eq!(format!("{callback:?}"), "ChallengeResultCallback(..)");
	}
}
