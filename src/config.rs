//! Declarative provider configuration loaded from JSON documents.

// self
use crate::{
	_prelude::*,
	backoffice::BackOfficeOptions,
	error::ConfigError,
	link::AutoLinkOptions,
	provider::{BasicAuthOptions, CallbackPath},
	routing::ReservedPaths,
};

/// Back-office settings for one provider as written in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BackOfficeProviderConfig {
	/// Authentication type identifier; the back-office prefix is added when missing.
	pub authentication_type: String,
	/// CSS class of the login button.
	pub style: String,
	/// Icon class of the login button.
	pub icon: String,
	/// Callback path; blank means "use whatever the provider reports".
	#[serde(default)]
	pub callback_path: Option<String>,
	/// Disables local username/password login.
	#[serde(default)]
	pub deny_local_login: bool,
	/// Redirects the login screen straight to this provider.
	#[serde(default)]
	pub auto_login_redirect: bool,
	/// Auto-link behavior for unknown external identities.
	#[serde(default)]
	pub auto_link: Option<AutoLinkOptions>,
}
impl BackOfficeProviderConfig {
	/// Parses a single provider document, reporting the path of the first malformed field.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		parse(json)
	}

	/// Parses a JSON array of provider documents.
	pub fn list_from_json_str(json: &str) -> Result<Vec<Self>, ConfigError> {
		parse(json)
	}

	/// Builds configured options, reserving the callback path in `reserved`.
	pub fn into_options(
		self,
		reserved: &ReservedPaths,
	) -> Result<BackOfficeOptions<BasicAuthOptions>> {
		let callback_path = match self.callback_path.as_deref() {
			Some(raw) => CallbackPath::parse_optional(raw)?,
			None => None,
		};
		let mut builder = BackOfficeOptions::builder()
			.options(BasicAuthOptions::new(self.authentication_type))
			.button(self.style, self.icon);

		if let Some(path) = callback_path {
			builder = builder.callback_path(path);
		}
		if self.deny_local_login {
			builder = builder.deny_local_login();
		}
		if self.auto_login_redirect {
			builder = builder.auto_login_redirect();
		}
		if let Some(auto_link) = self.auto_link {
			builder = builder.auto_link_options(auto_link);
		}

		builder.build(reserved)
	}
}

fn parse<T>(json: &str) -> Result<T, ConfigError>
where
	T: for<'de> Deserialize<'de>,
{
	let deserializer = &mut serde_json::Deserializer::from_str(json);

	serde_path_to_error::deserialize(deserializer).map_err(|source| ConfigError::Parse { source })
}
