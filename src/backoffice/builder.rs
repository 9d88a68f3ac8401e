// self
use crate::{
	_prelude::*,
	backoffice::BackOfficeOptions,
	challenge::ChallengeResultCallback,
	link::AutoLinkOptions,
	provider::{CallbackPath, ExternalAuthOptions},
	routing::ReservedPaths,
};

/// Builder for fully configured [`BackOfficeOptions`] values.
#[derive(Debug)]
pub struct BackOfficeOptionsBuilder<O> {
	/// Provider options being wrapped.
	pub options: Option<O>,
	/// Login button style.
	pub style: Option<String>,
	/// Login button icon.
	pub icon: Option<String>,
	/// Explicit callback path; the provider's own capability is consulted when unset.
	pub callback_path: Option<CallbackPath>,
	/// Whether to disable local login.
	pub deny_local_login: bool,
	/// Whether to redirect the login screen straight to the provider.
	pub auto_login_redirect: bool,
	/// Optional auto-link options.
	pub auto_link_options: Option<AutoLinkOptions>,
	/// Optional challenge-result callback.
	pub challenge_callback: Option<ChallengeResultCallback>,
}
impl<O> BackOfficeOptionsBuilder<O>
where
	O: ExternalAuthOptions,
{
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self {
			options: None,
			style: None,
			icon: None,
			callback_path: None,
			deny_local_login: false,
			auto_login_redirect: false,
			auto_link_options: None,
			challenge_callback: None,
		}
	}

	/// Sets the provider options to wrap.
	pub fn options(mut self, options: O) -> Self {
		self.options = Some(options);

		self
	}

	/// Sets the login button style and icon.
	pub fn button(mut self, style: impl Into<String>, icon: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self.icon = Some(icon.into());

		self
	}

	/// Sets an explicit callback path.
	pub fn callback_path(mut self, path: CallbackPath) -> Self {
		self.callback_path = Some(path);

		self
	}

	/// Disables local login.
	pub fn deny_local_login(mut self) -> Self {
		self.deny_local_login = true;

		self
	}

	/// Redirects the login screen straight to the provider.
	pub fn auto_login_redirect(mut self) -> Self {
		self.auto_login_redirect = true;

		self
	}

	/// Sets auto-link options.
	pub fn auto_link_options(mut self, link_options: AutoLinkOptions) -> Self {
		self.auto_link_options = Some(link_options);

		self
	}

	/// Sets the challenge-result callback.
	pub fn challenge_callback(mut self, callback: impl Into<ChallengeResultCallback>) -> Self {
		self.challenge_callback = Some(callback.into());

		self
	}

	/// Consumes the builder, configures the provider for the back office, and reserves its
	/// callback path in `reserved`.
	pub fn build(self, reserved: &ReservedPaths) -> Result<BackOfficeOptions<O>> {
		let options = self.options.ok_or(Error::MissingArgument { name: "options" })?;
		let style = self.style.ok_or(Error::MissingArgument { name: "style" })?;
		let icon = self.icon.ok_or(Error::MissingArgument { name: "icon" })?;
		let mut configured = BackOfficeOptions::new(options);

		configured.configure_for_back_office(style, icon, self.callback_path, reserved)?;

		if self.deny_local_login {
			configured.deny_local_login();
		}
		if self.auto_login_redirect {
			configured.auto_login_redirect();
		}
		if let Some(link_options) = self.auto_link_options {
			configured.set_auto_link_options(link_options);
		}
		if let Some(callback) = self.challenge_callback {
			configured.set_challenge_result_callback(callback);
		}

		Ok(configured)
	}
}
impl<O> Default for BackOfficeOptionsBuilder<O>
where
	O: ExternalAuthOptions,
{
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{challenge::ChallengeContext, provider::BasicAuthOptions};

	#[test]
	fn missing_options_is_an_argument_error() {
		let reserved = ReservedPaths::new();
		let err = BackOfficeOptions::<BasicAuthOptions>::builder()
			.button("btn-google-plus", "fa-google-plus")
			.build(&reserved)
			.expect_err("Builder should reject a missing options value.");

		assert!(matches!(err, Error::MissingArgument { name: "options" }));
	}

	#[test]
	fn missing_button_is_an_argument_error() {
		let reserved = ReservedPaths::new();
		let err = BackOfficeOptions::builder()
			.options(BasicAuthOptions::new("Google"))
			.build(&reserved)
			.expect_err("Builder should reject a missing button style.");

		assert!(matches!(err, Error::MissingArgument { name: "style" }));
	}

	#[test]
	fn builder_applies_every_setting() {
		let reserved = ReservedPaths::new();
		let callback_path =
			CallbackPath::new("/signin-google").expect("Callback path fixture should be valid.");
		let configured = BackOfficeOptions::builder()
			.options(BasicAuthOptions::new("Google"))
			.button("btn-google-plus", "fa-google-plus")
			.callback_path(callback_path)
			.deny_local_login()
			.auto_login_redirect()
			.auto_link_options(AutoLinkOptions::new(["editor"], None))
			.challenge_callback(ChallengeResultCallback::new(|_: &ChallengeContext| None))
			.build(&reserved)
			.expect("Builder should produce configured options.");
		let settings = configured.settings();

		assert_eq!(configured.authentication_type(), "Umbraco.Google");
		assert!(settings.back_office && settings.deny_local_login && settings.auto_login_redirect);
		assert!(settings.auto_link_options.is_some());
		assert!(settings.challenge_callback.is_some());
		assert!(reserved.contains("/signin-google"));
	}
}
