//! Back-office annotations layered over a provider's foreign options.
//!
//! [`BackOfficeOptions`] composes the middleware-owned options with typed
//! [`BackOfficeSettings`], so providers gain a login button style, icon, callback reservation,
//! and sign-in flags without this crate knowing their concrete type.

/// Builder API for back-office provider options.
pub mod builder;
/// Typed settings attached to a provider.
pub mod settings;

pub use builder::*;
pub use settings::*;

// self
use crate::{
	_prelude::*,
	challenge::ChallengeResultCallback,
	description::AuthenticationDescription,
	link::AutoLinkOptions,
	obs::{self, CallbackSource, ConfigureOutcome, ConfigureSpan},
	provider::{CallbackPath, ExternalAuthOptions},
	routing::ReservedPaths,
};

/// Prefix carried by every authentication type usable in the back office.
pub const BACK_OFFICE_AUTHENTICATION_TYPE_PREFIX: &str = "Umbraco.";

/// Returns the prefixed authentication type, or `None` when the prefix is already present.
pub fn prefixed_authentication_type(authentication_type: &str) -> Option<String> {
	if authentication_type.starts_with(BACK_OFFICE_AUTHENTICATION_TYPE_PREFIX) {
		None
	} else {
		Some(format!("{BACK_OFFICE_AUTHENTICATION_TYPE_PREFIX}{authentication_type}"))
	}
}

/// Provider options paired with their back-office settings.
///
/// Settings live in a shared cell: every [`AuthenticationDescription`] taken from these options
/// reads the same cell, so later setter calls are visible at request time.
#[derive(Debug)]
pub struct BackOfficeOptions<O> {
	options: O,
	settings: SharedSettings,
}
impl<O> BackOfficeOptions<O>
where
	O: ExternalAuthOptions,
{
	/// Wraps provider options with empty back-office settings.
	pub fn new(options: O) -> Self {
		Self { options, settings: SharedSettings::default() }
	}

	/// Creates a new builder.
	pub fn builder() -> BackOfficeOptionsBuilder<O> {
		BackOfficeOptionsBuilder::new()
	}

	/// Wrapped provider options.
	pub fn options(&self) -> &O {
		&self.options
	}

	/// Mutable access to the wrapped provider options.
	pub fn options_mut(&mut self) -> &mut O {
		&mut self.options
	}

	/// Back-office settings attached so far.
	pub fn settings(&self) -> RwLockReadGuard<'_, BackOfficeSettings> {
		self.settings.read()
	}

	/// Current authentication type of the wrapped options.
	pub fn authentication_type(&self) -> &str {
		self.options.authentication_type()
	}

	/// Splits the wrapper into provider options and a copy of the current settings.
	pub fn into_parts(self) -> (O, BackOfficeSettings) {
		let settings = self.settings.read().clone();

		(self.options, settings)
	}

	/// Stores the callback used to build challenge properties, replacing any previous one.
	pub fn set_challenge_result_callback(
		&mut self,
		callback: impl Into<ChallengeResultCallback>,
	) -> &mut Self {
		self.settings.write().challenge_callback = Some(callback.into());

		self
	}

	/// Stores auto-link options, replacing any previous value.
	pub fn set_auto_link_options(&mut self, link_options: AutoLinkOptions) -> &mut Self {
		self.settings.write().auto_link_options = Some(link_options);

		self
	}

	/// Disables local username/password login while this provider is registered.
	pub fn deny_local_login(&mut self) -> &mut Self {
		self.settings.write().deny_local_login = true;

		self
	}

	/// Sends the login screen straight to this provider.
	///
	/// When several providers set the flag, the one processed last wins.
	pub fn auto_login_redirect(&mut self) -> &mut Self {
		self.settings.write().auto_login_redirect = true;

		self
	}

	/// Marks the provider as usable in the back office.
	///
	/// Prefixes the authentication type with [`BACK_OFFICE_AUTHENTICATION_TYPE_PREFIX`] (once),
	/// records the button style and icon, and reserves the callback path. An explicit
	/// `callback_path` wins; otherwise the options' [`crate::provider::CallbackPathProvider`]
	/// capability is consulted. Providers without either reserve nothing.
	///
	/// Fails without touching anything when the authentication type is empty.
	pub fn configure_for_back_office(
		&mut self,
		style: impl Into<String>,
		icon: impl Into<String>,
		callback_path: Option<CallbackPath>,
		reserved: &ReservedPaths,
	) -> Result<()> {
		let guard = ConfigureSpan::new(self.options.authentication_type()).entered();
		let result = self.apply_back_office(style.into(), icon.into(), callback_path, reserved);
		let outcome = match result {
			Ok(source) => {
				guard.record_callback(source);

				ConfigureOutcome::Success
			},
			Err(_) => ConfigureOutcome::Failure,
		};

		obs::trace_configure(self.options.authentication_type(), outcome);
		obs::record_configure_outcome(outcome);

		result.map(|_| ())
	}

	/// Request-time view of this provider, sharing its settings.
	///
	/// The authentication type is captured when the view is taken, so take it after
	/// [`Self::configure_for_back_office`] has applied the prefix.
	pub fn description(&self) -> AuthenticationDescription {
		AuthenticationDescription::shared(
			self.options.authentication_type(),
			Arc::clone(&self.settings),
		)
	}

	fn apply_back_office(
		&mut self,
		style: String,
		icon: String,
		callback_path: Option<CallbackPath>,
		reserved: &ReservedPaths,
	) -> Result<CallbackSource> {
		if self.options.authentication_type().is_empty() {
			return Err(Error::EmptyAuthenticationType);
		}
		if let Some(prefixed) = prefixed_authentication_type(self.options.authentication_type()) {
			self.options.set_authentication_type(prefixed);
		}

		let (source, callback_path) = match callback_path {
			Some(path) => (CallbackSource::Explicit, Some(path)),
			None => match self
				.options
				.callback_path_provider()
				.and_then(|provider| provider.callback_path())
			{
				Some(path) => (CallbackSource::Capability, Some(path)),
				None => (CallbackSource::None, None),
			},
		};
		let mut settings = self.settings.write();

		settings.style = Some(style);
		settings.icon = Some(icon);
		settings.back_office = true;

		if let Some(path) = callback_path {
			reserved.register(&path);

			settings.callback_path = Some(path);
		}

		Ok(source)
	}
}
