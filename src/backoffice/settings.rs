// self
use crate::{
	_prelude::*,
	challenge::ChallengeResultCallback,
	link::AutoLinkOptions,
	provider::CallbackPath,
};

/// Typed back-office settings attached to one provider.
///
/// Every field starts unset; the setters on [`crate::BackOfficeOptions`] fill them in and later
/// writes replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct BackOfficeSettings {
	/// CSS class of the provider's login button.
	pub style: Option<String>,
	/// Icon class of the provider's login button.
	pub icon: Option<String>,
	/// Callback path reserved for the provider.
	pub callback_path: Option<CallbackPath>,
	/// Whether the provider is usable in the back office.
	pub back_office: bool,
	/// Whether local username/password login is disabled while this provider is registered.
	pub deny_local_login: bool,
	/// Whether the login screen redirects straight to this provider.
	pub auto_login_redirect: bool,
	/// Auto-link behavior for unknown external identities.
	pub auto_link_options: Option<AutoLinkOptions>,
	/// Callback shaping the properties of outgoing challenges.
	pub challenge_callback: Option<ChallengeResultCallback>,
}

/// Settings cell shared between [`crate::BackOfficeOptions`] and its descriptions.
pub type SharedSettings = Arc<RwLock<BackOfficeSettings>>;
