//! Request-time view of a configured provider and its property-bag representation.

// self
use crate::{
	_prelude::*,
	backoffice::{BackOfficeSettings, SharedSettings},
	challenge::{AuthenticationProperties, ChallengeContext},
	link::AutoLinkOptions,
	properties::{self, PropertyBag},
	provider::CallbackPath,
};

/// One provider's authentication type paired with its back-office settings.
///
/// Descriptions taken from [`crate::BackOfficeOptions::description`] share the options' settings
/// cell, so setter calls made after the description was taken are visible here. Clones share the
/// same cell.
#[derive(Clone, Debug)]
pub struct AuthenticationDescription {
	authentication_type: String,
	settings: SharedSettings,
}
impl AuthenticationDescription {
	/// Creates a description that owns its settings.
	pub fn new(authentication_type: impl Into<String>, settings: BackOfficeSettings) -> Self {
		Self::shared(authentication_type, Arc::new(RwLock::new(settings)))
	}

	pub(crate) fn shared(authentication_type: impl Into<String>, settings: SharedSettings) -> Self {
		Self { authentication_type: authentication_type.into(), settings }
	}

	/// Authentication type identifier.
	pub fn authentication_type(&self) -> &str {
		&self.authentication_type
	}

	/// Current back-office settings.
	pub fn settings(&self) -> RwLockReadGuard<'_, BackOfficeSettings> {
		self.settings.read()
	}

	/// Builds challenge properties with the stored callback.
	///
	/// Returns `None` when no callback was set or when the callback itself returns `None`.
	/// The settings lock is released before the callback runs.
	pub fn challenge_result(&self, context: &ChallengeContext) -> Option<AuthenticationProperties> {
		let callback = self.settings.read().challenge_callback.clone();

		callback.and_then(|callback| callback.invoke(context))
	}

	/// Stored auto-link options, if any.
	pub fn auto_link_options(&self) -> Option<AutoLinkOptions> {
		self.settings.read().auto_link_options.clone()
	}

	/// Whether the provider is usable in the back office.
	pub fn is_back_office(&self) -> bool {
		self.settings.read().back_office
	}

	/// Whether the provider disables local login.
	pub fn denies_local_login(&self) -> bool {
		self.settings.read().deny_local_login
	}

	/// Whether the provider requests an automatic login redirect.
	pub fn auto_login_redirect(&self) -> bool {
		self.settings.read().auto_login_redirect
	}

	/// Writes the settings into a middleware-owned property bag under the well-known keys.
	///
	/// Only settings that carry a value are written. Keys already present with the same name
	/// are overwritten. The challenge callback cannot be represented and is skipped.
	pub fn write_properties(&self, bag: &mut PropertyBag) {
		let settings = self.settings.read();

		if let Some(style) = settings.style.as_ref() {
			bag.insert(properties::SOCIAL_STYLE.into(), style.as_str().into());
		}
		if let Some(icon) = settings.icon.as_ref() {
			bag.insert(properties::SOCIAL_ICON.into(), icon.as_str().into());
		}
		if settings.back_office {
			bag.insert(properties::BACK_OFFICE.into(), true.into());
		}
		if settings.deny_local_login {
			bag.insert(properties::DENY_LOCAL_LOGIN.into(), true.into());
		}
		if settings.auto_login_redirect {
			bag.insert(properties::AUTO_LOGIN_REDIRECT.into(), true.into());
		}
		if let Some(value) =
			settings.auto_link_options.as_ref().and_then(|link| serde_json::to_value(link).ok())
		{
			bag.insert(properties::EXTERNAL_SIGN_IN_AUTO_LINK_OPTIONS.into(), value);
		}
	}

	/// Recovers a description from a property bag.
	///
	/// Values of the wrong type are treated as absent rather than reported.
	pub fn from_properties(authentication_type: impl Into<String>, bag: &PropertyBag) -> Self {
		let settings = BackOfficeSettings {
			style: properties::get_str(bag, properties::SOCIAL_STYLE).map(str::to_owned),
			icon: properties::get_str(bag, properties::SOCIAL_ICON).map(str::to_owned),
			callback_path: None,
			back_office: properties::get_flag(bag, properties::BACK_OFFICE),
			deny_local_login: properties::get_flag(bag, properties::DENY_LOCAL_LOGIN),
			auto_login_redirect: properties::get_flag(bag, properties::AUTO_LOGIN_REDIRECT),
			auto_link_options: properties::get_as(
				bag,
				properties::EXTERNAL_SIGN_IN_AUTO_LINK_OPTIONS,
			),
			challenge_callback: None,
		};

		Self::new(authentication_type, settings)
	}

	/// Callback path reserved for the provider, if one was found.
	pub fn callback_path(&self) -> Option<CallbackPath> {
		self.settings.read().callback_path.clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::challenge::ChallengeResultCallback;

	fn configured_settings() -> BackOfficeSettings {
		BackOfficeSettings {
			style: Some("btn-microsoft".into()),
			icon: Some("fa-windows".into()),
			back_office: true,
			deny_local_login: true,
			auto_link_options: Some(AutoLinkOptions::new(["editor"], Some("en-GB".into()))),
			..Default::default()
		}
	}

	#[test]
	fn unset_values_read_as_absent() {
		let description =
			AuthenticationDescription::new("Umbraco.Google", BackOfficeSettings::default());

		assert_eq!(description.challenge_result(&ChallengeContext::new("/umbraco")), None);
		assert_eq!(description.auto_link_options(), None);
		assert!(!description.is_back_office());
	}

	#[test]
	fn challenge_result_forwards_callback_output() {
		let settings = BackOfficeSettings {
			challenge_callback: Some(ChallengeResultCallback::new(|ctx: &ChallengeContext| {
				Some(AuthenticationProperties::with_redirect_uri(ctx.path.clone()))
			})),
			..Default::default()
		};
		let description = AuthenticationDescription::new("Umbraco.AzureAD", settings);
		let props = description
			.challenge_result(&ChallengeContext::new("/umbraco/backoffice"))
			.expect("Stored callback should produce challenge properties.");

		assert_eq!(props.redirect_uri.as_deref(), Some("/umbraco/backoffice"));
	}

	#[test]
	fn exported_bag_uses_well_known_keys() {
		let description = AuthenticationDescription::new("Umbraco.AzureAD", configured_settings());
		let mut bag = PropertyBag::new();

		description.write_properties(&mut bag);

		assert_eq!(bag.get("SocialStyle"), Some(&serde_json::json!("btn-microsoft")));
		assert_eq!(bag.get("SocialIcon"), Some(&serde_json::json!("fa-windows")));
		assert_eq!(bag.get("UmbracoBackOffice"), Some(&serde_json::json!(true)));
		assert_eq!(bag.get("UmbracoBackOffice_DenyLocalLogin"), Some(&serde_json::json!(true)));
		assert!(!bag.contains_key("UmbracoBackOffice_AutoLoginRedirect"));
		assert!(bag.contains_key("ExternalSignInAutoLinkOptions"));
		assert!(!bag.contains_key("ChallengeResultCallback"));
	}

	#[test]
	fn export_overwrites_foreign_values_with_same_key() {
		let description = AuthenticationDescription::new("Umbraco.AzureAD", configured_settings());
		let mut bag = PropertyBag::from_iter([
			("SocialStyle".to_owned(), serde_json::json!("provider-own-style")),
			("Caption".to_owned(), serde_json::json!("Azure AD")),
		]);

		description.write_properties(&mut bag);

		assert_eq!(bag.get("SocialStyle"), Some(&serde_json::json!("btn-microsoft")));
		assert_eq!(bag.get("Caption"), Some(&serde_json::json!("Azure AD")));
	}

	#[test]
	fn bag_round_trip_recovers_settings() {
		let description = AuthenticationDescription::new("Umbraco.AzureAD", configured_settings());
		let mut bag = PropertyBag::new();

		description.write_properties(&mut bag);

		let recovered = AuthenticationDescription::from_properties("Umbraco.AzureAD", &bag);

		assert_eq!(recovered.settings().style.as_deref(), Some("btn-microsoft"));
		assert!(recovered.is_back_office());
		assert!(recovered.denies_local_login());
		assert!(!recovered.auto_login_redirect());
		assert_eq!(recovered.auto_link_options(), description.auto_link_options());
	}

	#[test]
	fn clones_share_the_settings_cell() {
		let description = AuthenticationDescription::new("Umbraco.AzureAD", configured_settings());
		let clone = description.clone();

		description.settings.write().auto_login_redirect = true;

		assert!(clone.auto_login_redirect());
	}

	#[test]
	fn mistyped_bag_values_are_ignored() {
		let bag = PropertyBag::from_iter([
			("UmbracoBackOffice".to_owned(), serde_json::json!("true")),
			("ExternalSignInAutoLinkOptions".to_owned(), serde_json::json!(7)),
		]);
		let recovered = AuthenticationDescription::from_properties("Umbraco.Google", &bag);

		assert!(!recovered.is_back_office());
		assert_eq!(recovered.auto_link_options(), None);
	}
}
