//! Well-known property keys shared with external readers of a provider's property bag.
//!
//! Back-office settings live in typed fields; these keys and helpers exist so the same data can
//! be exported to (and recovered from) string-keyed bags kept by OAuth middleware.

// self
use crate::_prelude::*;

/// String-keyed property bag owned by an authentication description.
pub type PropertyBag = BTreeMap<String, serde_json::Value>;

/// Key under which the challenge-result callback is stored.
pub const CHALLENGE_RESULT_CALLBACK: &str = "ChallengeResultCallback";
/// Key under which auto-link options are stored.
pub const EXTERNAL_SIGN_IN_AUTO_LINK_OPTIONS: &str = "ExternalSignInAutoLinkOptions";
/// Key of the flag disabling local username/password login.
pub const DENY_LOCAL_LOGIN: &str = "UmbracoBackOffice_DenyLocalLogin";
/// Key of the flag redirecting the login screen straight to the provider.
pub const AUTO_LOGIN_REDIRECT: &str = "UmbracoBackOffice_AutoLoginRedirect";
/// Key of the login button style.
pub const SOCIAL_STYLE: &str = "SocialStyle";
/// Key of the login button icon.
pub const SOCIAL_ICON: &str = "SocialIcon";
/// Key of the flag marking a provider as usable in the back office.
pub const BACK_OFFICE: &str = "UmbracoBackOffice";

/// Reads a string value; other JSON types count as absent.
pub fn get_str<'a>(bag: &'a PropertyBag, key: &str) -> Option<&'a str> {
	bag.get(key).and_then(serde_json::Value::as_str)
}

/// Reads a boolean flag; absent or non-boolean values count as `false`.
pub fn get_flag(bag: &PropertyBag, key: &str) -> bool {
	bag.get(key).and_then(serde_json::Value::as_bool).unwrap_or(false)
}

/// Deserializes a structured value; values that do not fit `T` count as absent.
pub fn get_as<T>(bag: &PropertyBag, key: &str) -> Option<T>
where
	T: for<'de> Deserialize<'de>,
{
	bag.get(key).and_then(|value| T::deserialize(value).ok())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn mistyped_values_read_as_absent() {
		let bag = PropertyBag::from_iter([
			(SOCIAL_STYLE.to_owned(), serde_json::json!(42)),
			(DENY_LOCAL_LOGIN.to_owned(), serde_json::json!("yes")),
			(EXTERNAL_SIGN_IN_AUTO_LINK_OPTIONS.to_owned(), serde_json::json!("editor")),
		]);

		assert_eq!(get_str(&bag, SOCIAL_STYLE), None);
		assert!(!get_flag(&bag, DENY_LOCAL_LOGIN));
		assert_eq!(
			get_as::<crate::link::AutoLinkOptions>(&bag, EXTERNAL_SIGN_IN_AUTO_LINK_OPTIONS),
			None
		);
	}

	#[test]
	fn missing_keys_read_as_absent() {
		let bag = PropertyBag::new();

		assert_eq!(get_str(&bag, SOCIAL_ICON), None);
		assert!(!get_flag(&bag, BACK_OFFICE));
	}
}
