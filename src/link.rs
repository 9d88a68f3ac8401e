//! Options controlling whether external sign-ins auto-create linked back-office accounts.

// self
use crate::_prelude::*;

const DEFAULT_USER_GROUP: &str = "editor";

/// Auto-link settings stored verbatim alongside a provider's back-office settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoLinkOptions {
	/// Whether an unknown external identity auto-creates and links a local account.
	pub auto_link_external_account: bool,
	/// User groups assigned to auto-linked accounts.
	pub default_user_groups: Vec<String>,
	/// Culture assigned to auto-linked accounts; the site default applies when unset.
	pub default_culture: Option<String>,
}
impl AutoLinkOptions {
	/// Creates options that auto-link new accounts into the provided groups.
	pub fn new<I, S>(user_groups: I, default_culture: Option<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			auto_link_external_account: true,
			default_user_groups: user_groups.into_iter().map(Into::into).collect(),
			default_culture,
		}
	}

	/// Groups assigned to an auto-linked account.
	pub fn user_groups(&self) -> &[String] {
		&self.default_user_groups
	}

	/// Culture for an auto-linked account, falling back to the provided site default.
	pub fn culture_or<'a>(&'a self, fallback: &'a str) -> &'a str {
		self.default_culture.as_deref().unwrap_or(fallback)
	}
}
impl Default for AutoLinkOptions {
	fn default() -> Self {
		Self {
			auto_link_external_account: false,
			default_user_groups: vec![DEFAULT_USER_GROUP.to_owned()],
			default_culture: None,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_disable_linking_into_editor_group() {
		let options = AutoLinkOptions::default();

		assert!(!options.auto_link_external_account);
		assert_eq!(options.user_groups(), ["editor".to_owned()]);
		assert_eq!(options.culture_or("en-US"), "en-US");
	}

	#[test]
	fn explicit_options_enable_linking() {
		let options = AutoLinkOptions::new(["writer", "translator"], Some("da-DK".into()));

		assert!(options.auto_link_external_account);
		assert_eq!(options.user_groups().len(), 2);
		assert_eq!(options.culture_or("en-US"), "da-DK");
	}

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let options: AutoLinkOptions = serde_json::from_str(r#"{"autoLinkExternalAccount":true}"#)
			.expect("Partial auto-link options should deserialize.");

		assert!(options.auto_link_external_account);
		assert_eq!(options.user_groups(), ["editor".to_owned()]);
	}
}
