//! Thread-safe collection of back-office providers that aggregates their login flags.

// self
use crate::{_prelude::*, description::AuthenticationDescription};

type ProviderList = Arc<RwLock<Vec<AuthenticationDescription>>>;

/// Registered back-office providers in processing order.
///
/// Aggregation follows the login screen's rules: local login is denied when any provider asks
/// for it, while the automatic redirect goes to the provider processed last.
#[derive(Clone, Debug, Default)]
pub struct BackOfficeProviders(ProviderList);
impl BackOfficeProviders {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a provider, replacing any earlier one with the same authentication type.
	///
	/// A replaced provider counts as processed last.
	pub fn register(&self, description: AuthenticationDescription) -> Result<()> {
		if !description.is_back_office() {
			return Err(Error::NotBackOffice {
				authentication_type: description.authentication_type().to_owned(),
			});
		}

		let mut guard = self.0.write();

		guard.retain(|existing| {
			existing.authentication_type() != description.authentication_type()
		});
		guard.push(description);

		Ok(())
	}

	/// Looks up a provider by authentication type.
	pub fn get(&self, authentication_type: &str) -> Option<AuthenticationDescription> {
		self.0
			.read()
			.iter()
			.find(|description| description.authentication_type() == authentication_type)
			.cloned()
	}

	/// Every registered provider in processing order.
	pub fn providers(&self) -> Vec<AuthenticationDescription> {
		self.0.read().clone()
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when no provider is registered.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Whether any registered provider disables local login.
	pub fn deny_local_login(&self) -> bool {
		self.0.read().iter().any(AuthenticationDescription::denies_local_login)
	}

	/// The last-processed provider that requests an automatic login redirect.
	pub fn auto_login_redirect_provider(&self) -> Option<AuthenticationDescription> {
		self.0.read().iter().rev().find(|description| description.auto_login_redirect()).cloned()
	}
}
