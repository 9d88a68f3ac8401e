//! Thread-safe registry of request paths that bypass first-run and installer redirects.

// self
use crate::{
	_prelude::*,
	obs::{self, ReservedPathOutcome},
};

type PathSet = Arc<RwLock<BTreeSet<String>>>;

/// Shared, append-only set of reserved request paths.
///
/// Clones share the same underlying set, so the routing component can hand a handle to every
/// provider-registration call site while keeping the set for its own lookups.
#[derive(Clone, Debug, Default)]
pub struct ReservedPaths(PathSet);
impl ReservedPaths {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a path; returns `true` when it was not reserved before.
	pub fn register(&self, path: impl AsRef<str>) -> bool {
		let path = path.as_ref();
		let inserted = self.0.write().insert(path.to_owned());
		let outcome =
			if inserted { ReservedPathOutcome::Inserted } else { ReservedPathOutcome::Duplicate };

		obs::trace_reserved_path(path, outcome);
		obs::record_reserved_path(outcome);

		inserted
	}

	/// Returns `true` when the exact path has been registered.
	pub fn contains(&self, path: &str) -> bool {
		self.0.read().contains(path)
	}

	/// Number of reserved paths.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when nothing has been reserved yet.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Sorted copy of every reserved path.
	pub fn snapshot(&self) -> Vec<String> {
		self.0.read().iter().cloned().collect()
	}

	/// Checks whether a request path falls under any reserved path.
	///
	/// Matching is case-insensitive and works on whole segments: `/signin-google` covers
	/// `/signin-google/complete` but not `/signin-googlex`. Query strings are ignored. A raw `/`
	/// entry covers the site root only.
	pub fn is_reserved(&self, request_path: &str) -> bool {
		let request = normalize(strip_query(request_path));

		self.0.read().iter().any(|reserved| {
			let reserved = normalize(reserved);

			if reserved == "/" { request == reserved } else { request.starts_with(&reserved) }
		})
	}
}

fn strip_query(path: &str) -> &str {
	path.split(['?', '#']).next().unwrap_or(path)
}

fn normalize(path: &str) -> String {
	let mut normalized = path.to_lowercase();

	if !normalized.ends_with('/') {
		normalized.push('/');
	}

	normalized
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn duplicate_registration_is_noop() {
		let paths = ReservedPaths::new();

		assert!(paths.register("/my/callback"));
		assert!(!paths.register("/my/callback"));
		assert_eq!(paths.len(), 1);
		assert!(paths.contains("/my/callback"));
	}

	#[test]
	fn clones_share_the_same_set() {
		let paths = ReservedPaths::new();
		let handle = paths.clone();

		handle.register("/signin-oidc");

		assert!(paths.contains("/signin-oidc"));
		assert_eq!(paths.snapshot(), vec!["/signin-oidc".to_owned()]);
	}

	#[test]
	fn reserved_lookup_matches_whole_segments() {
		let paths = ReservedPaths::new();

		paths.register("/signin-google");

		assert!(paths.is_reserved("/signin-google"));
		assert!(paths.is_reserved("/SignIn-Google/complete?state=abc"));
		assert!(paths.is_reserved("/signin-google?code=123"));
		assert!(!paths.is_reserved("/signin-googlex"));
		assert!(!paths.is_reserved("/umbraco"));
	}

	#[test]
	fn raw_root_entry_covers_only_the_root() {
		let paths = ReservedPaths::new();

		paths.register("/");

		assert!(paths.is_reserved("/"));
		assert!(paths.is_reserved("/?returnUrl=%2Fumbraco"));
		assert!(!paths.is_reserved("/umbraco"));
		assert!(!paths.is_reserved("/install/step"));
	}

	#[test]
	fn empty_registry_reserves_nothing() {
		let paths = ReservedPaths::new();

		assert!(paths.is_empty());
		assert!(!paths.is_reserved("/"));
	}
}
