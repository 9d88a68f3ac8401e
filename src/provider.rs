//! Provider-facing adapters (foreign options) and validated request paths.
//!
//! `options` defines [`ExternalAuthOptions`], the seam behind which each identity provider's
//! concrete options type hides, plus the optional [`CallbackPathProvider`] capability.
//! `path` exposes [`CallbackPath`], the validated request path a provider receives its
//! sign-in response on.

pub mod options;
pub mod path;

pub use options::*;
pub use path::*;
