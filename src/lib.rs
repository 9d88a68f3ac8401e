//! Back-office external login glue: annotate third-party OAuth provider options with CMS login
//! behavior, reserve their callback paths, and read the metadata back at sign-in time.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod backoffice;
pub mod challenge;
pub mod config;
pub mod description;
pub mod error;
pub mod link;
pub mod obs;
pub mod properties;
pub mod provider;
pub mod registry;
pub mod routing;

pub use backoffice::*;
pub use description::AuthenticationDescription;
pub use error::{ConfigError, Error, Result};
pub use routing::ReservedPaths;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, BTreeSet},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::{RwLock, RwLockReadGuard};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, tokio as _};
