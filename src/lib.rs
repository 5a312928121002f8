//! Local username/password credentials strategy: pluggable verifiers, single-outcome
//! decisions, and session-ready profile projection for any middleware pipeline.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod obs;
pub mod outcome;
pub mod plugin;
pub mod request;
pub mod session;
pub mod verify;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{ConfigError, Error, Result};
}

pub use serde_json;
pub use url;
#[cfg(test)] use color_eyre as _;
#[cfg(test)] use tracing_subscriber as _;
