//! Plugin configuration and typed per-call options.
//!
//! [`LocalConfig`] is fixed at construction and names the form fields holding the
//! credentials. [`AuthOptions`] is supplied by the host on every call; it replaces the
//! untyped option map hosts traditionally pass, while still decoding from one through
//! [`AuthOptions::from_value`].

// self
use crate::{_prelude::*, error::ConfigError};

/// Default form field carrying the identifier.
pub const DEFAULT_USERNAME_FIELD: &str = "username";
/// Default form field carrying the secret.
pub const DEFAULT_PASSWORD_FIELD: &str = "password";

/// Form field names consulted by password verifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
	/// Field carrying the identifier.
	#[serde(rename = "usernamePostField", default = "default_username_field")]
	pub username_field: String,
	/// Field carrying the secret.
	#[serde(rename = "passwordPostField", default = "default_password_field")]
	pub password_field: String,
}
impl LocalConfig {
	/// Decodes a config from a JSON value, reporting the failing path on errors.
	pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
		let config: Self = serde_path_to_error::deserialize(value)
			.map_err(|source| ConfigError::InvalidOptions { source })?;

		config.validate()?;

		Ok(config)
	}

	/// Overrides the identifier field.
	pub fn with_username_field(mut self, name: impl Into<String>) -> Self {
		self.username_field = name.into();

		self
	}

	/// Overrides the secret field.
	pub fn with_password_field(mut self, name: impl Into<String>) -> Self {
		self.password_field = name.into();

		self
	}

	/// Ensures both field names are usable and distinct.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.username_field.is_empty() {
			return Err(ConfigError::EmptyField { field: "username" });
		}
		if self.password_field.is_empty() {
			return Err(ConfigError::EmptyField { field: "password" });
		}
		if self.username_field == self.password_field {
			return Err(ConfigError::DuplicateField { name: self.username_field.clone() });
		}

		Ok(())
	}
}
impl Default for LocalConfig {
	fn default() -> Self {
		Self { username_field: default_username_field(), password_field: default_password_field() }
	}
}

/// Per-call options handed over by the host pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOptions {
	/// Login page path used when authentication cannot complete; its presence turns a
	/// terminal failure into a deferred redirect.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub failure_redirect: Option<String>,
}
impl AuthOptions {
	/// Decodes options from the host's JSON option map. Unknown keys are ignored.
	pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
		serde_path_to_error::deserialize(value).map_err(|source| ConfigError::InvalidOptions { source })
	}

	/// Sets the failure redirect path.
	pub fn with_failure_redirect(mut self, path: impl Into<String>) -> Self {
		self.failure_redirect = Some(path.into());

		self
	}
}

fn default_username_field() -> String {
	DEFAULT_USERNAME_FIELD.into()
}

fn default_password_field() -> String {
	DEFAULT_PASSWORD_FIELD.into()
}
