//! Plugin-level error types shared across verifiers, sessions, and redirect gates.
//!
//! Expected authentication results (missing fields, rejected credentials, deferred redirects) are
//! never errors; they travel as [`AuthOutcome`](crate::outcome::AuthOutcome) values. The types
//! here cover construction defects and collaborator failures only.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Session backend failed while persisting the profile record.
	#[error("{0}")]
	Session(
		#[from]
		#[source]
		crate::session::SessionError,
	),
	/// Response sink refused to begin a redirect.
	#[error(transparent)]
	Response(#[from] crate::request::ResponseError),
}

/// Configuration and construction failures raised before any request is served.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Neither a password verifier nor a request verifier was supplied.
	#[error("A verifier must be bound before the plugin can authenticate requests.")]
	MissingVerifier,
	/// Both verifier shapes were supplied; exactly one is allowed.
	#[error("Password and request verifiers are mutually exclusive.")]
	ConflictingVerifiers,
	/// A configured form field name is empty.
	#[error("The {field} form field name cannot be empty.")]
	EmptyField {
		/// Which field failed validation.
		field: &'static str,
	},
	/// Username and password fields point at the same form key.
	#[error("Username and password fields both read `{name}`.")]
	DuplicateField {
		/// Offending form key.
		name: String,
	},
	/// Host-supplied option map could not be decoded.
	#[error("Authentication options are invalid.")]
	InvalidOptions {
		/// Structured parsing failure, including the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::session::SessionError;

	#[test]
	fn session_error_converts_with_source() {
		let session_error = SessionError::Backend { message: "store offline".into() };
		let error: Error = session_error.clone().into();

		assert!(matches!(error, Error::Session(_)));
		assert!(error.to_string().contains("store offline"));

		let source = StdError::source(&error)
			.expect("Plugin error should expose the original session error as its source.");

		assert_eq!(source.to_string(), session_error.to_string());
	}

	#[test]
	fn config_error_messages_name_the_field() {
		let error = ConfigError::EmptyField { field: "username" };

		assert_eq!(error.to_string(), "The username form field name cannot be empty.");

		let error: Error = ConfigError::DuplicateField { name: "login".into() }.into();

		assert!(matches!(error, Error::Config(ConfigError::DuplicateField { .. })));
	}
}
