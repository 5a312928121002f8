//! Host-facing request and response contracts.
//!
//! The plugin never parses bodies or writes HTTP responses itself. Hosts adapt their own
//! request type through [`AuthRequest`] and expose redirect issuance through
//! [`ResponseSink`]. [`FormRequest`] is a ready-made request for hosts that already hold the
//! url-encoded body bytes.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Read-only view of an inbound request.
pub trait AuthRequest
where
	Self: Send + Sync,
{
	/// Returns a parsed form-encoded body field, if the body carried it.
	fn form_field(&self, name: &str) -> Option<&str>;

	/// Path (and query) the client originally asked for.
	fn original_path(&self) -> &str;
}

/// Capability to start a redirect response for the current request.
pub trait ResponseSink
where
	Self: Send + Sync,
{
	/// Begins a redirect to `location`.
	fn redirect(&self, location: &str) -> Result<(), ResponseError>;
}

/// Error type produced by [`ResponseSink`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ResponseError {
	/// Headers were already sent, so no redirect can begin.
	#[error("Response has already been started.")]
	AlreadyStarted,
	/// Backend-level failure.
	#[error("Response backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Owned request holding a path and parsed form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRequest {
	path: String,
	fields: HashMap<String, String>,
}
impl FormRequest {
	/// Creates a request for `path` with an empty body.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into(), fields: HashMap::new() }
	}

	/// Creates a request for `path` from an `application/x-www-form-urlencoded` body.
	///
	/// Repeated keys keep the first occurrence.
	pub fn from_urlencoded(path: impl Into<String>, body: &[u8]) -> Self {
		let mut fields = HashMap::new();

		for (key, value) in form_urlencoded::parse(body) {
			fields.entry(key.into_owned()).or_insert_with(|| value.into_owned());
		}

		Self { path: path.into(), fields }
	}

	/// Adds (or replaces) a form field.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.fields.insert(name.into(), value.into());

		self
	}
}
impl AuthRequest for FormRequest {
	fn form_field(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str)
	}

	fn original_path(&self) -> &str {
		&self.path
	}
}
