//! Redacted wrapper for the secret form field.

// self
use crate::_prelude::*;

/// Password value extracted from a login form; formatting never reveals it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);
impl Password {
	/// Wraps a raw password string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw password. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl From<&str> for Password {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl Debug for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Password").field(&"<redacted>").finish()
	}
}
impl Display for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
