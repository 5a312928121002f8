//! Closed set of authentication results handed back to the host pipeline.

// self
use crate::{_prelude::*, auth::UserProfile};

/// HTTP status reported when a verifier rejects the supplied credentials.
pub const STATUS_FORBIDDEN: u16 = 403;

/// Result of one authentication attempt.
///
/// Every call to [`CredentialsPlugin::authenticate`](crate::plugin::CredentialsPlugin::authenticate)
/// yields exactly one value, so a host can never observe two outcomes for the same request.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
	/// Credentials identified a principal.
	Success(UserProfile),
	/// Credentials were checked and rejected; terminal for this attempt.
	Failure(Rejection),
	/// This strategy does not apply to the request; the host may try another one.
	Pass(Rejection),
	/// A redirect is underway; the host must stop normal handler execution.
	InProgress,
}
impl AuthOutcome {
	/// Stable label suitable for span or metric fields.
	pub const fn as_str(&self) -> &'static str {
		match self {
			AuthOutcome::Success(_) => "success",
			AuthOutcome::Failure(_) => "failure",
			AuthOutcome::Pass(_) => "pass",
			AuthOutcome::InProgress => "in_progress",
		}
	}

	/// Returns the profile for successful outcomes.
	pub fn profile(&self) -> Option<&UserProfile> {
		match self {
			AuthOutcome::Success(profile) => Some(profile),
			_ => None,
		}
	}

	/// Returns `true` for [`AuthOutcome::Success`].
	pub fn is_success(&self) -> bool {
		matches!(self, AuthOutcome::Success(_))
	}
}

/// Optional status and headers attached to failure and pass outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rejection {
	/// HTTP status hint for the host.
	pub status: Option<u16>,
	/// Extra response headers.
	pub headers: BTreeMap<String, String>,
}
impl Rejection {
	/// Rejection without status or headers.
	pub fn none() -> Self {
		Self::default()
	}

	/// `403 Forbidden` with no headers.
	pub fn forbidden() -> Self {
		Self { status: Some(STATUS_FORBIDDEN), headers: BTreeMap::new() }
	}

	/// Adds a response header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn forbidden_rejection_carries_no_headers() {
		let rejection = Rejection::forbidden();

		assert_eq!(rejection.status, Some(403));
		assert!(rejection.headers.is_empty());
		assert_eq!(Rejection::none().status, None);
	}

	#[test]
	fn outcome_labels_are_stable() {
		assert_eq!(AuthOutcome::Pass(Rejection::none()).as_str(), "pass");
		assert_eq!(AuthOutcome::Failure(Rejection::forbidden()).as_str(), "failure");
		assert_eq!(AuthOutcome::InProgress.as_str(), "in_progress");
		assert!(AuthOutcome::InProgress.profile().is_none());
	}
}
