//! Optional observability helpers for authentication attempts.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `credentials_local.authenticate` with the
//!   `kind` (verifier shape) and `stage` (call site) fields, plus construction diagnostics.
//! - Enable `metrics` to increment the `credentials_local_auth_total` counter for every
//!   attempt and outcome, labeled by `kind` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, outcome::AuthOutcome};

/// Plugin shapes observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthKind {
	/// Identifier + secret extracted from form fields.
	Password,
	/// Whole-request verifier.
	Request,
	/// Verifier-less redirect gate.
	RedirectGate,
}
impl AuthKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthKind::Password => "password",
			AuthKind::Request => "request",
			AuthKind::RedirectGate => "redirect_gate",
		}
	}
}
impl Display for AuthKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeLabel {
	/// Entry to `authenticate`.
	Attempt,
	/// Principal identified.
	Success,
	/// Credentials rejected.
	Failure,
	/// Strategy not applicable.
	Pass,
	/// Redirect underway.
	InProgress,
	/// Collaborator error propagated back to the caller.
	Error,
}
impl OutcomeLabel {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OutcomeLabel::Attempt => "attempt",
			OutcomeLabel::Success => "success",
			OutcomeLabel::Failure => "failure",
			OutcomeLabel::Pass => "pass",
			OutcomeLabel::InProgress => "in_progress",
			OutcomeLabel::Error => "error",
		}
	}

	/// Maps a finished attempt to its label.
	pub fn of(result: &Result<AuthOutcome>) -> Self {
		match result {
			Ok(AuthOutcome::Success(_)) => OutcomeLabel::Success,
			Ok(AuthOutcome::Failure(_)) => OutcomeLabel::Failure,
			Ok(AuthOutcome::Pass(_)) => OutcomeLabel::Pass,
			Ok(AuthOutcome::InProgress) => OutcomeLabel::InProgress,
			Err(_) => OutcomeLabel::Error,
		}
	}
}
impl Display for OutcomeLabel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{outcome::Rejection, session::SessionError};

	#[test]
	fn labels_follow_results() {
		assert_eq!(OutcomeLabel::of(&Ok(AuthOutcome::Pass(Rejection::none()))), OutcomeLabel::Pass);
		assert_eq!(OutcomeLabel::of(&Ok(AuthOutcome::InProgress)).as_str(), "in_progress");
		assert_eq!(
			OutcomeLabel::of(&Err(SessionError::Backend { message: "down".into() }.into())),
			OutcomeLabel::Error
		);
		assert_eq!(AuthKind::RedirectGate.to_string(), "redirect_gate");
	}
}
