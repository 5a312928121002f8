//! Verifier-less redirect gate.
//!
//! The gate never extracts credentials. It turns an unauthenticated request into either a
//! redirect toward a login page ([`AuthOutcome::InProgress`]) or a plain
//! [`AuthOutcome::Failure`].

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	config::AuthOptions,
	obs::{self, AuthKind, AuthSpan, OutcomeLabel},
	outcome::{AuthOutcome, Rejection},
	plugin::{AuthContext, AuthFuture, CredentialsPlugin, PLUGIN_NAME},
	request::{AuthRequest, ResponseSink},
};

/// Query parameter carrying the originally requested path.
pub const REDIRECT_QUERY_PARAM: &str = "redirect";

/// Where the gate takes its redirect target from.
#[derive(Clone, Debug, PartialEq, Eq)]
enum GateMode {
	/// Explicit login page; the gate issues the redirect itself.
	LoginPage(Option<String>),
	/// Per-call `failure_redirect` option; the host issues the redirect.
	FailureRedirect,
}

/// Plugin that only decides between "go log in" and "denied".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectGate {
	mode: GateMode,
}
impl RedirectGate {
	/// Gate that redirects to `path` (when set) with the original path attached.
	pub fn login_page(path: Option<impl Into<String>>) -> Self {
		Self { mode: GateMode::LoginPage(path.map(Into::into)) }
	}

	/// Gate that reports in-progress whenever the call options carry a failure redirect.
	pub fn failure_redirect() -> Self {
		Self { mode: GateMode::FailureRedirect }
	}

	/// Configured login page, if the gate redirects by itself.
	pub fn login_path(&self) -> Option<&str> {
		match &self.mode {
			GateMode::LoginPage(path) => path.as_deref(),
			GateMode::FailureRedirect => None,
		}
	}

	/// Runs one gate decision.
	pub fn decide(
		&self,
		request: &dyn AuthRequest,
		response: &dyn ResponseSink,
		options: &AuthOptions,
	) -> Result<AuthOutcome> {
		obs::record_outcome(AuthKind::RedirectGate, OutcomeLabel::Attempt);

		let result = match &self.mode {
			GateMode::LoginPage(Some(path)) => {
				let location = login_location(path, request.original_path());

				response.redirect(&location).map(|()| AuthOutcome::InProgress).map_err(Error::from)
			},
			GateMode::LoginPage(None) => Ok(AuthOutcome::Failure(Rejection::none())),
			GateMode::FailureRedirect => Ok(match options.failure_redirect {
				Some(_) => AuthOutcome::InProgress,
				None => AuthOutcome::Failure(Rejection::none()),
			}),
		};

		obs::record_outcome(AuthKind::RedirectGate, OutcomeLabel::of(&result));

		result
	}
}
impl CredentialsPlugin for RedirectGate {
	fn name(&self) -> &str {
		PLUGIN_NAME
	}

	fn redirecting(&self) -> bool {
		true
	}

	fn authenticate<'a>(&'a self, ctx: AuthContext<'a>) -> AuthFuture<'a> {
		let span = AuthSpan::new(AuthKind::RedirectGate, "authenticate");

		Box::pin(span.instrument(async move { self.decide(ctx.request, ctx.response, ctx.options) }))
	}
}

/// Adds the original path to `login_path` as the `redirect` query parameter.
///
/// A `#fragment` on the login path stays last so the parameter lands in the query.
fn login_location(login_path: &str, original_path: &str) -> String {
	let (path, fragment) = match login_path.split_once('#') {
		Some((path, fragment)) => (path, Some(fragment)),
		None => (login_path, None),
	};
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair(REDIRECT_QUERY_PARAM, original_path)
		.finish();
	let separator = match path.split_once('?') {
		None => "?",
		Some((_, "")) => "",
		Some(_) if path.ends_with('&') => "",
		Some(_) => "&",
	};
	let mut location = format!("{path}{separator}{query}");

	if let Some(fragment) = fragment {
		location.push('#');
		location.push_str(fragment);
	}

	location
}
