//! Credentials plugins and the contract hosts use to drive them.
//!
//! [`CredentialsLocal`] checks credentials through its bound [`Verifier`]; [`RedirectGate`]
//! checks nothing and only decides between a redirect and a failure. Both implement
//! [`CredentialsPlugin`], whose `authenticate` resolves to exactly one [`AuthOutcome`].

pub mod builder;
pub mod gate;

pub use builder::CredentialsLocalBuilder;
pub use gate::RedirectGate;

// self
use crate::{
	_prelude::*,
	auth::{Password, UserProfile},
	cache::ProfileCache,
	config::{AuthOptions, LocalConfig},
	obs::{self, AuthKind, AuthSpan, OutcomeLabel},
	outcome::{AuthOutcome, Rejection},
	request::{AuthRequest, ResponseSink},
	session::{SESSION_PROFILE_KEY, SessionRecord, SessionWriter},
	verify::Verifier,
};

/// Name hosts use to route requests to the local strategies.
pub const PLUGIN_NAME: &str = "Local";

/// Boxed future returned by [`CredentialsPlugin::authenticate`].
pub type AuthFuture<'a> = Pin<Box<dyn Future<Output = Result<AuthOutcome>> + 'a + Send>>;

/// Host-facing authentication strategy contract.
pub trait CredentialsPlugin
where
	Self: Send + Sync,
{
	/// Name the host pipeline routes on.
	fn name(&self) -> &str;

	/// Whether failed or in-progress attempts are expected to produce a redirect rather than
	/// a rendered failure page.
	fn redirecting(&self) -> bool;

	/// Runs one authentication attempt.
	///
	/// Expected results (pass, failure, in-progress) are `Ok` outcomes; `Err` is reserved for
	/// collaborator failures such as a session backend that cannot be written.
	fn authenticate<'a>(&'a self, ctx: AuthContext<'a>) -> AuthFuture<'a>;
}

/// Everything a plugin may touch while handling one request.
#[derive(Clone, Copy)]
pub struct AuthContext<'a> {
	/// Inbound request.
	pub request: &'a dyn AuthRequest,
	/// Response under construction; only redirect gates write to it.
	pub response: &'a dyn ResponseSink,
	/// Request-scoped session writer; `None` when the host does not use sessions.
	pub session: Option<&'a dyn SessionWriter>,
	/// Per-call options.
	pub options: &'a AuthOptions,
}
impl<'a> AuthContext<'a> {
	/// Creates a context without a session writer.
	pub fn new(
		request: &'a dyn AuthRequest,
		response: &'a dyn ResponseSink,
		options: &'a AuthOptions,
	) -> Self {
		Self { request, response, session: None, options }
	}

	/// Attaches the request's session writer.
	pub fn with_session(mut self, session: &'a dyn SessionWriter) -> Self {
		self.session = Some(session);

		self
	}
}
impl Debug for AuthContext<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthContext")
			.field("path", &self.request.original_path())
			.field("session_set", &self.session.is_some())
			.field("options", &self.options)
			.finish()
	}
}

/// Local credentials strategy: a form-field or whole-request verifier plus the session
/// projection of whatever profile it yields.
#[derive(Clone)]
pub struct CredentialsLocal {
	verifier: Verifier,
	config: LocalConfig,
	users_cache: Option<Arc<dyn ProfileCache>>,
}
impl CredentialsLocal {
	/// Returns a builder; exactly one verifier must be supplied before `build`.
	pub fn builder() -> CredentialsLocalBuilder {
		CredentialsLocalBuilder::default()
	}

	/// Bound verifier.
	pub fn verifier(&self) -> &Verifier {
		&self.verifier
	}

	/// Form field configuration.
	pub fn config(&self) -> &LocalConfig {
		&self.config
	}

	/// Attached profile cache, if any.
	pub fn users_cache(&self) -> Option<&Arc<dyn ProfileCache>> {
		self.users_cache.as_ref()
	}

	/// Runs one attempt against the bound verifier.
	pub async fn authenticate_request(
		&self,
		request: &dyn AuthRequest,
		session: Option<&dyn SessionWriter>,
	) -> Result<AuthOutcome> {
		let kind = self.kind();
		let span = AuthSpan::new(kind, "authenticate");

		obs::record_outcome(kind, OutcomeLabel::Attempt);

		let result = span.instrument(self.decide(request, session)).await;

		obs::record_outcome(kind, OutcomeLabel::of(&result));

		result
	}

	async fn decide(
		&self,
		request: &dyn AuthRequest,
		session: Option<&dyn SessionWriter>,
	) -> Result<AuthOutcome> {
		let resolved = match &self.verifier {
			Verifier::Password(verifier) => {
				let (Some(username), Some(password)) = (
					request.form_field(&self.config.username_field),
					request.form_field(&self.config.password_field),
				) else {
					return Ok(AuthOutcome::Pass(Rejection::none()));
				};

				let password = Password::new(password);

				verifier.verify(username, &password).await
			},
			Verifier::Request(verifier) => verifier.verify(request).await,
		};

		match resolved {
			Some(profile) => self.complete(profile, session).await,
			None => Ok(AuthOutcome::Failure(Rejection::forbidden())),
		}
	}

	async fn complete(
		&self,
		profile: UserProfile,
		session: Option<&dyn SessionWriter>,
	) -> Result<AuthOutcome> {
		if let Some(session) = session {
			session.write(SESSION_PROFILE_KEY, SessionRecord::from_profile(&profile)).await?;
		}
		if let Some(cache) = &self.users_cache {
			cache.insert(profile.id(), profile.clone());
		}

		Ok(AuthOutcome::Success(profile))
	}

	fn kind(&self) -> AuthKind {
		match self.verifier {
			Verifier::Password(_) => AuthKind::Password,
			Verifier::Request(_) => AuthKind::Request,
		}
	}
}
impl CredentialsPlugin for CredentialsLocal {
	fn name(&self) -> &str {
		PLUGIN_NAME
	}

	fn redirecting(&self) -> bool {
		true
	}

	fn authenticate<'a>(&'a self, ctx: AuthContext<'a>) -> AuthFuture<'a> {
		Box::pin(self.authenticate_request(ctx.request, ctx.session))
	}
}
impl Debug for CredentialsLocal {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialsLocal")
			.field("verifier", &self.verifier)
			.field("config", &self.config)
			.field("users_cache_set", &self.users_cache.is_some())
			.finish()
	}
}
