//! Validating builder for [`CredentialsLocal`](crate::plugin::CredentialsLocal).

// self
use crate::{
	_prelude::*,
	cache::ProfileCache,
	config::LocalConfig,
	obs,
	plugin::CredentialsLocal,
	verify::{Verifier, VerifyPassword, VerifyRequest},
};

/// Builder for [`CredentialsLocal`] plugins.
///
/// Both verifier setters may be called, but [`build`](Self::build) accepts exactly one bound
/// verifier, so a built plugin can never hold both shapes or neither.
#[derive(Default)]
pub struct CredentialsLocalBuilder {
	password: Option<Arc<dyn VerifyPassword>>,
	request: Option<Arc<dyn VerifyRequest>>,
	config: LocalConfig,
	users_cache: Option<Arc<dyn ProfileCache>>,
}
impl CredentialsLocalBuilder {
	/// Binds a verifier that receives the extracted identifier and secret.
	pub fn verify_password(mut self, verifier: impl 'static + VerifyPassword) -> Self {
		self.password = Some(Arc::new(verifier));

		self
	}

	/// Binds a verifier that receives the whole request.
	pub fn verify_request(mut self, verifier: impl 'static + VerifyRequest) -> Self {
		self.request = Some(Arc::new(verifier));

		self
	}

	/// Binds an already wrapped verifier, replacing either shape set earlier.
	pub fn verifier(mut self, verifier: Verifier) -> Self {
		match verifier {
			Verifier::Password(inner) => {
				self.password = Some(inner);
				self.request = None;
			},
			Verifier::Request(inner) => {
				self.request = Some(inner);
				self.password = None;
			},
		}

		self
	}

	/// Overrides the form field carrying the identifier.
	pub fn username_field(mut self, name: impl Into<String>) -> Self {
		self.config.username_field = name.into();

		self
	}

	/// Overrides the form field carrying the secret.
	pub fn password_field(mut self, name: impl Into<String>) -> Self {
		self.config.password_field = name.into();

		self
	}

	/// Replaces the whole field configuration.
	pub fn config(mut self, config: LocalConfig) -> Self {
		self.config = config;

		self
	}

	/// Attaches an externally owned profile cache.
	pub fn users_cache(mut self, cache: Arc<dyn ProfileCache>) -> Self {
		self.users_cache = Some(cache);

		self
	}

	/// Consumes the builder and validates the resulting plugin.
	pub fn build(self) -> Result<CredentialsLocal, ConfigError> {
		self.try_build().inspect_err(obs::report_misconfiguration)
	}

	fn try_build(self) -> Result<CredentialsLocal, ConfigError> {
		let verifier = match (self.password, self.request) {
			(Some(password), None) => Verifier::Password(password),
			(None, Some(request)) => Verifier::Request(request),
			(Some(_), Some(_)) => return Err(ConfigError::ConflictingVerifiers),
			(None, None) => return Err(ConfigError::MissingVerifier),
		};

		// Field names only matter when the plugin extracts them itself.
		if matches!(verifier, Verifier::Password(_)) {
			self.config.validate()?;
		}

		Ok(CredentialsLocal { verifier, config: self.config, users_cache: self.users_cache })
	}
}
impl Debug for CredentialsLocalBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialsLocalBuilder")
			.field("password_set", &self.password.is_some())
			.field("request_set", &self.request.is_some())
			.field("config", &self.config)
			.field("users_cache_set", &self.users_cache.is_some())
			.finish()
	}
}
