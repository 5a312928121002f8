//! Verifier contracts bound to a [`CredentialsLocal`](crate::plugin::CredentialsLocal) plugin.
//!
//! A verifier resolves exactly once to `Some(profile)` or `None`. The resolution may be
//! immediate or follow I/O against an external credential store; the plugin awaits it once
//! and never polls it again. Password checking itself is the integrator's concern.

// self
use crate::{
	_prelude::*,
	auth::{Password, UserProfile},
	request::AuthRequest,
};

/// Boxed future returned by verifiers.
pub type VerifyFuture<'a> = Pin<Box<dyn Future<Output = Option<UserProfile>> + 'a + Send>>;

/// Verifier that receives the identifier and secret extracted from the form body.
///
/// Closures of the shape `Fn(String, Password) -> impl Future<Output = Option<UserProfile>>`
/// implement this trait automatically.
pub trait VerifyPassword
where
	Self: Send + Sync,
{
	/// Resolves the credentials to a profile, or `None` when they are not valid.
	fn verify<'a>(&'a self, username: &'a str, password: &'a Password) -> VerifyFuture<'a>;
}
impl<F, Fut> VerifyPassword for F
where
	F: Send + Sync + Fn(String, Password) -> Fut,
	Fut: 'static + Send + Future<Output = Option<UserProfile>>,
{
	fn verify<'a>(&'a self, username: &'a str, password: &'a Password) -> VerifyFuture<'a> {
		Box::pin((self)(username.to_owned(), password.clone()))
	}
}

/// Verifier that inspects the whole request, for forms carrying more than two fields.
pub trait VerifyRequest
where
	Self: Send + Sync,
{
	/// Resolves the request to a profile, or `None` when it does not authenticate.
	fn verify<'a>(&'a self, request: &'a dyn AuthRequest) -> VerifyFuture<'a>;
}

/// The verifier bound to a plugin. Exactly one shape is active per instance.
#[derive(Clone)]
pub enum Verifier {
	/// Identifier + secret verification.
	Password(Arc<dyn VerifyPassword>),
	/// Whole-request verification.
	Request(Arc<dyn VerifyRequest>),
}
impl Verifier {
	/// Wraps a password verifier.
	pub fn password(verifier: impl 'static + VerifyPassword) -> Self {
		Self::Password(Arc::new(verifier))
	}

	/// Wraps a request verifier.
	pub fn request(verifier: impl 'static + VerifyRequest) -> Self {
		Self::Request(Arc::new(verifier))
	}

	/// Stable label suitable for span or metric fields.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Verifier::Password(_) => "password",
			Verifier::Request(_) => "request",
		}
	}
}
impl Debug for Verifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Verifier::{}(..)", self.as_str())
	}
}
