//! Fixtures shared by the integration tests.

#![allow(dead_code)]

// std
use std::collections::HashMap;
// crates.io
use parking_lot::{Mutex, RwLock};
// self
use credentials_local::{
	auth::{Password, UserProfile},
	cache::ProfileCache,
	plugin::CredentialsLocal,
	request::{AuthRequest, ResponseError, ResponseSink},
	verify::{VerifyFuture, VerifyPassword, VerifyRequest},
};

/// Captcha answer accepted by [`CaptchaVerifier`].
pub const CAPTCHA_ANSWER: &str = "123456";

/// Fixed user table verifier: `John` / `12345` and `Mary` / `qwerasdf`.
#[derive(Clone, Debug)]
pub struct UserTable(pub HashMap<String, String>);
impl UserTable {
	fn lookup(&self, username: &str, password: &str) -> Option<UserProfile> {
		let stored = self.0.get(username)?;

		if stored != password {
			return None;
		}

		UserProfile::builder(username, username, "Local").build().ok()
	}
}
impl Default for UserTable {
	fn default() -> Self {
		Self(HashMap::from_iter([
			("John".to_owned(), "12345".to_owned()),
			("Mary".to_owned(), "qwerasdf".to_owned()),
		]))
	}
}
impl VerifyPassword for UserTable {
	fn verify<'a>(&'a self, username: &'a str, password: &'a Password) -> VerifyFuture<'a> {
		Box::pin(async move { self.lookup(username, password.expose()) })
	}
}

/// Request verifier that also demands `captcha=123456` in the form body.
#[derive(Clone, Debug, Default)]
pub struct CaptchaVerifier(pub UserTable);
impl VerifyRequest for CaptchaVerifier {
	fn verify<'a>(&'a self, request: &'a dyn AuthRequest) -> VerifyFuture<'a> {
		Box::pin(async move {
			let username = request.form_field("username")?;
			let password = request.form_field("password")?;
			let captcha = request.form_field("captcha")?;

			if captcha != CAPTCHA_ANSWER {
				return None;
			}

			self.0.lookup(username, password)
		})
	}
}

/// Response sink that records every redirect location.
#[derive(Debug, Default)]
pub struct RecordingResponse(Mutex<Vec<String>>);
impl RecordingResponse {
	/// Locations redirected to so far.
	pub fn redirects(&self) -> Vec<String> {
		self.0.lock().clone()
	}
}
impl ResponseSink for RecordingResponse {
	fn redirect(&self, location: &str) -> Result<(), ResponseError> {
		self.0.lock().push(location.to_owned());

		Ok(())
	}
}

/// Profile cache backed by a plain map.
#[derive(Debug, Default)]
pub struct MapCache(RwLock<HashMap<String, UserProfile>>);
impl ProfileCache for MapCache {
	fn get(&self, id: &str) -> Option<UserProfile> {
		self.0.read().get(id).cloned()
	}

	fn insert(&self, id: &str, profile: UserProfile) {
		self.0.write().insert(id.to_owned(), profile);
	}
}

/// Plugin bound to the default [`UserTable`] through the form-field path.
pub fn build_password_plugin() -> CredentialsLocal {
	CredentialsLocal::builder()
		.verify_password(UserTable::default())
		.build()
		.expect("Password plugin fixture should build.")
}

/// Plugin bound to [`CaptchaVerifier`] through the whole-request path.
pub fn build_request_plugin() -> CredentialsLocal {
	CredentialsLocal::builder()
		.verify_request(CaptchaVerifier::default())
		.build()
		.expect("Request plugin fixture should build.")
}
