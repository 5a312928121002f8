mod common;

// self
use credentials_local::{
	config::AuthOptions,
	outcome::{AuthOutcome, Rejection},
	plugin::{AuthContext, CredentialsPlugin},
	request::FormRequest,
	session::{MemorySession, SESSION_PROFILE_KEY},
};

use common::*;

async fn run(body: &str, session: &MemorySession) -> AuthOutcome {
	let plugin = build_request_plugin();
	let request = FormRequest::from_urlencoded("/request-log-in", body.as_bytes());
	let response = RecordingResponse::default();
	let options = AuthOptions::default();

	plugin
		.authenticate(AuthContext::new(&request, &response, &options).with_session(session))
		.await
		.expect("Request verification should not error.")
}

#[tokio::test]
async fn captcha_and_credentials_succeed() {
	let session = MemorySession::default();
	let outcome = run("username=John&password=12345&captcha=123456", &session).await;
	let profile = outcome.profile().expect("Request verifier should resolve to a profile.");

	assert_eq!(profile.id(), "John");
	assert_eq!(profile.provider(), "Local");
	assert!(session.get(SESSION_PROFILE_KEY).is_some());
}

#[tokio::test]
async fn missing_captcha_fails_instead_of_passing() {
	let session = MemorySession::default();
	let outcome = run("username=John&password=12345", &session).await;

	assert_eq!(outcome, AuthOutcome::Failure(Rejection::forbidden()));
	assert!(session.is_empty());
}

#[tokio::test]
async fn wrong_captcha_or_password_fails() {
	let session = MemorySession::default();

	for body in [
		"username=John&password=12345&captcha=654321",
		"username=John&password=wrongPassword&captcha=123456",
		"username=Maria&password=qwerasdf&captcha=123456",
	] {
		assert_eq!(run(body, &session).await, AuthOutcome::Failure(Rejection::forbidden()));
	}

	assert!(session.is_empty());
}

#[tokio::test]
async fn empty_body_fails_for_request_verifiers() {
	let session = MemorySession::default();

	assert_eq!(run("", &session).await, AuthOutcome::Failure(Rejection::forbidden()));
}
