//! Session write contract and the profile-to-record projection.
//!
//! A [`SessionRecord`] is a flat, storable projection of a [`UserProfile`]. It is rebuilt from
//! scratch on every successful authentication and written under [`SESSION_PROFILE_KEY`],
//! replacing whatever the session held before. The plugin never reads it back.

pub mod memory;

pub use memory::MemorySession;

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, auth::UserProfile};

/// Session key holding the projected profile.
pub const SESSION_PROFILE_KEY: &str = "userProfile";

/// Boxed future returned by [`SessionWriter`] implementations.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SessionError>> + 'a + Send>>;

/// Request-scoped session write capability.
///
/// Hosts hand one writer per in-flight request, so implementations need no cross-request
/// locking beyond what `&self` access requires.
pub trait SessionWriter
where
	Self: Send + Sync,
{
	/// Stores `record` under `key`, overwriting any previous value.
	fn write<'a>(&'a self, key: &'a str, record: SessionRecord) -> SessionFuture<'a, ()>;
}

/// Error type produced by [`SessionWriter`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// The record could not be encoded for the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the session store.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Flat mapping of string keys to JSON primitives and arrays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionRecord(Map<String, Value>);
impl SessionRecord {
	/// Projects a profile into its storable form.
	///
	/// Required attributes are always copied. Optional parts appear only when present and
	/// non-empty; no key ever holds `null`. Email values and types are emitted as two
	/// index-aligned arrays.
	pub fn from_profile(profile: &UserProfile) -> Self {
		let mut map = Map::new();

		map.insert("displayName".into(), profile.display_name().into());
		map.insert("provider".into(), profile.provider().into());
		map.insert("id".into(), profile.id().into());

		if let Some(name) = profile.name() {
			for (key, part) in [
				("familyName", &name.family_name),
				("givenName", &name.given_name),
				("middleName", &name.middle_name),
			] {
				if let Some(part) = part {
					map.insert(key.into(), part.as_str().into());
				}
			}
		}
		if let Some(emails) = profile.emails().filter(|emails| !emails.is_empty()) {
			let (values, kinds): (Vec<Value>, Vec<Value>) = emails
				.iter()
				.map(|email| (email.value.as_str().into(), email.kind.as_str().into()))
				.unzip();

			map.insert("emails".into(), Value::Array(values));
			map.insert("emailTypes".into(), Value::Array(kinds));
		}
		if let Some(photos) = profile.photos().filter(|photos| !photos.is_empty()) {
			map.insert(
				"photos".into(),
				Value::Array(photos.iter().map(|photo| photo.value.as_str().into()).collect()),
			);
		}
		if !profile.extended_properties().is_empty() {
			let properties = profile
				.extended_properties()
				.iter()
				.map(|(key, value)| (key.clone(), value.clone()))
				.collect();

			map.insert("extendedProperties".into(), Value::Object(properties));
		}

		Self(map)
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns `true` if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of top-level keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the record holds no keys.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over keys in sorted order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Encodes the record as compact JSON.
	pub fn to_json(&self) -> Result<String, SessionError> {
		serde_json::to_string(&self.0)
			.map_err(|e| SessionError::Serialization { message: e.to_string() })
	}
}
impl From<&UserProfile> for SessionRecord {
	fn from(profile: &UserProfile) -> Self {
		Self::from_profile(profile)
	}
}
