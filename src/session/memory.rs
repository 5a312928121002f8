//! Thread-safe in-memory [`SessionWriter`] for local development and tests.

// self
use crate::{
	_prelude::*,
	session::{SessionFuture, SessionRecord, SessionWriter},
};

type SessionMap = Arc<RwLock<HashMap<String, SessionRecord>>>;

/// Session backend that keeps records in-process. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySession(SessionMap);
impl MemorySession {
	/// Returns a copy of the record stored under `key`.
	pub fn get(&self, key: &str) -> Option<SessionRecord> {
		self.0.read().get(key).cloned()
	}

	/// Returns `true` if nothing has been written yet.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	fn write_now(map: SessionMap, key: String, record: SessionRecord) {
		map.write().insert(key, record);
	}
}
impl SessionWriter for MemorySession {
	fn write<'a>(&'a self, key: &'a str, record: SessionRecord) -> SessionFuture<'a, ()> {
		let map = self.0.clone();
		let key = key.to_owned();

		Box::pin(async move {
			Self::write_now(map, key, record);

			Ok(())
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{auth::UserProfile, session::SESSION_PROFILE_KEY};

	#[tokio::test]
	async fn write_overwrites_previous_record() {
		let session = MemorySession::default();
		let mary = UserProfile::builder("Mary", "Mary", "Local")
			.email("mary@work.example", "work")
			.build()
			.expect("Mary fixture should build.");
		let john = UserProfile::builder("John", "John", "Local")
			.build()
			.expect("John fixture should build.");

		session
			.write(SESSION_PROFILE_KEY, SessionRecord::from_profile(&mary))
			.await
			.expect("First write should succeed.");
		session
			.write(SESSION_PROFILE_KEY, SessionRecord::from_profile(&john))
			.await
			.expect("Second write should succeed.");

		let stored = session.get(SESSION_PROFILE_KEY).expect("Record should be present.");

		assert_eq!(stored, SessionRecord::from_profile(&john));
		assert!(!stored.contains_key("emails"));
	}
}
