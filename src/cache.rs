//! Contract for an externally owned profile cache.
//!
//! The plugin only populates an attached cache with profiles it has just authenticated.
//! Eviction, expiry, and sizing belong to the cache owner.

// self
use crate::auth::UserProfile;

/// Cache of authenticated profiles keyed by profile identifier.
pub trait ProfileCache
where
	Self: Send + Sync,
{
	/// Looks up a cached profile.
	fn get(&self, id: &str) -> Option<UserProfile>;

	/// Stores (or replaces) a profile.
	fn insert(&self, id: &str, profile: UserProfile);
}
