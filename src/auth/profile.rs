//! Immutable user profiles produced by verifiers, plus their builder.

// self
use crate::_prelude::*;

/// Errors produced by [`UserProfileBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ProfileBuilderError {
	/// A required attribute was empty.
	#[error("Profile {attribute} cannot be empty.")]
	Empty {
		/// Which attribute failed validation (`id`, `displayName`, `provider`).
		attribute: &'static str,
	},
}

/// Family, given, and middle name parts of a principal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileName {
	/// Family (last) name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_name: Option<String>,
	/// Given (first) name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub given_name: Option<String>,
	/// Middle name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub middle_name: Option<String>,
}
impl UserProfileName {
	/// Creates a name with every part populated.
	pub fn new(
		family_name: impl Into<String>,
		given_name: impl Into<String>,
		middle_name: impl Into<String>,
	) -> Self {
		Self {
			family_name: Some(family_name.into()),
			given_name: Some(given_name.into()),
			middle_name: Some(middle_name.into()),
		}
	}
}

/// Email address paired with its type label (`work`, `home`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileEmail {
	/// Address value.
	pub value: String,
	/// Address type label.
	#[serde(rename = "type")]
	pub kind: String,
}
impl UserProfileEmail {
	/// Creates a new email entry.
	pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
		Self { value: value.into(), kind: kind.into() }
	}
}

/// Photo reference, usually a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfilePhoto {
	/// Photo location.
	pub value: String,
}
impl UserProfilePhoto {
	/// Creates a new photo entry.
	pub fn new(value: impl Into<String>) -> Self {
		Self { value: value.into() }
	}
}

/// Authenticated principal.
///
/// Profiles are created only through [`UserProfile::builder`], which guarantees the required
/// attributes are non-empty. Fields are read-only after construction, and deserialization goes
/// through the same validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawUserProfile")]
pub struct UserProfile {
	id: String,
	display_name: String,
	provider: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<UserProfileName>,
	#[serde(skip_serializing_if = "Option::is_none")]
	emails: Option<Vec<UserProfileEmail>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	photos: Option<Vec<UserProfilePhoto>>,
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	extended_properties: BTreeMap<String, serde_json::Value>,
}
impl UserProfile {
	/// Returns a builder seeded with the three required attributes.
	pub fn builder(
		id: impl Into<String>,
		display_name: impl Into<String>,
		provider: impl Into<String>,
	) -> UserProfileBuilder {
		UserProfileBuilder::new(id.into(), display_name.into(), provider.into())
	}

	/// Identifier, unique within the provider namespace.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Human-readable name.
	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	/// Strategy that produced the profile.
	pub fn provider(&self) -> &str {
		&self.provider
	}

	/// Structured name parts, if known.
	pub fn name(&self) -> Option<&UserProfileName> {
		self.name.as_ref()
	}

	/// Email addresses in provider order.
	pub fn emails(&self) -> Option<&[UserProfileEmail]> {
		self.emails.as_deref()
	}

	/// Photos in provider order.
	pub fn photos(&self) -> Option<&[UserProfilePhoto]> {
		self.photos.as_deref()
	}

	/// Open-ended provider attributes.
	pub fn extended_properties(&self) -> &BTreeMap<String, serde_json::Value> {
		&self.extended_properties
	}
}

/// Wire shape of [`UserProfile`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUserProfile {
	id: String,
	display_name: String,
	provider: String,
	#[serde(default)]
	name: Option<UserProfileName>,
	#[serde(default)]
	emails: Option<Vec<UserProfileEmail>>,
	#[serde(default)]
	photos: Option<Vec<UserProfilePhoto>>,
	#[serde(default)]
	extended_properties: BTreeMap<String, serde_json::Value>,
}
impl TryFrom<RawUserProfile> for UserProfile {
	type Error = ProfileBuilderError;

	fn try_from(raw: RawUserProfile) -> Result<Self, Self::Error> {
		UserProfileBuilder {
			id: raw.id,
			display_name: raw.display_name,
			provider: raw.provider,
			name: raw.name,
			emails: raw.emails,
			photos: raw.photos,
			extended_properties: raw.extended_properties,
		}
		.build()
	}
}

/// Builder for [`UserProfile`].
#[derive(Clone, Debug)]
pub struct UserProfileBuilder {
	id: String,
	display_name: String,
	provider: String,
	name: Option<UserProfileName>,
	emails: Option<Vec<UserProfileEmail>>,
	photos: Option<Vec<UserProfilePhoto>>,
	extended_properties: BTreeMap<String, serde_json::Value>,
}
impl UserProfileBuilder {
	fn new(id: String, display_name: String, provider: String) -> Self {
		Self {
			id,
			display_name,
			provider,
			name: None,
			emails: None,
			photos: None,
			extended_properties: BTreeMap::new(),
		}
	}

	/// Sets the structured name.
	pub fn name(mut self, name: UserProfileName) -> Self {
		self.name = Some(name);

		self
	}

	/// Appends an email entry.
	pub fn email(mut self, value: impl Into<String>, kind: impl Into<String>) -> Self {
		self.emails.get_or_insert_with(Vec::new).push(UserProfileEmail::new(value, kind));

		self
	}

	/// Replaces the email list.
	pub fn emails<I>(mut self, emails: I) -> Self
	where
		I: IntoIterator<Item = UserProfileEmail>,
	{
		self.emails = Some(emails.into_iter().collect());

		self
	}

	/// Appends a photo entry.
	pub fn photo(mut self, value: impl Into<String>) -> Self {
		self.photos.get_or_insert_with(Vec::new).push(UserProfilePhoto::new(value));

		self
	}

	/// Adds (or replaces) an extended property.
	pub fn extended_property(
		mut self,
		key: impl Into<String>,
		value: impl Into<serde_json::Value>,
	) -> Self {
		self.extended_properties.insert(key.into(), value.into());

		self
	}

	/// Consumes the builder and validates the resulting profile.
	pub fn build(self) -> Result<UserProfile, ProfileBuilderError> {
		if self.id.is_empty() {
			return Err(ProfileBuilderError::Empty { attribute: "id" });
		}
		if self.display_name.is_empty() {
			return Err(ProfileBuilderError::Empty { attribute: "displayName" });
		}
		if self.provider.is_empty() {
			return Err(ProfileBuilderError::Empty { attribute: "provider" });
		}

		Ok(UserProfile {
			id: self.id,
			display_name: self.display_name,
			provider: self.provider,
			name: self.name,
			emails: self.emails,
			photos: self.photos,
			extended_properties: self.extended_properties,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn builder_rejects_empty_required_attributes() {
		assert_eq!(
			UserProfile::builder("", "Mary", "Local").build(),
			Err(ProfileBuilderError::Empty { attribute: "id" })
		);
		assert_eq!(
			UserProfile::builder("Mary", "", "Local").build(),
			Err(ProfileBuilderError::Empty { attribute: "displayName" })
		);
		assert_eq!(
			UserProfile::builder("Mary", "Mary", "").build(),
			Err(ProfileBuilderError::Empty { attribute: "provider" })
		);
	}

	#[test]
	fn builder_keeps_email_and_photo_order() {
		let profile = UserProfile::builder("mary", "Mary", "Local")
			.email("mary@work.example", "work")
			.email("mary@home.example", "home")
			.photo("https://img.example/1.png")
			.photo("https://img.example/2.png")
			.build()
			.expect("Profile fixture should build.");
		let emails = profile.emails().expect("Emails should be present.");

		assert_eq!(emails[0].value, "mary@work.example");
		assert_eq!(emails[1].kind, "home");
		assert_eq!(profile.photos().map(<[_]>::len), Some(2));
		assert!(profile.extended_properties().is_empty());
	}

	#[test]
	fn serde_uses_camel_case_and_omits_absent_parts() {
		let profile = UserProfile::builder("mary", "Mary", "Local")
			.email("mary@work.example", "work")
			.build()
			.expect("Profile fixture should build.");
		let payload = serde_json::to_string(&profile).expect("Profile should serialize.");

		assert_eq!(
			payload,
			"{\"id\":\"mary\",\"displayName\":\"Mary\",\"provider\":\"Local\",\
			 \"emails\":[{\"value\":\"mary@work.example\",\"type\":\"work\"}]}"
		);

		let round_trip: UserProfile =
			serde_json::from_str(&payload).expect("Profile should deserialize.");

		assert_eq!(round_trip, profile);
	}

	#[test]
	fn deserialization_rejects_empty_required_attributes() {
		let err = serde_json::from_str::<UserProfile>(
			r#"{"id":"","displayName":"","provider":""}"#,
		)
		.expect_err("Empty identity should not deserialize.");

		assert!(err.to_string().contains("Profile id cannot be empty."));

		let err = serde_json::from_str::<UserProfile>(
			r#"{"id":"mary","displayName":"Mary","provider":""}"#,
		)
		.expect_err("Empty provider should not deserialize.");

		assert!(err.to_string().contains("Profile provider cannot be empty."));

		let profile = serde_json::from_str::<UserProfile>(
			r#"{"id":"mary","displayName":"Mary","provider":"Local","photos":[{"value":"p.png"}]}"#,
		)
		.expect("Valid payload should deserialize.");

		assert_eq!(profile.id(), "mary");
		assert_eq!(profile.photos().map(<[_]>::len), Some(1));
	}
}
