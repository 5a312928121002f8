//! Auth-domain models: authenticated profiles and redacted password values.

pub mod password;
pub mod profile;

pub use password::*;
pub use profile::*;
