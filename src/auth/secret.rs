//! The `Authorization` header value held by a session.

// self
use crate::_prelude::*;

/// Full `Authorization` header value (`"<token_type> <access_token>"`), e.g. `Bearer abc`.
///
/// Formatting never reveals the value; read it through [`TokenSecret::expose`] only where the
/// header is attached or persisted. Serializes as a bare string, the shape of the cache file's
/// `token` field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps an already formatted header value, as read back from the cache.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Joins the `token_type` and `access_token` of an issuance response.
	pub fn from_parts(token_type: &str, access_token: &str) -> Self {
		Self(format!("{token_type} {access_token}"))
	}

	/// Returns the raw header value.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("TokenSecret(<redacted>)")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
