//! The credential bundle (token, expiry, default headers) and its on-disk form.

// self
use crate::{_prelude::*, auth::TokenSecret, error::AuthError};

/// Header carrying the bearer token on every API request.
pub const AUTHORIZATION: &str = "Authorization";

/// Bearer token, absolute expiry, and the headers derived from them.
///
/// The three parts are only ever replaced together: a bundle is built whole on issuance or
/// restored whole from the cache, never patched field by field.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialBundle {
	/// `<token_type> <access_token>` value; callers must avoid logging it.
	pub token: TokenSecret,
	/// Absolute expiry instant.
	pub expires_at: OffsetDateTime,
	/// Headers attached to every authenticated request.
	pub default_headers: BTreeMap<String, String>,
}
impl CredentialBundle {
	/// Builds a bundle from a token and expiry, deriving the `Authorization` header.
	pub fn new(token: TokenSecret, expires_at: OffsetDateTime) -> Self {
		let default_headers = BTreeMap::from([(AUTHORIZATION.to_owned(), token.expose().to_owned())]);

		Self { token, expires_at, default_headers }
	}

	/// Builds a bundle from an identity-endpoint response received at `issued_at`.
	pub fn issued(
		token_type: &str,
		access_token: &str,
		expires_in: i64,
		issued_at: OffsetDateTime,
	) -> Result<Self, AuthError> {
		if expires_in <= 0 {
			return Err(AuthError::NonPositiveExpiresIn);
		}

		let expires_at = issued_at
			.checked_add(Duration::seconds(expires_in))
			.ok_or(AuthError::ExpiresInOutOfRange)?;

		Ok(Self::new(TokenSecret::from_parts(token_type, access_token), expires_at))
	}

	/// Returns `true` while the expiry is strictly after `instant`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at > instant
	}

	/// Convenience helper that checks validity against the current UTC instant.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}
}
impl Debug for CredentialBundle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let header_names: Vec<_> = self.default_headers.keys().collect();

		f.debug_struct("CredentialBundle")
			.field("token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.field("default_headers", &header_names)
			.finish()
	}
}

/// On-disk shape of the token cache: `{token, expiry, default_headers}`.
///
/// Every field is optional so that a partially written or foreign file still parses; only a
/// complete object becomes a [`CredentialBundle`]. `expiry` is a UNIX timestamp in (possibly
/// fractional) seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedBundle {
	/// Cached `Authorization` value.
	pub token: Option<TokenSecret>,
	/// Cached expiry as UNIX seconds.
	pub expiry: Option<f64>,
	/// Cached default headers.
	pub default_headers: Option<BTreeMap<String, String>>,
}
impl CachedBundle {
	/// Converts into a bundle when all three fields are present and the expiry is representable.
	pub fn into_bundle(self) -> Option<CredentialBundle> {
		let token = self.token?;
		let expires_at = unix_seconds_to_instant(self.expiry?)?;
		let default_headers = self.default_headers?;

		Some(CredentialBundle { token, expires_at, default_headers })
	}
}
impl From<&CredentialBundle> for CachedBundle {
	fn from(bundle: &CredentialBundle) -> Self {
		Self {
			token: Some(bundle.token.clone()),
			expiry: Some(bundle.expires_at.unix_timestamp_nanos() as f64 / 1e9),
			default_headers: Some(bundle.default_headers.clone()),
		}
	}
}

fn unix_seconds_to_instant(seconds: f64) -> Option<OffsetDateTime> {
	if !seconds.is_finite() {
		return None;
	}

	OffsetDateTime::from_unix_timestamp_nanos((seconds * 1e9) as i128).ok()
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn issued_bundle_formats_token_and_headers() {
		let issued_at = macros::datetime!(2025-01-01 00:00 UTC);
		let bundle = CredentialBundle::issued("Bearer", "abc", 3600, issued_at)
			.expect("A positive expires_in should produce a bundle.");

		assert_eq!(bundle.token.expose(), "Bearer abc");
		assert_eq!(bundle.expires_at, macros::datetime!(2025-01-01 01:00 UTC));
		assert_eq!(
			bundle.default_headers.get(AUTHORIZATION).map(String::as_str),
			Some("Bearer abc")
		);
	}

	#[test]
	fn validity_is_strictly_before_expiry() {
		let bundle = CredentialBundle::new(
			TokenSecret::new("Bearer x"),
			macros::datetime!(2025-01-01 01:00 UTC),
		);

		assert!(bundle.is_valid_at(macros::datetime!(2025-01-01 00:59 UTC)));
		assert!(!bundle.is_valid_at(macros::datetime!(2025-01-01 01:00 UTC)));
		assert!(!bundle.is_valid_at(macros::datetime!(2025-01-01 02:00 UTC)));
	}

	#[test]
	fn issuance_rejects_unusable_lifetimes() {
		let now = OffsetDateTime::now_utc();

		assert!(matches!(
			CredentialBundle::issued("Bearer", "abc", 0, now),
			Err(AuthError::NonPositiveExpiresIn)
		));
		assert!(matches!(
			CredentialBundle::issued("Bearer", "abc", i64::MAX, now),
			Err(AuthError::ExpiresInOutOfRange)
		));
	}

	#[test]
	fn debug_output_redacts_token_and_header_values() {
		let bundle = CredentialBundle::new(TokenSecret::new("Bearer hidden"), OffsetDateTime::now_utc());
		let rendered = format!("{bundle:?}");

		assert!(!rendered.contains("hidden"));
		assert!(rendered.contains(AUTHORIZATION));
	}

	#[test]
	fn cached_form_requires_every_field() {
		let complete: CachedBundle = serde_json::from_str(
			r#"{"token":"Bearer x","expiry":1735693200.5,"default_headers":{"Authorization":"Bearer x"}}"#,
		)
		.expect("Complete cache payload should parse.");
		let bundle = complete.into_bundle().expect("Complete cache payload should convert.");

		assert_eq!(bundle.token.expose(), "Bearer x");
		assert_eq!(bundle.expires_at.unix_timestamp(), 1_735_693_200);

		let partial: CachedBundle = serde_json::from_str(r#"{"token":"Bearer x","expiry":1735693200}"#)
			.expect("Partial cache payload should still parse.");

		assert!(partial.into_bundle().is_none());

		let nulls: CachedBundle =
			serde_json::from_str(r#"{"token":null,"expiry":null,"default_headers":null}"#)
				.expect("Null fields should parse as absent.");

		assert!(nulls.into_bundle().is_none());
	}

	#[test]
	fn cached_form_round_trips_to_the_second() {
		let bundle = CredentialBundle::new(
			TokenSecret::new("Bearer y"),
			macros::datetime!(2030-06-01 12:34:56 UTC),
		);
		let restored = CachedBundle::from(&bundle)
			.into_bundle()
			.expect("Cached form of a complete bundle should convert back.");

		assert_eq!(restored.token, bundle.token);
		assert_eq!(restored.default_headers, bundle.default_headers);
		assert_eq!(restored.expires_at.unix_timestamp(), bundle.expires_at.unix_timestamp());
	}
}
