//! Client-level error types shared across the broker, gateway, codec, and stores.

// self
use crate::{_prelude::*, http::ResponseStatus};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The identity endpoint refused to issue a token.
	#[error(transparent)]
	Authentication(#[from] AuthError),
	/// The token was obtained but could not be written to the cache file.
	///
	/// The in-memory credential bundle stays valid, so callers may treat this as a warning.
	#[error("Token was issued but could not be cached: {0}")]
	CacheWrite(#[source] crate::store::StoreError),
	/// An API call answered with anything other than `200 OK`.
	#[error("API returned an unexpected response: {status} {reason}: {body}")]
	UnexpectedResponse {
		/// Decoded HTTP status.
		status: ResponseStatus,
		/// Canonical reason phrase for the status.
		reason: String,
		/// Raw response body text.
		body: String,
	},
	/// A payload did not match the resource schema it was decoded against.
	#[error(transparent)]
	Schema(#[from] crate::codec::SchemaError),
	/// A `200 OK` response carried a body that is not the expected JSON document.
	#[error("Response body could not be parsed.")]
	ResponseParse {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl Error {
	/// Returns `true` for warning-class errors that leave the client usable.
	pub fn is_cache_warning(&self) -> bool {
		matches!(self, Self::CacheWrite(_))
	}
}

/// Failures raised while obtaining a token from the identity endpoint.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// The identity endpoint answered with a non-200 status.
	#[error("Failed to get tokens from the identity endpoint: {status} {reason} {body}")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// Reason phrase for the status.
		reason: String,
		/// Raw response body text.
		body: String,
	},
	/// Token endpoint returned a non-positive `expires_in`.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
	/// Token endpoint returned an `expires_in` too large to represent.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// A configured endpoint is not a valid URL.
	#[error("The {endpoint} URL is invalid.")]
	InvalidUrl {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configured base URL cannot have paths joined onto it.
	#[error("The {endpoint} URL cannot be used as a base: {url}.")]
	NotABase {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Offending URL.
		url: String,
	},
	/// A required credential was empty.
	#[error("The {field} must not be empty.")]
	EmptyCredential {
		/// Name of the missing credential.
		field: &'static str,
	},
	/// A required environment variable was not set.
	#[error("Environment variable {name} is not set.")]
	MissingEnv {
		/// Variable name.
		name: &'static str,
	},
	/// Token request payload could not be encoded.
	#[error("Token request could not be encoded.")]
	RequestEncode(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {url}.")]
	Network {
		/// Request URL.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: impl Into<String>, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { url: url.into(), source: Box::new(src) }
	}
}
