//! Transport primitives for identity and resource requests.
//!
//! The module exposes [`HttpTransport`], the client's only dependency on an HTTP stack, together
//! with the [`ResponseStatus`] enumeration used to decode API failures. The default
//! [`ReqwestTransport`] wraps a blocking reqwest client; tests and callers can plug in any other
//! implementation.

// self
use crate::{_prelude::*, error::ConfigError};

/// Request type handed to transports.
pub type HttpRequest = ::http::Request<Vec<u8>>;
/// Response type returned by transports.
pub type HttpResponse = ::http::Response<Vec<u8>>;

/// Default per-request timeout applied uniformly to every outbound call.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Abstraction over blocking HTTP transports.
///
/// Implementations must execute exactly one request per call; the client never retries, so any
/// retry policy belongs to the caller. Non-200 statuses are not errors at this layer: return the
/// response and let the broker or gateway classify it.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and returns the full response.
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::TransportError>;
}

/// Thin wrapper around a blocking [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport whose every request uses `timeout`.
	pub fn with_timeout(timeout: StdDuration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing blocking reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::TransportError> {
		let response = self.0.execute(request.try_into()?)?;
		let status = response.status();
		let headers = response.headers().to_owned();
		let mut response_new = HttpResponse::new(response.bytes()?.to_vec());

		*response_new.status_mut() = status;
		*response_new.headers_mut() = headers;

		Ok(response_new)
	}
}

macro_rules! def_statuses {
	($($variant:ident = $code:literal, $name:literal;)+) => {
		/// HTTP statuses the API is documented to return, decoded for error reporting.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum ResponseStatus {
			$(
				#[doc = concat!("HTTP ", stringify!($code), ".")]
				$variant,
			)+
			/// Any status outside the documented set.
			Other(u16),
		}
		impl ResponseStatus {
			/// Decodes a numeric status code.
			pub fn from_code(code: u16) -> Self {
				match code {
					$($code => Self::$variant,)+
					other => Self::Other(other),
				}
			}

			/// Returns the numeric status code.
			pub fn code(self) -> u16 {
				match self {
					$(Self::$variant => $code,)+
					Self::Other(code) => code,
				}
			}

			/// Returns the upper-snake-case status name.
			pub fn name(self) -> &'static str {
				match self {
					$(Self::$variant => $name,)+
					Self::Other(_) => "UNKNOWN",
				}
			}
		}
	};
}

def_statuses! {
	Ok = 200, "OK";
	BadRequest = 400, "BAD_REQUEST";
	Unauthorized = 401, "UNAUTHORIZED";
	Forbidden = 403, "FORBIDDEN";
	NotFound = 404, "NOT_FOUND";
	UnprocessableEntity = 422, "UNPROCESSABLE_ENTITY";
	TooManyRequests = 429, "TOO_MANY_REQUESTS";
	InternalServerError = 500, "INTERNAL_SERVER_ERROR";
	NotImplemented = 501, "NOT_IMPLEMENTED";
	BadGateway = 502, "BAD_GATEWAY";
	ServiceUnavailable = 503, "SERVICE_UNAVAILABLE";
	GatewayTimeout = 504, "GATEWAY_TIMEOUT";
	VersionNotSupported = 505, "VERSION_NOT_SUPPORTED";
	VariantAlsoNegotiates = 506, "VARIANT_ALSO_NEGOTIATES";
	InsufficientStorage = 507, "INSUFFICIENT_STORAGE";
}
impl ResponseStatus {
	/// Returns `true` only for `200 OK`, the one status every operation accepts.
	pub fn is_ok(self) -> bool {
		matches!(self, Self::Ok)
	}
}
impl From<::http::StatusCode> for ResponseStatus {
	fn from(status: ::http::StatusCode) -> Self {
		Self::from_code(status.as_u16())
	}
}
impl Display for ResponseStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Other(code) => write!(f, "UNKNOWN({code})"),
			known => write!(f, "{}({})", known.name(), known.code()),
		}
	}
}

/// Returns the canonical reason phrase for a status, or an empty string.
pub(crate) fn reason_phrase(status: ::http::StatusCode) -> String {
	status.canonical_reason().unwrap_or_default().to_owned()
}
