//! Authenticated `GET` requests against the resource and tenant APIs.
//!
//! Every call first asks the [`TokenBroker`] for a valid bundle, then sends the bundle's default
//! headers. Only `200 OK` is accepted; any other status becomes [`Error::UnexpectedResponse`]
//! carrying the decoded status, the reason phrase, and the raw body.

// self
use crate::{
	_prelude::*,
	broker::TokenBroker,
	config::{ClientConfig, Endpoints},
	error::{ConfigError, TransportError},
	http::{self, HttpRequest, HttpTransport, ResponseStatus},
	obs::{self, Operation, OperationSpan, Outcome},
};

/// Key of the item list inside a page envelope.
pub const CONTENT_KEY: &str = "content";

/// Selects which base URL a request is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Api {
	/// Resource API (`…/v1/`).
	Resource,
	/// Tenant-lookup API (`…/p8p/api/v3/`).
	Tenant,
}

/// Authenticated request gateway shared by every accessor.
pub struct Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	transport: Arc<T>,
	broker: TokenBroker<T>,
	endpoints: Endpoints,
}
impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a gateway and its broker over a shared transport.
	pub fn new(config: &ClientConfig, transport: Arc<T>) -> Self {
		Self {
			broker: TokenBroker::new(config, transport.clone()),
			transport,
			endpoints: config.endpoints.clone(),
		}
	}

	/// Returns the broker that supplies credentials.
	pub fn broker(&self) -> &TokenBroker<T> {
		&self.broker
	}

	/// Returns the configured endpoints.
	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}

	/// Resolves `segments` beneath the selected base URL, percent-encoding each segment.
	pub fn url(&self, api: Api, segments: &[&str]) -> Result<Url> {
		let (endpoint, base) = match api {
			Api::Resource => ("api", &self.endpoints.api),
			Api::Tenant => ("tenant", &self.endpoints.tenant),
		};
		let mut url = base.clone();

		url.path_segments_mut()
			.map_err(|_| ConfigError::NotABase { endpoint, url: base.to_string() })?
			.pop_if_empty()
			.extend(segments);

		Ok(url)
	}

	/// Fetches one JSON document.
	///
	/// `query` pairs are appended in order; an empty slice leaves the URL without a query string.
	pub fn get(&self, url: Url, query: &[(&'static str, String)]) -> Result<Value> {
		const OPERATION: Operation = Operation::ResourceGet;

		let _span = OperationSpan::new(OPERATION, "get").entered();

		obs::record_outcome(OPERATION, Outcome::Attempt);

		let result = self.fetch(url, query);

		match &result {
			Ok(_) => obs::record_outcome(OPERATION, Outcome::Success),
			Err(_) => obs::record_outcome(OPERATION, Outcome::Failure),
		}

		result
	}

	/// Fetches a list document; with `content_only` the page envelope is unwrapped to its items.
	///
	/// A missing `content` key yields an empty array.
	pub fn list(
		&self,
		url: Url,
		query: &[(&'static str, String)],
		content_only: bool,
	) -> Result<Value> {
		let document = self.get(url, query)?;

		if !content_only {
			return Ok(document);
		}

		Ok(match document {
			Value::Object(mut envelope) =>
				envelope.remove(CONTENT_KEY).unwrap_or_else(|| Value::Array(Vec::new())),
			other => other,
		})
	}

	fn authenticate(&self) -> Result<()> {
		match self.broker.ensure_valid(false) {
			// The fresh token is held in memory; the broker already reported the cache failure.
			Err(e) if e.is_cache_warning() => Ok(()),
			other => other,
		}
	}

	fn fetch(&self, mut url: Url, query: &[(&'static str, String)]) -> Result<Value> {
		self.authenticate()?;

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query);
		}

		let mut builder = ::http::Request::get(url.as_str())
			.header(::http::header::ACCEPT, "application/json");

		for (name, value) in self.broker.default_headers() {
			builder = builder.header(name, value);
		}

		let request: HttpRequest = builder.body(Vec::new()).map_err(ConfigError::from)?;
		let response = self
			.transport
			.execute(request)
			.map_err(|e| TransportError::network(url.as_str(), e))?;
		let status = ResponseStatus::from(response.status());

		if !status.is_ok() {
			#[cfg(feature = "tracing")]
			tracing::debug!(url = %url, status = %status, "unexpected API response");

			return Err(Error::UnexpectedResponse {
				status,
				reason: http::reason_phrase(response.status()),
				body: String::from_utf8_lossy(response.body()).into_owned(),
			});
		}

		let mut deserializer = serde_json::Deserializer::from_slice(response.body());

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::ResponseParse { source })
	}
}
impl<T> Debug for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gateway")
			.field("broker", &self.broker)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{collections::VecDeque, io};
	// self
	use super::*;
	use crate::auth::AUTHORIZATION;

	#[derive(Default)]
	struct RecordingTransport {
		responses: Mutex<VecDeque<(u16, String)>>,
		seen: Mutex<Vec<(String, Option<String>)>>,
	}
	impl RecordingTransport {
		fn with(responses: impl IntoIterator<Item = (u16, &'static str)>) -> Arc<Self> {
			Arc::new(Self {
				responses: Mutex::new(
					responses.into_iter().map(|(code, body)| (code, body.to_owned())).collect(),
				),
				..Default::default()
			})
		}

		fn urls(&self) -> Vec<String> {
			self.seen.lock().iter().map(|(url, _)| url.clone()).collect()
		}
	}
	impl HttpTransport for RecordingTransport {
		type TransportError = io::Error;

		fn execute(&self, request: HttpRequest) -> Result<::http::Response<Vec<u8>>, io::Error> {
			let authorization = request
				.headers()
				.get(AUTHORIZATION)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned);

			self.seen.lock().push((request.uri().to_string(), authorization));

			let (code, body) = self
				.responses
				.lock()
				.pop_front()
				.ok_or_else(|| io::Error::other("no scripted response left"))?;

			::http::Response::builder()
				.status(code)
				.body(body.into_bytes())
				.map_err(io::Error::other)
		}
	}

	const TOKEN: &str = r#"{"token_type":"Bearer","access_token":"abc","expires_in":3600}"#;

	fn gateway(transport: Arc<RecordingTransport>) -> Gateway<RecordingTransport> {
		let config = ClientConfig::builder("id", "secret")
			.token_endpoint("http://mock.test/oauth/token")
			.api_base("http://mock.test/v1")
			.tenant_base("http://mock.test/p8p/api/v3")
			.cache_token(false)
			.build()
			.expect("Test configuration should be valid.");

		Gateway::new(&config, transport)
	}

	#[test]
	fn urls_join_encoded_segments_under_each_base() {
		let gateway = gateway(RecordingTransport::with([]));

		assert_eq!(
			gateway.url(Api::Resource, &["companies", "a b/c"]).expect("URL should build.").as_str(),
			"http://mock.test/v1/companies/a%20b%2Fc"
		);
		assert_eq!(
			gateway
				.url(Api::Tenant, &["companies", "c-1", "msTenantId"])
				.expect("URL should build.")
				.as_str(),
			"http://mock.test/p8p/api/v3/companies/c-1/msTenantId"
		);
	}

	#[test]
	fn get_authenticates_once_and_sends_bearer_header() {
		let transport = RecordingTransport::with([(200, TOKEN), (200, r#"{"id":"1"}"#), (200, "{}")]);
		let gateway = gateway(transport.clone());
		let url = gateway.url(Api::Resource, &["companies"]).expect("URL should build.");

		gateway.get(url.clone(), &[]).expect("First GET should succeed.");
		gateway.get(url, &[("page", "0".into())]).expect("Second GET should succeed.");

		let seen = transport.seen.lock().clone();

		assert_eq!(seen.len(), 3);
		assert_eq!(seen[0].0, "http://mock.test/oauth/token");
		assert_eq!(
			seen[1],
			("http://mock.test/v1/companies".to_owned(), Some("Bearer abc".to_owned()))
		);
		assert_eq!(seen[2].0, "http://mock.test/v1/companies?page=0");
	}

	#[test]
	fn non_ok_status_maps_to_unexpected_response() {
		let transport = RecordingTransport::with([(200, TOKEN), (404, r#"{"message":"gone"}"#)]);
		let gateway = gateway(transport);
		let url = gateway.url(Api::Resource, &["companies", "missing"]).expect("URL should build.");
		let err = gateway.get(url, &[]).expect_err("404 should fail.");

		match err {
			Error::UnexpectedResponse { status, reason, body } => {
				assert_eq!(status, ResponseStatus::NotFound);
				assert_eq!(reason, "Not Found");
				assert_eq!(body, r#"{"message":"gone"}"#);
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn list_unwraps_content_only_when_asked() {
		let page = r#"{"content":[{"id":"1"}],"size":1,"totalElements":1,"totalPages":1,"number":0}"#;
		let transport = RecordingTransport::with([(200, TOKEN), (200, page), (200, page), (200, "{}")]);
		let gateway = gateway(transport.clone());
		let url = gateway.url(Api::Resource, &["orders"]).expect("URL should build.");

		assert_eq!(
			gateway.list(url.clone(), &[], true).expect("List should succeed."),
			serde_json::json!([{"id": "1"}])
		);
		assert!(
			gateway.list(url.clone(), &[], false).expect("List should succeed.").get("totalPages").is_some()
		);
		assert_eq!(gateway.list(url, &[], true).expect("List should succeed."), serde_json::json!([]));
		assert_eq!(transport.urls().len(), 4);
	}

	#[test]
	fn invalid_json_is_a_parse_error() {
		let transport = RecordingTransport::with([(200, TOKEN), (200, "<html>")]);
		let gateway = gateway(transport);
		let url = gateway.url(Api::Resource, &["products"]).expect("URL should build.");

		assert!(matches!(gateway.get(url, &[]), Err(Error::ResponseParse { .. })));
	}

	#[test]
	fn failed_issuance_stops_before_the_api_call() {
		let transport = RecordingTransport::with([(401, r#"{"error":"invalid_client"}"#)]);
		let gateway = gateway(transport.clone());
		let url = gateway.url(Api::Resource, &["products"]).expect("URL should build.");

		assert!(matches!(gateway.get(url, &[]), Err(Error::Authentication(_))));
		assert_eq!(transport.urls(), vec!["http://mock.test/oauth/token".to_owned()]);
	}
}
