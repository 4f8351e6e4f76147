//! Client-credentials session management with on-disk caching.
//!
//! [`TokenBroker::ensure_valid`] guarantees that a valid [`CredentialBundle`] is held in memory
//! once it returns `Ok`. It resolves a bundle in three steps and stops at the first that succeeds:
//! the in-memory bundle (skipped when forced), the cache file, and finally one issuance request
//! against the identity endpoint. There are no retries; a failed issuance propagates as-is.

mod metrics;

pub use metrics::*;

// self
use crate::{
	_prelude::*,
	auth::CredentialBundle,
	config::ClientConfig,
	error::{AuthError, ConfigError, TransportError},
	http::{self, HttpRequest, HttpTransport},
	obs::{self, Operation, OperationSpan, Outcome},
	store::TokenStore,
};

const GRANT_TYPE: &str = "client_credentials";

#[derive(Serialize)]
struct TokenRequest<'a> {
	client_id: &'a str,
	client_secret: &'a str,
	audience: &'a str,
	grant_type: &'static str,
}

#[derive(Deserialize)]
struct TokenResponse {
	token_type: String,
	access_token: String,
	expires_in: i64,
}

/// Owns the credential lifecycle for one client identity.
pub struct TokenBroker<T>
where
	T: ?Sized + HttpTransport,
{
	transport: Arc<T>,
	client_id: String,
	client_secret: String,
	audience: String,
	token_endpoint: Url,
	store: Option<TokenStore>,
	bundle: Mutex<Option<CredentialBundle>>,
	metrics: Arc<IssuanceMetrics>,
}
impl<T> TokenBroker<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a broker for the configured identity, sharing `transport` with the caller.
	///
	/// Caching is enabled when the configuration carries a cache path.
	pub fn new(config: &ClientConfig, transport: Arc<T>) -> Self {
		Self {
			transport,
			client_id: config.client_id.clone(),
			client_secret: config.client_secret.clone(),
			audience: config.audience.clone(),
			token_endpoint: config.endpoints.token.clone(),
			store: config.cache_path.as_ref().map(TokenStore::new),
			bundle: Mutex::new(None),
			metrics: Default::default(),
		}
	}

	/// Guarantees a valid in-memory bundle, issuing a new token only when required.
	///
	/// With `force` set, the in-memory bundle is ignored but a valid cached bundle is still
	/// adopted. A [`Error::CacheWrite`] means the fresh token is held in memory but could not
	/// be persisted; the broker remains usable for this process.
	pub fn ensure_valid(&self, force: bool) -> Result<()> {
		let mut slot = self.bundle.lock();
		let now = OffsetDateTime::now_utc();

		if !force && slot.as_ref().is_some_and(|bundle| bundle.is_valid_at(now)) {
			return Ok(());
		}
		if let Some(cached) =
			self.store.as_ref().and_then(TokenStore::load).filter(|bundle| bundle.is_valid_at(now))
		{
			self.metrics.record_cache_hit();
			*slot = Some(cached);

			return Ok(());
		}

		let bundle = self.issue()?;
		let persisted = match &self.store {
			Some(store) => store.save(&bundle),
			None => Ok(()),
		};

		*slot = Some(bundle);

		persisted.map_err(|e| {
			#[cfg(feature = "tracing")]
			tracing::warn!(error = %e, "token issued but not cached");

			Error::CacheWrite(e)
		})
	}

	/// Returns `true` when the in-memory bundle is present and unexpired.
	pub fn is_connected(&self) -> bool {
		self.bundle.lock().as_ref().is_some_and(CredentialBundle::is_valid)
	}

	/// Returns a copy of the in-memory bundle, if any.
	pub fn bundle(&self) -> Option<CredentialBundle> {
		self.bundle.lock().clone()
	}

	/// Returns the headers to attach to authenticated requests.
	pub fn default_headers(&self) -> BTreeMap<String, String> {
		self.bundle.lock().as_ref().map(|bundle| bundle.default_headers.clone()).unwrap_or_default()
	}

	/// Returns the token cache, when caching is enabled.
	pub fn store(&self) -> Option<&TokenStore> {
		self.store.as_ref()
	}

	/// Returns the issuance counters.
	pub fn metrics(&self) -> &IssuanceMetrics {
		&self.metrics
	}

	fn issue(&self) -> Result<CredentialBundle> {
		const OPERATION: Operation = Operation::TokenIssue;

		let _span = OperationSpan::new(OPERATION, "issue").entered();

		obs::record_outcome(OPERATION, Outcome::Attempt);
		self.metrics.record_attempt();

		let result = self.request_token();

		match &result {
			Ok(_) => {
				obs::record_outcome(OPERATION, Outcome::Success);
				self.metrics.record_success();
			},
			Err(_) => {
				obs::record_outcome(OPERATION, Outcome::Failure);
				self.metrics.record_failure();
			},
		}

		result
	}

	fn request_token(&self) -> Result<CredentialBundle> {
		let payload = TokenRequest {
			client_id: &self.client_id,
			client_secret: &self.client_secret,
			audience: &self.audience,
			grant_type: GRANT_TYPE,
		};
		let body = serde_json::to_vec(&payload).map_err(ConfigError::RequestEncode)?;
		let request: HttpRequest = ::http::Request::post(self.token_endpoint.as_str())
			.header(::http::header::CONTENT_TYPE, "application/json")
			.header(::http::header::ACCEPT, "application/json")
			.body(body)
			.map_err(ConfigError::from)?;
		let response = self
			.transport
			.execute(request)
			.map_err(|e| TransportError::network(self.token_endpoint.as_str(), e))?;
		let status = response.status();

		if status != ::http::StatusCode::OK {
			return Err(AuthError::Rejected {
				status: status.as_u16(),
				reason: http::reason_phrase(status),
				body: String::from_utf8_lossy(response.body()).into_owned(),
			}
			.into());
		}

		let mut deserializer = serde_json::Deserializer::from_slice(response.body());
		let parsed: TokenResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::ResponseParse { source })?;

		Ok(CredentialBundle::issued(
			&parsed.token_type,
			&parsed.access_token,
			parsed.expires_in,
			OffsetDateTime::now_utc(),
		)?)
	}
}
impl<T> Debug for TokenBroker<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenBroker")
			.field("client_id", &self.client_id)
			.field("token_endpoint", &self.token_endpoint.as_str())
			.field("store", &self.store)
			.field("bundle", &*self.bundle.lock())
			.finish()
	}
}
