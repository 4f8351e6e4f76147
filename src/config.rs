//! Client configuration: credentials, endpoints, token caching, and the request timeout.

// std
use std::env;
// self
use crate::{_prelude::*, error::ConfigError, http::DEFAULT_TIMEOUT, store::DEFAULT_CACHE_PATH};

/// Identity endpoint used for the client-credentials grant.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://login.pax8.com/oauth/token";
/// Base URL of the resource API.
pub const DEFAULT_API_BASE: &str = "https://api.pax8.com/v1/";
/// Base URL of the tenant-lookup API.
pub const DEFAULT_TENANT_BASE: &str = "https://app.pax8.com/p8p/api/v3/";
/// Audience requested for every token.
pub const DEFAULT_AUDIENCE: &str = "api://p8p.client";

/// Environment variable holding the client identifier.
pub const ENV_CLIENT_ID: &str = "PAX8_CLIENT_ID";
/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "PAX8_CLIENT_SECRET";
/// Optional environment variable overriding the token cache path.
pub const ENV_TOKEN_CACHE: &str = "PAX8_TOKEN_CACHE";

/// Endpoint set used by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
	/// Identity endpoint (`POST`).
	pub token: Url,
	/// Resource API base; always ends with `/`.
	pub api: Url,
	/// Tenant-lookup API base; always ends with `/`.
	pub tenant: Url,
}

/// Immutable, validated client configuration.
#[derive(Clone)]
pub struct ClientConfig {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: String,
	/// Audience sent with the client-credentials grant.
	pub audience: String,
	/// Endpoint definitions.
	pub endpoints: Endpoints,
	/// Token cache path; `None` disables on-disk caching.
	pub cache_path: Option<PathBuf>,
	/// Timeout applied to every outbound request.
	pub timeout: StdDuration,
}
impl ClientConfig {
	/// Creates a new builder for the provided credentials.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder::new(client_id, client_secret)
	}

	/// Builds a default configuration from `PAX8_CLIENT_ID`, `PAX8_CLIENT_SECRET`, and the optional
	/// `PAX8_TOKEN_CACHE` path.
	pub fn from_env() -> Result<Self, ConfigError> {
		let client_id =
			env::var(ENV_CLIENT_ID).map_err(|_| ConfigError::MissingEnv { name: ENV_CLIENT_ID })?;
		let client_secret = env::var(ENV_CLIENT_SECRET)
			.map_err(|_| ConfigError::MissingEnv { name: ENV_CLIENT_SECRET })?;
		let mut builder = Self::builder(client_id, client_secret);

		if let Some(path) = env::var_os(ENV_TOKEN_CACHE).filter(|path| !path.is_empty()) {
			builder = builder.cache_path(PathBuf::from(path));
		}

		builder.build()
	}
}
impl Debug for ClientConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientConfig")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("audience", &self.audience)
			.field("endpoints", &self.endpoints)
			.field("cache_path", &self.cache_path)
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Clone)]
pub struct ClientConfigBuilder {
	client_id: String,
	client_secret: String,
	audience: String,
	token_endpoint: String,
	api_base: String,
	tenant_base: String,
	cache_token: bool,
	cache_path: PathBuf,
	timeout: StdDuration,
}
impl ClientConfigBuilder {
	/// Creates a builder seeded with the production endpoints and caching enabled.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			audience: DEFAULT_AUDIENCE.into(),
			token_endpoint: DEFAULT_TOKEN_ENDPOINT.into(),
			api_base: DEFAULT_API_BASE.into(),
			tenant_base: DEFAULT_TENANT_BASE.into(),
			cache_token: true,
			cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Overrides the identity endpoint.
	pub fn token_endpoint(mut self, url: impl Into<String>) -> Self {
		self.token_endpoint = url.into();

		self
	}

	/// Overrides the resource API base URL.
	pub fn api_base(mut self, url: impl Into<String>) -> Self {
		self.api_base = url.into();

		self
	}

	/// Overrides the tenant-lookup API base URL.
	pub fn tenant_base(mut self, url: impl Into<String>) -> Self {
		self.tenant_base = url.into();

		self
	}

	/// Overrides the token audience.
	pub fn audience(mut self, audience: impl Into<String>) -> Self {
		self.audience = audience.into();

		self
	}

	/// Enables or disables the on-disk token cache.
	pub fn cache_token(mut self, enabled: bool) -> Self {
		self.cache_token = enabled;

		self
	}

	/// Sets the cache path (a leading `~` is expanded) and enables caching.
	pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.cache_path = path.into();
		self.cache_token = true;

		self
	}

	/// Overrides the per-request timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Validates the builder and produces a [`ClientConfig`].
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.client_id.trim().is_empty() {
			return Err(ConfigError::EmptyCredential { field: "client_id" });
		}
		if self.client_secret.trim().is_empty() {
			return Err(ConfigError::EmptyCredential { field: "client_secret" });
		}

		let endpoints = Endpoints {
			token: parse_url("token", &self.token_endpoint)?,
			api: parse_base("api", &self.api_base)?,
			tenant: parse_base("tenant", &self.tenant_base)?,
		};

		Ok(ClientConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			audience: self.audience,
			endpoints,
			cache_path: self.cache_token.then_some(self.cache_path),
			timeout: self.timeout,
		})
	}
}
impl Debug for ClientConfigBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientConfigBuilder")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("token_endpoint", &self.token_endpoint)
			.field("api_base", &self.api_base)
			.field("tenant_base", &self.tenant_base)
			.field("cache_token", &self.cache_token)
			.field("cache_path", &self.cache_path)
			.finish()
	}
}

fn parse_url(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { endpoint, source })
}

fn parse_base(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	let mut url = parse_url(endpoint, raw)?;

	if url.cannot_be_a_base() {
		return Err(ConfigError::NotABase { endpoint, url: raw.to_owned() });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	Ok(url)
}
