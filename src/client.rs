//! Top-level client exposing one accessor per resource family.

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;
use crate::{
	_prelude::*,
	accessor::{Accessor, Companies, Invoices, Orders, Products, Subscriptions, UsageSummaries},
	broker::{IssuanceMetrics, TokenBroker},
	config::ClientConfig,
	gateway::Gateway,
	http::HttpTransport,
};

/// Client backed by the built-in blocking reqwest transport.
#[cfg(feature = "reqwest")]
pub type Pax8Client = Client<ReqwestTransport>;

/// Partner API client over the transport `T`.
///
/// Sessions are managed transparently: every request renews the token when the held one is
/// missing or expired. Results are never cached.
pub struct Client<T>
where
	T: ?Sized + HttpTransport,
{
	gateway: Gateway<T>,
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Builds a client that authenticates lazily on the first request.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let transport = ReqwestTransport::with_timeout(config.timeout)?;

		Ok(Self::with_transport(&config, Arc::new(transport)))
	}

	/// Builds a client and authenticates immediately.
	///
	/// A cache write failure is not fatal here: the client is returned holding the fresh token.
	pub fn connect(config: ClientConfig) -> Result<Self> {
		let client = Self::new(config)?;

		match client.renew_token(false) {
			Err(e) if !e.is_cache_warning() => Err(e),
			_ => Ok(client),
		}
	}
}
impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Builds a client over a caller-supplied transport.
	pub fn with_transport(config: &ClientConfig, transport: Arc<T>) -> Self {
		Self { gateway: Gateway::new(config, transport) }
	}

	/// Ensures a valid token, bypassing the in-memory one when `force` is set.
	pub fn renew_token(&self, force: bool) -> Result<()> {
		self.gateway.broker().ensure_valid(force)
	}

	/// Returns `true` while an unexpired token is held in memory.
	pub fn is_connected(&self) -> bool {
		self.gateway.broker().is_connected()
	}

	/// Returns the session broker.
	pub fn broker(&self) -> &TokenBroker<T> {
		self.gateway.broker()
	}

	/// Returns the token issuance counters.
	pub fn issuance_metrics(&self) -> &IssuanceMetrics {
		self.gateway.broker().metrics()
	}

	/// Returns the underlying gateway for calls not covered by an accessor.
	pub fn gateway(&self) -> &Gateway<T> {
		&self.gateway
	}

	/// Company operations.
	pub fn companies(&self) -> Companies<'_, T> {
		Accessor::new(&self.gateway)
	}

	/// Product operations.
	pub fn products(&self) -> Products<'_, T> {
		Accessor::new(&self.gateway)
	}

	/// Order operations.
	pub fn orders(&self) -> Orders<'_, T> {
		Accessor::new(&self.gateway)
	}

	/// Subscription operations.
	pub fn subscriptions(&self) -> Subscriptions<'_, T> {
		Accessor::new(&self.gateway)
	}

	/// Invoice operations.
	pub fn invoices(&self) -> Invoices<'_, T> {
		Accessor::new(&self.gateway)
	}

	/// Usage-summary operations.
	pub fn usage_summaries(&self) -> UsageSummaries<'_, T> {
		Accessor::new(&self.gateway)
	}
}
impl<T> Display for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.is_connected() {
			f.write_str("Pax8Client (Active)")
		} else {
			f.write_str("Pax8Client (Inactive)")
		}
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("gateway", &self.gateway).finish()
	}
}
