//! Typed, blocking client for the Pax8 partner API: cached client-credentials sessions that survive
//! process restarts, and a schema-driven codec that turns untyped JSON into strongly typed resources.
//!
//! The crate is layered leaves-first:
//!
//! - [`store`] persists the credential bundle to disk.
//! - [`broker`] owns the bundle lifecycle and talks to the identity endpoint only when needed.
//! - [`gateway`] issues authenticated `GET` requests and maps non-200 responses to typed errors.
//! - [`codec`] materializes JSON into resources and serializes them back, driven by static schemas.
//! - [`accessor`] and [`client`] compose the above into per-family facades.

#![deny(clippy::all, missing_docs)]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

#[macro_use]
mod macros;

pub mod accessor;
pub mod auth;
pub mod broker;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod http;
pub mod model;
pub mod obs;
pub mod store;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::{env, process};
	// self
	use crate::{
		client::Pax8Client,
		config::{ClientConfig, ClientConfigBuilder},
	};

	/// Client identifier used by every test fixture.
	pub const TEST_CLIENT_ID: &str = "test-client";
	/// Client secret used by every test fixture.
	pub const TEST_CLIENT_SECRET: &str = "test-secret";

	/// Returns a config builder whose endpoints all point at the provided mock server base URL.
	///
	/// Token caching starts disabled so tests never touch the real home directory.
	pub fn mock_config(base: &str) -> ClientConfigBuilder {
		ClientConfig::builder(TEST_CLIENT_ID, TEST_CLIENT_SECRET)
			.token_endpoint(format!("{base}/oauth/token"))
			.api_base(format!("{base}/v1/"))
			.tenant_base(format!("{base}/p8p/api/v3/"))
			.cache_token(false)
	}

	/// Builds a lazily connecting client against the mock server base URL.
	pub fn build_test_client(base: &str) -> Pax8Client {
		let config = mock_config(base).build().expect("Mock client config should be valid.");

		Pax8Client::new(config).expect("Failed to build the test client.")
	}

	/// Renders a successful identity-endpoint response body.
	pub fn token_response(access_token: &str, expires_in: i64) -> String {
		serde_json::json!({
			"token_type": "Bearer",
			"access_token": access_token,
			"expires_in": expires_in,
		})
		.to_string()
	}

	/// Returns a unique, not-yet-existing cache path under the system temp directory.
	pub fn temp_cache_path(label: &str) -> PathBuf {
		let unique = format!(
			"pax8_client_{label}_{}_{}",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique).join("token.json")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		marker::PhantomData,
		path::{Path, PathBuf},
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Error as ReqwestError, blocking::Client as ReqwestClient};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
